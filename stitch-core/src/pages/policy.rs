//! Policy pages: privacy notice and gender equality plan.

use serde::Deserialize;

use crate::content::{Hero, PageMeta, SiteData, Text};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/privacy.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PrivacyPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub sections: Vec<PolicySection>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PolicySection {
    pub title: Text,
    pub content: Text,
}

/// `pages/gep.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GepPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub sections: Vec<GepSection>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GepSection {
    pub number: Text,
    pub title: Text,
    pub subtitle: Option<Text>,
    pub items: Vec<Text>,
}

impl FromSource for PrivacyPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("privacy", Self::SECTIONS)
    }
}

impl PageBuilder for PrivacyPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "sections"];
    const TOKENS: &'static [&'static str] =
        &["HERO_HEADLINE", "HERO_SUBHEADLINE", "HERO_DESCRIPTION", "PRIVACY_SECTIONS"];

    fn slug(&self) -> String {
        "privacy.html".into()
    }

    fn template(&self) -> &'static str {
        "privacy.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values.insert("PRIVACY_SECTIONS", sections::privacy_sections(&self.sections));
    }
}

impl FromSource for GepPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("gep", Self::SECTIONS)
    }
}

impl PageBuilder for GepPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "sections"];
    const TOKENS: &'static [&'static str] =
        &["HERO_HEADLINE", "HERO_SUBHEADLINE", "HERO_DESCRIPTION", "GEP_SECTIONS"];

    fn slug(&self) -> String {
        "gep.html".into()
    }

    fn template(&self) -> &'static str {
        "gep.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values.insert("GEP_SECTIONS", sections::gep_sections(&self.sections));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{assert_contract, site};

    #[test]
    fn test_privacy_sections() {
        let page: PrivacyPage = serde_yaml::from_str(
            r#"
page: { title: Privacy }
sections:
  - title: Data
    content: We keep little.
  - title: Cookies
    content: None.
"#,
        )
        .unwrap();
        let values = page.replacements(&site());
        let html = values.get("PRIVACY_SECTIONS").unwrap();
        assert!(html.contains(r#"data-aos-delay="0""#));
        assert!(html.contains(r#"data-aos-delay="50""#));
        assert!(html.find("Data").unwrap() < html.find("Cookies").unwrap());
        assert_contract(&page, &site());
    }

    #[test]
    fn test_gep_numbers_keep_spelling() {
        let page: GepPage = serde_yaml::from_str(
            r#"
sections:
  - number: "01"
    title: Commitment
    items: [One, Two]
"#,
        )
        .unwrap();
        let values = page.replacements(&site());
        assert!(values.get("GEP_SECTIONS").unwrap().contains(">01</span>"));
        assert_contract(&page, &site());
    }
}
