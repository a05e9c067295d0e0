use serde::Deserialize;

use crate::content::{Card, Hero, Link, SiteData, Text};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// Rotating words in the home page headline when `site.yaml` names none.
pub const DEFAULT_TYPED_WORDS: [&str; 5] =
    ["Practitioners", "Scientists", "Donors", "Artists", "Creative Techs"];

/// The home page, read from the home sections of `site.yaml`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IndexPage {
    pub hero: HomeHero,
    pub about: About,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HomeHero {
    #[serde(flatten)]
    pub hero: Hero,
    pub cta_primary: Option<Link>,
    pub cta_secondary: Option<Link>,
    pub typed_words: Option<Vec<Text>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct About {
    pub title: Text,
    pub description: Text,
    pub points: Vec<Card>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Stat {
    pub value: Text,
    pub label: Text,
}

impl IndexPage {
    /// JSON array of the headline's rotating words.
    pub fn typed_words(&self) -> String {
        let words: Vec<&str> = match &self.hero.typed_words {
            Some(words) => words.iter().map(Text::as_str).collect(),
            None => DEFAULT_TYPED_WORDS.to_vec(),
        };
        serde_json::to_string(&words).expect("a list of strings always serializes")
    }
}

impl FromSource for IndexPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.checked_record("site.yaml", Self::SECTIONS)
    }
}

impl PageBuilder for IndexPage {
    const SECTIONS: &'static [&'static str] = &["site", "nav", "footer", "hero", "about", "stats"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "CTA_PRIMARY_TEXT",
        "CTA_PRIMARY_URL",
        "CTA_SECONDARY_TEXT",
        "CTA_SECONDARY_URL",
        "ABOUT_TITLE",
        "ABOUT_DESCRIPTION",
        "ABOUT_POINTS",
        "STATS",
        "TYPED_WORDS",
    ];

    fn slug(&self) -> String {
        "index.html".into()
    }

    fn template(&self) -> &'static str {
        "index.html"
    }

    fn meta(&self, site: &SiteData) -> (String, String) {
        (site.site.tagline.to_string(), site.site.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        let hero = &self.hero;
        hero_tokens(values, &hero.hero);
        values
            .insert_opt("CTA_PRIMARY_TEXT", hero.cta_primary.as_ref().map(|l| &l.text))
            .insert_opt("CTA_PRIMARY_URL", hero.cta_primary.as_ref().map(|l| &l.url))
            .insert_opt("CTA_SECONDARY_TEXT", hero.cta_secondary.as_ref().map(|l| &l.text))
            .insert_opt("CTA_SECONDARY_URL", hero.cta_secondary.as_ref().map(|l| &l.url))
            .insert("ABOUT_TITLE", &self.about.title)
            .insert("ABOUT_DESCRIPTION", &self.about.description)
            .insert("ABOUT_POINTS", sections::about_points(&self.about.points))
            .insert("STATS", sections::stats(&self.stats))
            .insert("TYPED_WORDS", self.typed_words());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{assert_contract, site};

    const SITE_YAML: &str = r#"
site:
  name: Drog
hero:
  headline: Where art meets science
  cta_primary:
    text: Join
    url: community.html
  typed_words: [Makers, Dreamers]
about:
  title: About us
  points:
    - title: One
      description: First point
stats:
  - value: 500
    label: Members
"#;

    #[test]
    fn test_reads_home_sections() {
        let page: IndexPage = serde_yaml::from_str(SITE_YAML).unwrap();
        let values = page.replacements(&site());
        assert_eq!(values.get("PAGE_TITLE"), Some("Art meets science"));
        assert_eq!(values.get("PAGE_DESCRIPTION"), Some("A community"));
        assert_eq!(values.get("HERO_HEADLINE"), Some("Where art meets science"));
        assert_eq!(values.get("CTA_PRIMARY_URL"), Some("community.html"));
        assert_eq!(values.get("CTA_SECONDARY_URL"), Some(""));
        assert_eq!(values.get("TYPED_WORDS"), Some(r#"["Makers","Dreamers"]"#));
        assert!(values.get("STATS").unwrap().contains(r#"<div class="stat-value">500</div>"#));
        assert!(values.get("ABOUT_POINTS").unwrap().contains("<h4>One</h4>"));
        assert_contract(&page, &site());
    }

    #[test]
    fn test_defaults() {
        let page = IndexPage::default();
        assert_eq!(
            page.typed_words(),
            r#"["Practitioners","Scientists","Donors","Artists","Creative Techs"]"#
        );
        let values = page.replacements(&site());
        assert_eq!(values.get("STATS"), Some(""));
        assert_eq!(values.get("CTA_PRIMARY_TEXT"), Some(""));
        assert_contract(&page, &site());
    }
}
