use serde::Deserialize;

use crate::content::{Hero, IconCard, Location, PageMeta, SiteData, Text, present};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// Form id written into the contact form until a real one is configured.
pub const DEFAULT_FORMSPREE_ID: &str = "your-form-id";

/// `pages/contact.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ContactPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub contact_info: ContactInfo,
    pub reasons: Vec<IconCard>,
    pub locations: Vec<Location>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Text,
    pub phone: Text,
    pub formspree_id: Option<Text>,
}

impl FromSource for ContactPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("contact", Self::SECTIONS)
    }
}

impl PageBuilder for ContactPage {
    const SECTIONS: &'static [&'static str] =
        &["page", "hero", "contact_info", "reasons", "locations"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "CONTACT_EMAIL",
        "CONTACT_PHONE",
        "FORMSPREE_ID",
        "REASONS",
        "CONTACT_LOCATIONS",
    ];

    fn slug(&self) -> String {
        "contact.html".into()
    }

    fn template(&self) -> &'static str {
        "contact.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        let info = &self.contact_info;
        hero_tokens(values, &self.hero);
        values
            .insert("CONTACT_EMAIL", &info.email)
            .insert("CONTACT_PHONE", &info.phone)
            .insert(
                "FORMSPREE_ID",
                present(&info.formspree_id).unwrap_or(DEFAULT_FORMSPREE_ID),
            )
            .insert("REASONS", sections::reasons(&self.reasons))
            .insert("CONTACT_LOCATIONS", sections::contact_locations(&self.locations));
    }
}
