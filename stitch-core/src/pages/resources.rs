use serde::Deserialize;

use crate::content::{Category, Hero, PageMeta, SiteData, Text, flag};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/resources.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ResourcesPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub categories: Vec<Category>,
    pub resources: Vec<Resource>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "flag")]
    pub featured: bool,
    pub category: Text,
    #[serde(rename = "type")]
    pub kind: Text,
    pub title: Text,
    pub description: Text,
    pub link: Text,
}

impl FromSource for ResourcesPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("resources", Self::SECTIONS)
    }
}

impl PageBuilder for ResourcesPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "categories", "resources"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "CATEGORY_FILTERS",
        "RESOURCES",
    ];

    fn slug(&self) -> String {
        "resources.html".into()
    }

    fn template(&self) -> &'static str {
        "resources.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values
            .insert("CATEGORY_FILTERS", sections::category_filters(&self.categories))
            .insert("RESOURCES", sections::resources(&self.resources));
    }
}
