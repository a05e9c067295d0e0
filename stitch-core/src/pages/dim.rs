use serde::Deserialize;

use crate::content::{Hero, PageMeta, SiteData, Text};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/dim.yaml`: the deficit-model timeline.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DimPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub intro: Intro,
    pub generations: Vec<Generation>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Intro {
    pub title: Text,
    pub points: Vec<IntroPoint>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IntroPoint {
    pub title: Text,
    pub description: Option<Text>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Generation {
    #[serde(rename = "gen")]
    pub generation: Text,
    pub year: Text,
    pub solution: Text,
    pub problem: Text,
    pub deficit_model: Text,
    pub description: Text,
}

impl FromSource for DimPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("dim", Self::SECTIONS)
    }
}

impl PageBuilder for DimPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "intro", "generations"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "INTRO_TITLE",
        "INTRO_POINTS",
        "GENERATIONS",
    ];

    fn slug(&self) -> String {
        "dim.html".into()
    }

    fn template(&self) -> &'static str {
        "dim.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values
            .insert("INTRO_TITLE", &self.intro.title)
            .insert("INTRO_POINTS", sections::intro_points(&self.intro.points))
            .insert("GENERATIONS", sections::generations(&self.generations));
    }
}
