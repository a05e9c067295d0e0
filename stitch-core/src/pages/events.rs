use serde::Deserialize;

use crate::content::{Hero, PageMeta, SiteData, Text, flag};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/events.yaml`. Events are listed in source order; the page never
/// sorts them by date.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EventsPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub events: Vec<Event>,
    pub past_events: Vec<Event>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "flag")]
    pub featured: bool,
    /// `YYYY-MM-DD`
    pub date: Text,
    #[serde(rename = "type")]
    pub kind: Text,
    pub title: Text,
    pub description: Text,
    pub time: Text,
    pub location: Text,
    pub link: Text,
}

impl FromSource for EventsPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("events", Self::SECTIONS)
    }
}

impl PageBuilder for EventsPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "events", "past_events"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "UPCOMING_EVENTS",
        "PAST_EVENTS",
    ];

    fn slug(&self) -> String {
        "events.html".into()
    }

    fn template(&self) -> &'static str {
        "events.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values
            .insert("UPCOMING_EVENTS", sections::upcoming_events(&self.events))
            .insert("PAST_EVENTS", sections::past_events(&self.past_events));
    }
}
