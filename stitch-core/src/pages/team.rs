use serde::Deserialize;

use crate::content::{Hero, IconCard, PageMeta, SiteData, Text};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/team.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TeamPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub mission: Mission,
    pub story: Story,
    pub team: Vec<TeamMember>,
    pub partners: Vec<Partner>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Mission {
    pub title: Text,
    pub description: Text,
    pub points: Vec<IconCard>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Story {
    pub title: Text,
    pub content: Option<Text>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TeamMember {
    pub name: Text,
    pub role: Text,
    pub bio: Text,
    pub social: Option<TeamSocial>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TeamSocial {
    pub linkedin: Option<Text>,
    pub twitter: Option<Text>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Partner {
    pub name: Text,
    pub description: Text,
}

impl FromSource for TeamPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("team", Self::SECTIONS)
    }
}

impl PageBuilder for TeamPage {
    const SECTIONS: &'static [&'static str] =
        &["page", "hero", "mission", "story", "team", "partners"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "MISSION_TITLE",
        "MISSION_DESCRIPTION",
        "MISSION_POINTS",
        "STORY_TITLE",
        "STORY_CONTENT",
        "TEAM_CARDS",
        "PARTNERS",
    ];

    fn slug(&self) -> String {
        "team.html".into()
    }

    fn template(&self) -> &'static str {
        "team.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        let mission = &self.mission;
        hero_tokens(values, &self.hero);
        values
            .insert("MISSION_TITLE", &mission.title)
            .insert("MISSION_DESCRIPTION", &mission.description)
            .insert("MISSION_POINTS", sections::mission_points(&mission.points))
            .insert("STORY_TITLE", &self.story.title)
            .insert("STORY_CONTENT", sections::story_content(self.story.content.as_deref()))
            .insert("TEAM_CARDS", sections::team_cards(&self.team))
            .insert("PARTNERS", sections::partners(&self.partners));
    }
}
