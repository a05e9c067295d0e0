use serde::Deserialize;

use crate::content::{Card, FilterOption, Hero, PageMeta, SiteData, SocialProfiles, Text};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// `pages/community.yaml` plus the member directory in `members.yaml`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CommunityPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub roles: Vec<Role>,
    pub benefits: Vec<Card>,
    #[serde(skip)]
    pub directory: MemberDirectory,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Role {
    pub icon: Text,
    pub title: Text,
    pub description: Text,
    pub cta: Text,
}

/// `members.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct MemberDirectory {
    pub filters: DirectoryFilters,
    pub members: Vec<Member>,
}

impl MemberDirectory {
    pub const SECTIONS: &'static [&'static str] = &["filters", "members"];
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DirectoryFilters {
    pub roles: Vec<FilterOption>,
    pub countries: Vec<FilterOption>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Member {
    pub name: Text,
    pub role: Text,
    pub country: Text,
    pub organization: Option<Text>,
    pub bio: Text,
    pub expertise: Vec<Text>,
    pub social: Option<SocialProfiles>,
}

impl FromSource for CommunityPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        let mut page: CommunityPage = source.page("community", Self::SECTIONS)?;
        page.directory = source.checked_record("members.yaml", MemberDirectory::SECTIONS)?;
        Ok(page)
    }
}

impl PageBuilder for CommunityPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "roles", "benefits"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "ROLES",
        "BENEFITS",
        "ROLE_FILTERS",
        "COUNTRY_FILTERS",
        "MEMBER_CARDS",
    ];

    fn slug(&self) -> String {
        "community.html".into()
    }

    fn template(&self) -> &'static str {
        "community.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        let directory = &self.directory;
        hero_tokens(values, &self.hero);
        values
            .insert("ROLES", sections::roles(&self.roles))
            .insert("BENEFITS", sections::benefits(&self.benefits))
            .insert("ROLE_FILTERS", sections::filter_options(&directory.filters.roles))
            .insert("COUNTRY_FILTERS", sections::filter_options(&directory.filters.countries))
            .insert("MEMBER_CARDS", sections::member_cards(&directory.members));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{assert_contract, site};

    const MEMBERS_YAML: &str = r#"
filters:
  roles:
    - id: artist
      name: Artist
  countries:
    - id: nl
      name: Netherlands
members:
  - name: Ada Lovelace
    role: scientist
    country: uk
    bio: Counted things.
    expertise: [maths]
    social:
      github: https://github.com/ada
  - name: Bo Diddley
    role: artist
    country: us
    bio: Played things.
"#;

    #[test]
    fn test_directory_tokens() {
        let page = CommunityPage {
            page: PageMeta { title: "Community".into(), description: "Join".into() },
            directory: serde_yaml::from_str(MEMBERS_YAML).unwrap(),
            ..Default::default()
        };
        let values = page.replacements(&site());
        assert_eq!(values.get("PAGE_TITLE"), Some("Community"));
        assert_eq!(values.get("ROLE_FILTERS"), Some(r#"<option value="artist">Artist</option>"#));
        let cards = values.get("MEMBER_CARDS").unwrap();
        assert!(cards.find("Ada Lovelace").unwrap() < cards.find("Bo Diddley").unwrap());
        assert_eq!(cards.matches("member-social").count(), 1);
        assert_eq!(values.get("ROLES"), Some(""));
        assert_contract(&page, &site());
    }

    #[test]
    fn test_empty_page() {
        assert_contract(&CommunityPage::default(), &SiteData::default());
    }
}
