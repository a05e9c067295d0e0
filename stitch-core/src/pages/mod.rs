//! Page types and the replacement maps they assemble.
//!
//! Each page type is the typed shape of its data file. It declares the
//! sections of that file it reads and the tokens it fills; every page also
//! fills [`COMMON_TOKENS`] from the site record.

pub mod blog;
pub mod community;
pub mod contact;
pub mod dim;
pub mod events;
pub mod index;
pub mod policy;
pub mod resources;
pub mod team;

use crate::content::{Hero, SiteData};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

pub use blog::{BlogPage, Post, PostPage, PostSummary};
pub use community::{CommunityPage, Member, MemberDirectory, Role};
pub use contact::ContactPage;
pub use dim::{DimPage, Generation, IntroPoint};
pub use events::{Event, EventsPage};
pub use index::{IndexPage, Stat};
pub use policy::{GepPage, GepSection, PolicySection, PrivacyPage};
pub use resources::{Resource, ResourcesPage};
pub use team::{Partner, TeamMember, TeamPage, TeamSocial};

/// Tokens every page fills, whatever its type.
pub const COMMON_TOKENS: &[&str] = &[
    "PATH_PREFIX",
    "PAGE_SLUG",
    "PAGE_TITLE",
    "PAGE_DESCRIPTION",
    "SITE_NAME",
    "SITE_TAGLINE",
    "SITE_DESCRIPTION",
    "SITE_URL",
    "SITE_EMAIL",
    "SITE_PHONE",
    "NAV_LINKS",
    "FOOTER_NAV_LINKS",
    "FOOTER_DESCRIPTION",
    "SOCIAL_LINKS",
    "FOOTER_SOCIAL_LINKS",
    "FOOTER_LOCATIONS",
    "FOOTER_LEGAL",
];

/// A page rendered from one template and one replacement map.
pub trait PageBuilder {
    /// Top-level sections of the page's data file this page reads. Other
    /// sections are reported when the file is loaded.
    const SECTIONS: &'static [&'static str];
    /// Tokens this page fills in addition to [`COMMON_TOKENS`].
    const TOKENS: &'static [&'static str];

    /// Output path relative to the output directory, e.g. `post/hello.html`.
    fn slug(&self) -> String;

    /// Template file name.
    fn template(&self) -> &'static str;

    /// Prefix that turns root-relative links into links valid from this page.
    fn path_prefix(&self) -> &'static str {
        ""
    }

    /// Page title and meta description.
    fn meta(&self, site: &SiteData) -> (String, String);

    /// Fills this page's own tokens.
    fn page_tokens(&self, values: &mut ReplacementMap);

    fn replacements(&self, site: &SiteData) -> ReplacementMap {
        let prefix = self.path_prefix();
        let (title, description) = self.meta(site);
        let info = &site.site;
        let footer = &site.footer;

        let mut values = ReplacementMap::new();
        values
            .insert("PATH_PREFIX", prefix)
            .insert("PAGE_SLUG", self.slug())
            .insert("PAGE_TITLE", title)
            .insert("PAGE_DESCRIPTION", description)
            .insert("SITE_NAME", &info.name)
            .insert("SITE_TAGLINE", &info.tagline)
            .insert("SITE_DESCRIPTION", &info.description)
            .insert("SITE_URL", &info.url)
            .insert("SITE_EMAIL", &info.email)
            .insert("SITE_PHONE", &info.phone)
            .insert("NAV_LINKS", sections::nav_links(&site.nav, prefix))
            .insert("FOOTER_NAV_LINKS", sections::footer_nav_links(&site.nav, prefix))
            .insert("FOOTER_DESCRIPTION", &footer.description)
            .insert("SOCIAL_LINKS", sections::social_links(&footer.social))
            .insert("FOOTER_SOCIAL_LINKS", sections::footer_social_links(&footer.social))
            .insert("FOOTER_LOCATIONS", sections::locations(&footer.locations))
            .insert("FOOTER_LEGAL", &footer.legal);

        self.page_tokens(&mut values);
        values
    }
}

/// A page whose content comes from fixed data files.
pub trait FromSource: Sized {
    fn load(source: &ContentSource) -> Result<Self, ContentError>;
}

pub(crate) fn hero_tokens(values: &mut ReplacementMap, hero: &Hero) {
    values
        .insert("HERO_HEADLINE", &hero.headline)
        .insert("HERO_SUBHEADLINE", &hero.subheadline)
        .insert("HERO_DESCRIPTION", &hero.description);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeSet;

    use super::*;
    use crate::content::{Footer, Location, NavLink, SiteInfo, SocialLink};
    use crate::partials::PartialRegistry;
    use crate::template;

    pub fn site() -> SiteData {
        SiteData {
            site: SiteInfo {
                name: "Drog".into(),
                tagline: "Art meets science".into(),
                description: "A community".into(),
                url: "https://drog.example".into(),
                email: "hi@drog.example".into(),
                phone: "+31 20 000 0000".into(),
            },
            nav: vec![
                NavLink { url: "index.html".into(), text: "Home".into() },
                NavLink { url: "blog.html".into(), text: "Blog".into() },
            ],
            footer: Footer {
                description: "Footer text".into(),
                social: vec![SocialLink { platform: "github".into(), url: "https://github.com/drog".into() }],
                locations: vec![Location { name: "HQ".into(), address: "Street 1\nCity".into() }],
                legal: "(c) Drog".into(),
            },
        }
    }

    /// Checks the page fills exactly the common tokens plus its own, and
    /// that a template naming all of them renders without leftovers.
    pub fn assert_contract<P: PageBuilder>(page: &P, site: &SiteData) {
        let values = page.replacements(site);
        let filled: BTreeSet<&str> = values.tokens().collect();
        let declared: BTreeSet<&str> =
            COMMON_TOKENS.iter().chain(P::TOKENS.iter()).copied().collect();
        assert_eq!(filled, declared);

        let template: String = declared
            .iter()
            .map(|t| format!("<x>{{{{{t}}}}}</x>{{{{>header}}}}"))
            .chain(std::iter::once("{{UNDECLARED_TOKEN}}".to_string()))
            .collect();
        let partials = PartialRegistry::from_fragments([("header", "<h>{{SITE_NAME}}</h>")]);
        let html = template::render(&template, &partials, &values);
        assert!(!html.contains("{{"), "unresolved token in {html}");
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
        assert!(html.contains(&format!("<h>{}</h>", site.site.name)));
    }
}
