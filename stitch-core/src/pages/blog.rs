use serde::Deserialize;

use crate::content::{Category, Hero, PageMeta, SiteData, Text, present};
use crate::pages::{FromSource, PageBuilder, hero_tokens};
use crate::sections;
use crate::source::{ContentError, ContentSource};
use crate::template::ReplacementMap;

/// Output subdirectory for post pages.
pub const POST_DIR: &str = "post";

/// `pages/blog.yaml`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BlogPage {
    pub page: PageMeta,
    pub hero: Hero,
    pub categories: Vec<Category>,
    pub posts: Vec<PostSummary>,
}

/// A post as listed on the blog page.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PostSummary {
    pub title: Text,
    pub subtitle: Option<Text>,
    pub excerpt: Text,
    pub category: Option<Text>,
    pub tags: Option<Vec<Text>>,
    pub slug: Text,
}

impl FromSource for BlogPage {
    fn load(source: &ContentSource) -> Result<Self, ContentError> {
        source.page("blog", Self::SECTIONS)
    }
}

impl PageBuilder for BlogPage {
    const SECTIONS: &'static [&'static str] = &["page", "hero", "categories", "posts"];
    const TOKENS: &'static [&'static str] = &[
        "HERO_HEADLINE",
        "HERO_SUBHEADLINE",
        "HERO_DESCRIPTION",
        "BLOG_CATEGORIES",
        "POSTS",
    ];

    fn slug(&self) -> String {
        "blog.html".into()
    }

    fn template(&self) -> &'static str {
        "blog.html"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.page.title.to_string(), self.page.description.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        hero_tokens(values, &self.hero);
        values
            .insert("BLOG_CATEGORIES", sections::category_filters(&self.categories))
            .insert("POSTS", sections::post_cards(&self.posts, self.path_prefix()));
    }
}

/// One record of `posts/*.yaml`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Post {
    pub title: Text,
    pub subtitle: Option<Text>,
    pub slug: Text,
    pub date: Text,
    pub author: Text,
    pub excerpt: Text,
    pub content: Text,
}

/// A post rendered on its own page, one directory below the site root.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub post: Post,
    slug: String,
}

impl PostPage {
    /// `fallback_slug` names the page when the record has no `slug`,
    /// usually the data file's stem.
    pub fn new(post: Post, fallback_slug: &str) -> Self {
        let slug = if post.slug.is_empty() {
            fallback_slug.to_string()
        } else {
            post.slug.to_string()
        };
        Self { post, slug }
    }

    pub fn post_slug(&self) -> &str {
        &self.slug
    }
}

impl PageBuilder for PostPage {
    const SECTIONS: &'static [&'static str] =
        &["title", "subtitle", "slug", "date", "author", "excerpt", "content"];
    const TOKENS: &'static [&'static str] = &[
        "POST_TITLE",
        "POST_SUBTITLE_HTML",
        "POST_SLUG",
        "POST_DATE",
        "POST_AUTHOR",
        "POST_EXCERPT",
        "POST_CONTENT",
    ];

    fn slug(&self) -> String {
        format!("{POST_DIR}/{}.html", self.slug)
    }

    fn template(&self) -> &'static str {
        "post.html"
    }

    fn path_prefix(&self) -> &'static str {
        "../"
    }

    fn meta(&self, _site: &SiteData) -> (String, String) {
        (self.post.title.to_string(), self.post.excerpt.to_string())
    }

    fn page_tokens(&self, values: &mut ReplacementMap) {
        let post = &self.post;
        let subtitle = present(&post.subtitle).map(|s| {
            format!(r#"<p class="hero-subtitle" style="color: var(--color-mint);">{s}</p>"#)
        });
        values
            .insert("POST_TITLE", &post.title)
            .insert_opt("POST_SUBTITLE_HTML", subtitle)
            .insert("POST_SLUG", &self.slug)
            .insert("POST_DATE", &post.date)
            .insert("POST_AUTHOR", &post.author)
            .insert("POST_EXCERPT", &post.excerpt)
            .insert("POST_CONTENT", &post.content);
    }
}
