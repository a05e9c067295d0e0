use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config::BuildConfig;
use crate::content::SiteData;
use crate::pages::blog::POST_DIR;
use crate::pages::{
    BlogPage, CommunityPage, ContactPage, DimPage, EventsPage, FromSource, GepPage, IndexPage,
    PageBuilder, PostPage, PrivacyPage, ResourcesPage, TeamPage,
};
use crate::partials::PartialRegistry;
use crate::source::{ContentError, ContentSource};
use crate::template::{self, TemplateError, TemplateSet};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("Could not write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

pub struct SiteBuilder {
    config: BuildConfig,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
        }
    }

    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.data = path.as_ref().to_path_buf();
        self
    }

    pub fn templates_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.templates = path.as_ref().to_path_buf();
        self
    }

    pub fn partials_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.partials = path.as_ref().to_path_buf();
        self
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.output = path.as_ref().to_path_buf();
        self
    }

    /// Loads the partials. They stay fixed for every page of the build.
    pub fn build(self) -> Result<Site, BuildError> {
        let partials = PartialRegistry::load(&self.config.partials)?;
        info!("Loaded {} partials from {}", partials.len(), self.config.partials.display());

        Ok(Site {
            source: ContentSource::new(&self.config.data),
            templates: TemplateSet::new(&self.config.templates),
            output_dir: self.config.output,
            partials,
        })
    }
}

pub struct Site {
    source: ContentSource,
    templates: TemplateSet,
    partials: PartialRegistry,
    output_dir: PathBuf,
}

impl Site {
    pub fn partials(&self) -> &PartialRegistry {
        &self.partials
    }

    fn write_page(&self, slug: &str, html: &str) -> Result<PathBuf, BuildError> {
        let output_path = self.output_dir.join(slug);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BuildError::Write(parent.to_path_buf(), e))?;
        }
        std::fs::write(&output_path, html)
            .map_err(|e| BuildError::Write(output_path.clone(), e))?;

        info!("  Built: {slug}");
        Ok(output_path)
    }

    fn render_with<P: PageBuilder>(
        &self,
        page: &P,
        template: &str,
        site: &SiteData,
    ) -> Result<PathBuf, BuildError> {
        let values = page.replacements(site);
        let html = template::render(template, &self.partials, &values);
        self.write_page(&page.slug(), &html)
    }

    /// Loads one fixed page's records and template, renders and writes it.
    fn render_page<P: PageBuilder + FromSource>(
        &self,
        site: &SiteData,
    ) -> Result<PathBuf, BuildError> {
        let page = P::load(&self.source)?;
        info!("Building {}...", page.slug());
        let template = self.templates.load(page.template())?;
        self.render_with(&page, &template, site)
    }

    /// One page per record in `posts/`, all sharing the post template.
    fn render_posts(&self, site: &SiteData) -> Result<Vec<PathBuf>, BuildError> {
        info!("Building blog posts...");
        let Some(posts) = self.source.posts()? else {
            info!("  No posts directory found");
            return Ok(Vec::new());
        };

        let template = self.templates.load("post.html")?;
        let mut written = Vec::with_capacity(posts.len());
        for (stem, post) in posts {
            let page = PostPage::new(post, &stem);
            written.push(self.render_with(&page, &template, site)?);
        }

        Ok(written)
    }

    /// Rebuilds every page. Returns the written files in build order.
    pub fn render_all(&self) -> Result<Vec<PathBuf>, BuildError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| BuildError::Write(self.output_dir.clone(), e))?;
        std::fs::create_dir_all(self.output_dir.join(POST_DIR))
            .map_err(|e| BuildError::Write(self.output_dir.join(POST_DIR), e))?;

        let site = self.source.site()?;
        let mut written = vec![
            self.render_page::<IndexPage>(&site)?,
            self.render_page::<CommunityPage>(&site)?,
            self.render_page::<BlogPage>(&site)?,
            self.render_page::<ContactPage>(&site)?,
            self.render_page::<DimPage>(&site)?,
            self.render_page::<PrivacyPage>(&site)?,
        ];
        written.extend(self.render_posts(&site)?);
        written.push(self.render_page::<TeamPage>(&site)?);
        written.push(self.render_page::<ResourcesPage>(&site)?);
        written.push(self.render_page::<EventsPage>(&site)?);
        written.push(self.render_page::<GepPage>(&site)?);

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let site = SiteBuilder::new()
            .data_dir(dir.path().join("data"))
            .templates_dir(dir.path().join("templates"))
            .partials_dir(dir.path().join("partials"))
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        let err = site.render_all().unwrap_err();
        assert!(matches!(
            err,
            BuildError::Template(TemplateError::Missing(ref p)) if p.ends_with("index.html")
        ));
        assert!(!dir.path().join("out/index.html").exists());
    }

    #[test]
    fn test_config_sets_every_dir() {
        let config = BuildConfig {
            data: "d".into(),
            templates: "t".into(),
            partials: "p".into(),
            output: "o".into(),
        };
        let builder = SiteBuilder::new().config(config.clone());
        assert_eq!(builder.config, config);
    }
}
