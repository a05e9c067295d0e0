//! Builds a static site by stitching YAML content into HTML templates.
//!
//! A build loads the shared partials once, then renders every page type in a
//! fixed order: each page reads its records, turns list fields into HTML with
//! the [`sections`] generators, and fills its template through the
//! two-phase [`template`] engine.

pub mod builder;
pub mod config;
pub mod content;
pub mod pages;
pub mod partials;
pub mod sections;
pub mod source;
pub mod template;

// Re-export main types
pub use builder::{BuildError, Site, SiteBuilder};
pub use config::{BuildConfig, ConfigError};
pub use content::{SiteData, Text};
pub use pages::{FromSource, PageBuilder};
pub use partials::PartialRegistry;
pub use source::{ContentError, ContentSource};
pub use template::{ReplacementMap, TemplateError, TemplateSet};

/// Runs one full build with the given layout.
pub fn build_site(config: &BuildConfig) -> Result<Vec<std::path::PathBuf>, BuildError> {
    SiteBuilder::new().config(config.clone()).build()?.render_all()
}
