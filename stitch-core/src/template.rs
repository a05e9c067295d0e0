//! Two-phase placeholder rendering.
//!
//! Templates carry two kinds of tokens:
//!
//! - `{{>name}}` pulls in a shared fragment from the [`PartialRegistry`].
//! - `{{NAME}}` is replaced by the page's value for `NAME`. Unfilled
//!   upper-case names render empty.
//!
//! Partials are injected first because they may contain value tokens
//! themselves. Values are then substituted in a single pass over the
//! template: substituted text is never scanned again, so the result does not
//! depend on the order entries were added to the [`ReplacementMap`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::partials::{PARTIAL_NAMES, PartialRegistry};

static PARTIAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{>([A-Za-z0-9_-]+)\}\}").expect("valid partial pattern"));
static VALUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}>][^{}]*)\}\}").expect("valid value pattern"));

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template `{0}` not found")]
    Missing(PathBuf),
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Token name to final value, built fresh for every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacementMap {
    values: BTreeMap<String, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `{{token}}`, replacing any earlier value.
    pub fn insert(&mut self, token: &str, value: impl fmt::Display) -> &mut Self {
        self.values.insert(token.to_string(), value.to_string());
        self
    }

    /// Sets `{{token}}` to `value`, or to the empty string when it is absent.
    pub fn insert_opt(&mut self, token: &str, value: Option<impl fmt::Display>) -> &mut Self {
        match value {
            Some(value) => self.insert(token, value),
            None => self.insert(token, ""),
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Replaces every known `{{>name}}` token with its fragment. Unknown partial
/// names are left in place.
pub fn inject_partials(html: &str, partials: &PartialRegistry) -> String {
    PARTIAL_TOKEN
        .replace_all(html, |caps: &Captures| {
            let name: &str = &caps[1];
            if PARTIAL_NAMES.iter().any(|known| *known == name) {
                partials.get(name).to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Replaces every `{{key}}` whose key is in `map` with its value, inserted as
/// literal text. Unfilled `{{UPPER_CASE}}` tokens become the empty string;
/// other unfilled braces are left as they are.
pub fn substitute(html: &str, map: &ReplacementMap) -> String {
    VALUE_TOKEN
        .replace_all(html, |caps: &Captures| match map.get(&caps[1]) {
            Some(value) => value.to_string(),
            None if is_value_name(&caps[1]) => {
                debug!("No value for `{}`, rendering it empty", &caps[0]);
                String::new()
            }
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// `SITE_NAME`, `HERO_HEADLINE`, ...
fn is_value_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Renders `template` against the build's partials and one page's values.
pub fn render(template: &str, partials: &PartialRegistry, map: &ReplacementMap) -> String {
    substitute(&inject_partials(template, partials), map)
}

/// The directory holding one base template per page type.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    dir: PathBuf,
}

impl TemplateSet {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Reads a template by file name. Templates are required, so a missing
    /// file is an error rather than an empty page.
    pub fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(TemplateError::Missing(path));
        }
        std::fs::read_to_string(&path).map_err(|e| TemplateError::Io(path, e))
    }
}
