use std::collections::BTreeMap;
use std::path::Path;

use log::warn;

use crate::template::TemplateError;

/// Names of the partials a template may reference as `{{>name}}`.
pub const PARTIAL_NAMES: [&str; 4] = ["head", "header", "footer", "scripts"];

/// The shared HTML fragments of one build. Loaded once, read-only after.
#[derive(Debug, Clone, Default)]
pub struct PartialRegistry {
    fragments: BTreeMap<&'static str, String>,
}

impl PartialRegistry {
    /// Reads `<dir>/<name>.html` for every known partial. A missing fragment
    /// is not an error; it renders as the empty string.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let mut fragments = BTreeMap::new();

        for name in PARTIAL_NAMES {
            let path = dir.join(format!("{name}.html"));
            if !path.is_file() {
                warn!("Partial `{name}` not found at {}", path.display());
                continue;
            }
            let html = std::fs::read_to_string(&path).map_err(|e| TemplateError::Io(path, e))?;
            fragments.insert(name, html);
        }

        Ok(Self { fragments })
    }

    /// Builds a registry from in-memory fragments. Names outside
    /// [`PARTIAL_NAMES`] are ignored.
    pub fn from_fragments<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fragments = fragments
            .into_iter()
            .filter_map(|(name, html)| {
                PARTIAL_NAMES
                    .iter()
                    .find(|known| **known == name)
                    .map(|known| (*known, html.to_string()))
            })
            .collect();

        Self { fragments }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fragments.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_known_partials() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("head.html"), "<meta charset=\"utf-8\">").unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer></footer>").unwrap();
        std::fs::write(dir.path().join("sidebar.html"), "<aside></aside>").unwrap();

        let partials = PartialRegistry::load(dir.path()).unwrap();
        assert_eq!(partials.len(), 2);
        assert_eq!(partials.get("head"), "<meta charset=\"utf-8\">");
        assert_eq!(partials.get("footer"), "<footer></footer>");
        assert_eq!(partials.get("sidebar"), "");
    }

    #[test]
    fn test_missing_partial_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let partials = PartialRegistry::load(dir.path()).unwrap();
        assert!(partials.is_empty());
        assert_eq!(partials.get("header"), "");
    }

    #[test]
    fn test_from_fragments_ignores_unknown_names() {
        let partials = PartialRegistry::from_fragments([("header", "<nav>"), ("aside", "x")]);
        assert_eq!(partials.len(), 1);
        assert_eq!(partials.get("header"), "<nav>");
        assert_eq!(partials.get("aside"), "");
    }
}
