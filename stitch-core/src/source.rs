use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::SiteData;
use crate::pages::{PageBuilder, Post, PostPage};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Invalid content in `{0}`")]
    Parse(PathBuf, #[source] serde_yaml::Error),
}

/// Reads YAML content records from the data directory.
///
/// Every data file is optional: a missing file is logged and read as the
/// record's defaults. A file that exists but does not parse is an error.
#[derive(Debug, Clone)]
pub struct ContentSource {
    data_dir: PathBuf,
}

impl ContentSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            data_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Reads `<data>/<relative>` into `T`.
    pub fn record<T>(&self, relative: impl AsRef<Path>) -> Result<T, ContentError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(relative);
        if !path.is_file() {
            warn!("{} not found, using defaults", path.display());
            return Ok(T::default());
        }
        read_yaml(&path)
    }

    /// The site-wide record, `site.yaml`.
    pub fn site(&self) -> Result<SiteData, ContentError> {
        self.record("site.yaml")
    }

    /// Like [`record`](Self::record), but warns about top-level sections
    /// outside `sections`, which the page would silently ignore.
    pub fn checked_record<T>(
        &self,
        relative: impl AsRef<Path>,
        sections: &[&str],
    ) -> Result<T, ContentError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(relative);
        if !path.is_file() {
            warn!("{} not found, using defaults", path.display());
            return Ok(T::default());
        }
        read_sections(&path, sections)
    }

    /// A simple page record, `pages/<name>.yaml`.
    pub fn page<T>(&self, name: &str, sections: &[&str]) -> Result<T, ContentError>
    where
        T: DeserializeOwned + Default,
    {
        self.checked_record(Path::new("pages").join(format!("{name}.yaml")), sections)
    }

    /// Every record in `posts/`, ordered by file name, paired with the file
    /// stem. Returns `None` when there is no posts directory.
    pub fn posts(&self) -> Result<Option<Vec<(String, Post)>>, ContentError> {
        let dir = self.data_dir.join("posts");
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir.as_path()).to_path_buf();
                ContentError::Io(path, e.into())
            })?;
            let path = entry.path();
            if !path.is_file() || !is_yaml(path) {
                continue;
            }

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            posts.push((stem, read_sections(path, PostPage::SECTIONS)?));
        }

        Ok(Some(posts))
    }
}

fn read_yaml<T>(path: &Path) -> Result<T, ContentError>
where
    T: DeserializeOwned + Default,
{
    let data =
        std::fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    if data.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&data).map_err(|e| ContentError::Parse(path.to_path_buf(), e))
}

fn read_sections<T>(path: &Path, sections: &[&str]) -> Result<T, ContentError>
where
    T: DeserializeOwned + Default,
{
    let value: Value = read_yaml(path)?;
    if value.is_null() {
        return Ok(T::default());
    }
    for section in unknown_sections(&value, sections) {
        warn!("{}: section `{section}` is not used", path.display());
    }
    serde_yaml::from_value(value).map_err(|e| ContentError::Parse(path.to_path_buf(), e))
}

/// Top-level keys of `value` that are not in `sections`, in source order.
pub fn unknown_sections(value: &Value, sections: &[&str]) -> Vec<String> {
    let Some(mapping) = value.as_mapping() else {
        return Vec::new();
    };
    mapping
        .keys()
        .filter_map(|key| match key.as_str() {
            Some(key) if sections.iter().any(|s| *s == key) => None,
            Some(key) => Some(key.to_string()),
            None => Some(format!("{key:?}")),
        })
        .collect()
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}
