use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parsing(#[from] toml::de::Error),
}

/// Directory layout of a build. Every path is resolved relative to the
/// working directory the build runs in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// YAML content records
    pub data: PathBuf,
    /// One base template per page type
    pub templates: PathBuf,
    /// Shared HTML fragments
    pub partials: PathBuf,
    /// Where finished pages are written
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("./data"),
            templates: PathBuf::from("./templates"),
            partials: PathBuf::from("./partials"),
            output: PathBuf::from("./site"),
        }
    }
}

impl BuildConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: BuildConfig = toml::from_str(&data)?;

        Ok(config)
    }
}
