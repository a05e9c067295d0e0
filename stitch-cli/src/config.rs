use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use std::path::Path;
use stitch_core::BuildConfig;

/// Load configuration with cascading precedence:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (STITCH_*)
/// 3. Configuration file
/// 4. Defaults (lowest priority)
pub fn load_build_config(args: &ArgMatches) -> Result<BuildConfig> {
    let config_file = args
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| "./stitch.toml".to_string());

    let mut builder = ConfigBuilder::builder();

    // 1. Start with defaults
    let defaults = BuildConfig::default();
    builder = builder.add_source(config::Config::try_from(&defaults)?);

    // 2. Add configuration file if it exists
    if Path::new(&config_file).exists() {
        builder = builder.add_source(File::from(Path::new(&config_file)));
    }

    // 3. Add environment variables with STITCH_ prefix
    builder = builder.add_source(Environment::with_prefix("STITCH").separator("__"));

    // 4. Override with CLI arguments (highest priority)
    let mut cli_overrides = std::collections::HashMap::new();
    for key in ["data", "templates", "partials", "output"] {
        if let Some(value) = args.try_get_one::<String>(key).unwrap_or(None) {
            cli_overrides.insert(key.to_string(), value.clone());
        }
    }

    if !cli_overrides.is_empty() {
        builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
    }

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::build::make_command;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let matches = make_command()
            .try_get_matches_from(vec!["stitch", "--config", "/nonexistent/stitch.toml"])
            .unwrap();

        let config = load_build_config(&matches).unwrap();
        assert_eq!(config.templates, PathBuf::from("./templates"));
        assert_eq!(config.partials, PathBuf::from("./partials"));
    }

    #[test]
    fn test_cli_args_override() {
        let matches = make_command()
            .try_get_matches_from(vec![
                "stitch",
                "--config", "/nonexistent/stitch.toml",
                "--data", "/custom/data",
                "--output", "/custom/output",
            ])
            .unwrap();

        let config = load_build_config(&matches).unwrap();
        assert_eq!(config.data, PathBuf::from("/custom/data"));
        assert_eq!(config.output, PathBuf::from("/custom/output"));
        // Should still have defaults for non-overridden values
        assert_eq!(config.templates, PathBuf::from("./templates"));
    }

    #[test]
    fn test_config_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stitch.toml");
        std::fs::write(&file, "templates = \"theme/templates\"\noutput = \"public\"\n").unwrap();

        let matches = make_command()
            .try_get_matches_from(vec![
                "stitch",
                "--config", file.to_str().unwrap(),
                "--output", "dist",
            ])
            .unwrap();

        let config = load_build_config(&matches).unwrap();
        assert_eq!(config.templates, PathBuf::from("theme/templates"));
        assert_eq!(config.output, PathBuf::from("dist"));
    }
}
