use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ImportError;
use crate::fetcher::DEFAULT_USER_AGENT;

/// Settings for one import run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    /// Recipe page to import
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// CSV file the record is written to (overwritten on every run)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            output_path: default_output_path(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_source_url() -> String {
    "https://www.bbc.co.uk/food/recipes/barbecue_pulled_chicken_47216".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("recipe_data.csv")
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ImportConfig {
    pub fn new(source_url: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with BBC_FOOD_IMPORT__ prefix
    /// 2. bbc_food_import.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: BBC_FOOD_IMPORT__OUTPUT_PATH
    pub fn load() -> Result<Self, ImportError> {
        load_config()
    }
}

/// See [`ImportConfig::load`].
pub fn load_config() -> Result<ImportConfig, ImportError> {
    let builder = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("bbc_food_import").required(false))
        .add_source(
            Environment::with_prefix("BBC_FOOD_IMPORT")
                .separator("__")
                .try_parsing(true),
        );

    build_config(builder)
}

fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<ImportConfig, ImportError> {
    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ImportConfig::default();
        assert_eq!(
            config.source_url,
            "https://www.bbc.co.uk/food/recipes/barbecue_pulled_chicken_47216"
        );
        assert_eq!(config.output_path, PathBuf::from("recipe_data.csv"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_new_overrides_url_and_path() {
        let config = ImportConfig::new("https://www.bbc.co.uk/food/recipes/a_1", "out.csv");
        assert_eq!(config.source_url, "https://www.bbc.co.uk/food/recipes/a_1");
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let settings = Config::builder()
            .set_override("output_path", "/tmp/pulled_chicken.csv")
            .unwrap()
            .set_override("timeout", 5)
            .unwrap()
            .build()
            .unwrap();

        let config: ImportConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.output_path, PathBuf::from("/tmp/pulled_chicken.csv"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.source_url, default_source_url());
    }

    #[test]
    fn test_bad_setting_is_config_error() {
        let builder = Config::builder()
            .set_override("timeout", "soon")
            .unwrap();

        let result = build_config(builder);
        assert!(matches!(result, Err(ImportError::Config(_))));
    }

    #[test]
    fn test_load_config_without_file() {
        // every field has a default, so loading never needs a file
        let result = load_config();
        assert!(result.is_ok());
    }
}
