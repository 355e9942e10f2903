use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::SearchConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source data file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Search index configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: HDSEARCH_)
            .add_source(
                config::Environment::with_prefix("HDSEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            search: SearchConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the users collection
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,

    /// Path to the organizations collection
    #[serde(default = "default_organizations_path")]
    pub organizations_path: PathBuf,

    /// Path to the tickets collection
    #[serde(default = "default_tickets_path")]
    pub tickets_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            organizations_path: default_organizations_path(),
            tickets_path: default_tickets_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_users_path() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_organizations_path() -> PathBuf {
    PathBuf::from("data/organizations.json")
}

fn default_tickets_path() -> PathBuf {
    PathBuf::from("data/tickets.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.data.users_path, PathBuf::from("data/users.json"));
        assert_eq!(
            config.data.tickets_path,
            PathBuf::from("data/tickets.json")
        );
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(parsed.data.users_path, PathBuf::from("data/users.json"));
    }
}
