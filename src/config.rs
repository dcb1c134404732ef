use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default base URL of the themealdb.com JSON API
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Settings for the remote meal client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL that `filter.php` and `lookup.php` are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("mealdb").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
