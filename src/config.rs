use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the upstream recipe API client
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Base URL that `search.php` is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the transport default
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_user_agent() -> String {
    format!("mealdb-search/{}", env!("CARGO_PKG_VERSION"))
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("mealdb").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
