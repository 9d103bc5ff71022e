use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Keys accepted by `config get` / `config set`.
pub const KEYS: &[&str] = &[
    "api_base_url",
    "request_timeout_secs",
    "data_dir",
    "suggestion_limit",
    "top_countries",
    "history_size",
    "log_level",
    "log_coloured",
];

/// Configuration for tourbook.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TOUR_* prefix)
/// 3. Config file (~/.config/tourbook/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the tour API.
    ///
    /// Can be set via:
    /// - CLI: --base-url https://...
    /// - ENV: TOUR_API_BASE_URL
    /// - Config: api_base_url = "https://..."
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Directory of JSON files to load instead of calling the API.
    ///
    /// Can be set via:
    /// - CLI: --from-dir /path/to/dump
    /// - ENV: TOUR_DATA_DIR
    /// - Config: data_dir = "/path/to/dump"
    pub data_dir: Option<PathBuf>,

    /// Maximum number of universal-search suggestions shown.
    pub suggestion_limit: usize,

    /// Number of countries listed by `stats`.
    pub top_countries: usize,

    /// Number of recent recognitions shown by the history refresher.
    pub history_size: usize,

    /// Log level: trace, debug, info, warn or error.
    pub log_level: String,

    /// Colour log output.
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            data_dir: None,
            suggestion_limit: 10,
            top_countries: 5,
            history_size: 5,
            log_level: "info".to_string(),
            log_coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/tourbook/config.toml
    /// Reads environment variables with TOUR_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("tour");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Current value of `key` rendered as text.
    ///
    /// # Errors
    /// Returns an error for keys not listed in [`KEYS`].
    pub fn value_of(&self, key: &str) -> Result<String> {
        let value = match key {
            "api_base_url" => self.api_base_url.clone(),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "data_dir" => self
                .data_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| String::from("<not set>")),
            "suggestion_limit" => self.suggestion_limit.to_string(),
            "top_countries" => self.top_countries.to_string(),
            "history_size" => self.history_size.to_string(),
            "log_level" => self.log_level.clone(),
            "log_coloured" => self.log_coloured.to_string(),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: {}",
                key,
                KEYS.join(", ")
            ),
        };
        Ok(value)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/tourbook/config.toml
/// - macOS: ~/Library/Application Support/tourbook/config.toml
/// - Windows: %APPDATA%\tourbook\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tourbook")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Tourbook Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TOUR_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Root of the tour API
#
# Can also be set via:
# - CLI: tourbook --base-url https://example.test/api search queen
# - Environment: TOUR_API_BASE_URL=https://example.test/api
api_base_url = "https://groupietrackers.herokuapp.com/api"

# Per-request timeout in seconds
request_timeout_secs = 15

# Load the catalogue from a directory of JSON files instead of the API.
# Expects artists.json, locations.json, dates.json and relation.json.
#
# Can also be set via:
# - CLI: tourbook --from-dir /path/to/dump stats
# - Environment: TOUR_DATA_DIR=/path/to/dump
#data_dir = "/path/to/dump"

# Maximum number of suggestions printed by `tourbook search`
suggestion_limit = 10

# Number of countries listed by `tourbook stats`
top_countries = 5

# Number of recent recognitions shown by `tourbook recognize`
history_size = 5

# Logging
log_level = "info"
log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
