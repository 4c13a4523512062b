//! Runtime configuration.
//!
//! Values are resolved in order: built-in defaults, then an optional YAML
//! file named by `TASKDECK_CONFIG`, then individual environment variables.
//! A `.env` file in the working directory is loaded by the binary before
//! this runs.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default base URL of the remote API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
/// Default location of the local storage file.
pub const DEFAULT_STORE_PATH: &str = ".taskdeck/storage.json";
/// Default notice time-to-live in milliseconds.
pub const DEFAULT_NOTICE_TTL_MS: u64 = 2000;
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API hosting the `/token/` endpoint.
    pub api_url: String,
    /// Path of the JSON file used as local storage.
    pub store_path: PathBuf,
    /// How long a notice stays visible.
    pub notice_ttl_ms: u64,
    /// Log level passed to the logger (`error` .. `trace`, or `off`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Shape of the optional YAML config file. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    store_path: Option<PathBuf>,
    notice_ttl_ms: Option<u64>,
    log_level: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or an
    /// environment override is malformed.
    pub fn load() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(path) = lookup("TASKDECK_CONFIG") {
            config.apply_file(&read_config_file(Path::new(&path))?);
        }

        if let Some(url) = lookup("TASKDECK_API_URL") {
            config.api_url = url;
        }
        if let Some(path) = lookup("TASKDECK_STORE") {
            config.store_path = PathBuf::from(path);
        }
        if let Some(ttl) = lookup("TASKDECK_NOTICE_TTL_MS") {
            config.notice_ttl_ms = ttl
                .trim()
                .parse()
                .map_err(|e| format!("Invalid TASKDECK_NOTICE_TTL_MS `{ttl}`: {e}"))?;
        }
        if let Some(level) = lookup("TASKDECK_LOG") {
            config.log_level = level;
        }

        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(url) = &file.api_url {
            self.api_url.clone_from(url);
        }
        if let Some(path) = &file.store_path {
            self.store_path.clone_from(path);
        }
        if let Some(ttl) = file.notice_ttl_ms {
            self.notice_ttl_ms = ttl;
        }
        if let Some(level) = &file.log_level {
            self.log_level.clone_from(level);
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
}
