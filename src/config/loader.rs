//! Startup settings.
//!
//! Settings are layered: built-in defaults, then `config.toml`, then
//! `LOGSIFT_*` variables, then command-line flags.

use crate::state::{InvalidPageSize, PageSize};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Endpoint used when neither the config file, the environment nor the CLI names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/logs";

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "LOGSIFT_CONFIG";
/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "LOGSIFT_ENDPOINT";
/// Environment variable holding the base64-encoded access key.
pub const ENV_API_KEY: &str = "LOGSIFT_API_KEY_BASE64";
/// Environment variable holding the raw key. Read and carried, never sent.
pub const ENV_RAW_KEY: &str = "LOGSIFT_RAW_KEY";

/// Why the settings could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `LOGSIFT_CONFIG` is set but not valid UTF-8.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The config file exists but could not be read.
    #[error("Could not read {path}: {reason}")]
    ReadError {
        /// File that failed.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Bad TOML syntax, a wrongly typed value, or an unknown key.
    #[error("Could not parse {path}: {reason}")]
    ParseError {
        /// File that failed.
        path: PathBuf,
        /// TOML error text, with line and column.
        reason: String,
    },

    /// `items_per_page` is not one of the allowed sizes.
    #[error(transparent)]
    InvalidPageSize(#[from] InvalidPageSize),
}

/// Contents of `config.toml`. Absent keys fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Log endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Validated against the allowed page sizes in [`merge_config`].
    #[serde(default)]
    pub items_per_page: Option<usize>,

    /// Where tracing output is written.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Final settings handed to the viewer.
///
/// `Debug` hides both keys so the value can be logged as is.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// URL the batch is fetched from.
    pub endpoint: String,
    /// Initial page size.
    pub items_per_page: PageSize,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
    /// Base64-encoded access key, decoded at fetch time.
    pub api_key_base64: String,
    /// Raw key as configured. Not used by the fetch.
    pub raw_key: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            items_per_page: PageSize::default(),
            log_file_path: default_log_path(),
            api_key_base64: String::new(),
            raw_key: None,
        }
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("endpoint", &self.endpoint)
            .field("items_per_page", &self.items_per_page.get())
            .field("log_file_path", &self.log_file_path)
            .field("api_key_base64", &"<redacted>")
            .field("raw_key", &self.raw_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// `<state_dir>/logsift/logsift.log`, or `logsift.log` in the working
/// directory on platforms without a state directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("logsift").join("logsift.log"))
        .unwrap_or_else(|| PathBuf::from("logsift.log"))
}

/// Read and parse one config file. A missing file yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] for a file that
/// exists but cannot be used.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path,
            reason: e.to_string(),
        })
}

/// `<config_dir>/logsift/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logsift").join("config.toml"))
}

/// Find and load the config file.
///
/// The first of `--config`, `LOGSIFT_CONFIG` and [`default_config_path`] that
/// is set decides which file is read; later candidates are not consulted even
/// when that file is missing.
///
/// # Errors
///
/// Propagates [`load_config_file`] errors, and rejects a non-UTF-8
/// `LOGSIFT_CONFIG`.
pub fn load_config_with_precedence(
    cli_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = match cli_path {
        Some(path) => Some(path),
        None => match std::env::var(ENV_CONFIG) {
            Ok(env_path) => Some(PathBuf::from(env_path)),
            Err(std::env::VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
            }
            Err(std::env::VarError::NotPresent) => default_config_path(),
        },
    };

    chosen.map_or(Ok(None), load_config_file)
}

/// Lay the config file over the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPageSize`] when `items_per_page` is not an
/// allowed size.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let items_per_page = match config.items_per_page {
        Some(size) => PageSize::new(size)?,
        None => defaults.items_per_page,
    };

    Ok(ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        items_per_page,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        ..defaults
    })
}

/// Overlay `LOGSIFT_ENDPOINT`, `LOGSIFT_API_KEY_BASE64` and `LOGSIFT_RAW_KEY`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }

    if let Ok(key) = std::env::var(ENV_API_KEY) {
        config.api_key_base64 = key;
    }

    if let Ok(raw) = std::env::var(ENV_RAW_KEY) {
        config.raw_key = Some(raw);
    }

    config
}

/// Overlay flags the user passed. `None` leaves the earlier layers in place.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    page_size_override: Option<PageSize>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(size) = page_size_override {
        config.items_per_page = size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
