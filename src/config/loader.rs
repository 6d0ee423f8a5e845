//! Configuration file loading with precedence handling.

use crate::api::http::DEFAULT_API_URL;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::view_state::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "PRODADMIN_CONFIG";
/// Environment variable overriding the API collection URL.
pub const ENV_API_URL: &str = "PRODADMIN_API_URL";
/// Environment variable overriding rows per page.
pub const ENV_PAGE_SIZE: &str = "PRODADMIN_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value is syntactically valid but out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/prodadmin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Product collection URL (e.g. `https://host/api/v1/products`).
    #[serde(default)]
    pub api_url: Option<String>,

    /// Rows per page on startup.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Destination of the CSV export.
    #[serde(default)]
    pub export_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Product collection URL.
    pub api_url: String,
    /// Rows per page on startup.
    pub page_size: PageSize,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Destination of the CSV export.
    pub export_path: PathBuf,
    /// Disable colors.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: PageSize::default(),
            request_timeout: Duration::from_secs(30),
            log_file_path: default_log_path(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/prodadmin/prodadmin.log` on Linux, the platform
/// equivalent elsewhere, or `prodadmin.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("prodadmin").join("prodadmin.log")
    } else {
        PathBuf::from("prodadmin.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/prodadmin/config.toml` on Linux, appropriate path on
/// other platforms, `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prodadmin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PRODADMIN_CONFIG` environment variable
/// 3. Default path `~/.config/prodadmin/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for `page_size = 0` or
/// `request_timeout_secs = 0`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(size) => PageSize::new(size).map_err(|e| ConfigError::InvalidValue {
            field: "page_size",
            reason: e.to_string(),
        })?,
        None => defaults.page_size,
    };

    let request_timeout = match config.request_timeout_secs {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "timeout must be at least 1 second".to_string(),
            })
        }
        Some(secs) => Duration::from_secs(secs),
        None => defaults.request_timeout,
    };

    Ok(ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        page_size,
        request_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        export_path: config.export_path.unwrap_or(defaults.export_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PRODADMIN_API_URL`: Override API URL
/// - `PRODADMIN_PAGE_SIZE`: Override rows per page (ignored with a warning if invalid)
/// - `NO_COLOR`: Any value disables colors
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(ENV_API_URL) {
        config.api_url = url;
    }

    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        match raw.parse::<usize>().ok().and_then(|n| PageSize::new(n).ok()) {
            Some(size) => config.page_size = size,
            None => warn!(value = %raw, "Ignoring invalid {ENV_PAGE_SIZE}"),
        }
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.no_color = true;
    }

    config
}

/// CLI values that override every other source when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`
    pub api_url: Option<String>,
    /// `--page-size`
    pub page_size: Option<PageSize>,
    /// `--export`
    pub export_path: Option<PathBuf>,
    /// `--no-color`
    pub no_color: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    if let Some(size) = cli.page_size {
        config.page_size = size;
    }

    if let Some(path) = cli.export_path {
        config.export_path = path;
    }

    // Flag can only turn colors off.
    if cli.no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
