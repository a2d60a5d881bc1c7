//! Configuration file loading with precedence handling.

use crate::query::PageSize;
use crate::source::FetchPolicy;
use crate::state::ViewMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Directory server used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the directory server base URL.
pub const ENV_API_URL: &str = "COMPDIR_API_URL";

/// Environment variable overriding the fetch failure policy.
pub const ENV_FETCH_POLICY: &str = "COMPDIR_FETCH_POLICY";

/// Environment variable pointing at an explicit config file.
pub const ENV_CONFIG_PATH: &str = "COMPDIR_CONFIG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/compdir/config.toml`:
///
/// ```toml
/// api_base_url = "http://directory.internal:3001"
/// fetch_policy = "fallback"
/// page_size = 12
/// view_mode = "table"
/// request_timeout_secs = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the directory server.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Behavior on fetch failure ("strict" or "fallback").
    #[serde(default)]
    pub fetch_policy: Option<FetchPolicy>,

    /// Companies per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Initial view ("cards" or "table").
    #[serde(default)]
    pub view_mode: Option<ViewMode>,

    /// Timeout for the company fetch, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory server base URL.
    pub api_base_url: String,
    /// Fetch failure policy.
    pub fetch_policy: FetchPolicy,
    /// Companies per page.
    pub page_size: PageSize,
    /// Initial view mode.
    pub view_mode: ViewMode,
    /// Fetch timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_policy: FetchPolicy::default(),
            page_size: PageSize::default(),
            view_mode: ViewMode::default(),
            request_timeout: Duration::from_secs(10),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/compdir/compdir.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("compdir").join("compdir.log")
    } else {
        PathBuf::from("compdir.log")
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

    // Missing file is not an error - use defaults
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
/// Returns `~/.config/compdir/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("compdir").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `COMPDIR_CONFIG` environment variable
/// 3. Default path `~/.config/compdir/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A `page_size` or `request_timeout_secs` of 0 is ignored.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let page_size = match config.page_size {
        Some(raw) => PageSize::new(raw).unwrap_or_else(|| {
            warn!(raw, "Ignoring page_size of 0 in config file");
            defaults.page_size
        }),
        None => defaults.page_size,
    };

    let request_timeout = match config.request_timeout_secs {
        Some(0) => {
            warn!("Ignoring request_timeout_secs of 0 in config file");
            defaults.request_timeout
        }
        Some(secs) => Duration::from_secs(secs),
        None => defaults.request_timeout,
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        fetch_policy: config.fetch_policy.unwrap_or(defaults.fetch_policy),
        page_size,
        view_mode: config.view_mode.unwrap_or(defaults.view_mode),
        request_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `COMPDIR_API_URL`: Override base URL
/// - `COMPDIR_FETCH_POLICY`: Override fetch policy (invalid values are logged and ignored)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(ENV_API_URL) {
        if !url.is_empty() {
            config.api_base_url = url;
        }
    }

    if let Ok(raw) = std::env::var(ENV_FETCH_POLICY) {
        match raw.parse::<FetchPolicy>() {
            Ok(policy) => config.fetch_policy = policy,
            Err(error) => warn!(%error, "Ignoring {}", ENV_FETCH_POLICY),
        }
    }

    config
}

/// CLI values that override every other configuration source.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`
    pub api_base_url: Option<String>,
    /// `--policy`
    pub fetch_policy: Option<FetchPolicy>,
    /// `--page-size`
    pub page_size: Option<PageSize>,
    /// `--view`
    pub view_mode: Option<ViewMode>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }

    if let Some(policy) = cli.fetch_policy {
        config.fetch_policy = policy;
    }

    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    if let Some(view_mode) = cli.view_mode {
        config.view_mode = view_mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
