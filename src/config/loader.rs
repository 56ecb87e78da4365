//! Configuration file loading with precedence handling.

use crate::model::{Page, RevealError, UnknownPage};
use crate::reveal::RevealSpeed;
use crate::state::AppOptions;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LEXDASH_CONFIG";

/// Environment variable overriding the caption typing speed.
pub const CAPTION_SPEED_ENV: &str = "LEXDASH_CAPTION_SPEED_MS";

/// Environment variable pointing at a JSON data set.
pub const DATA_ENV: &str = "LEXDASH_DATA";

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

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The configured start page does not exist.
    #[error("Invalid start page: {0}")]
    InvalidPage(#[from] UnknownPage),

    /// A typing speed of zero milliseconds was configured.
    #[error("Invalid {field}: {source}")]
    InvalidSpeed {
        /// Setting that held the bad value.
        field: &'static str,
        /// Underlying validation error.
        #[source]
        source: RevealError,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/lexdash/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Milliseconds per character for page captions.
    #[serde(default)]
    pub caption_speed_ms: Option<u64>,

    /// Milliseconds per character for the dashboard greeting caption.
    #[serde(default)]
    pub greeting_speed_ms: Option<u64>,

    /// Page shown at startup (`dashboard`, `cases`, `precedents`, `profile`).
    #[serde(default)]
    pub start_page: Option<String>,

    /// Initial sort id for the cases page.
    #[serde(default)]
    pub cases_sort: Option<String>,

    /// Initial sort id for the precedents page.
    #[serde(default)]
    pub precedents_sort: Option<String>,

    /// JSON data set to load instead of the built-in records.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Caption speed in milliseconds per character.
    pub caption_speed_ms: u64,
    /// Greeting speed in milliseconds per character.
    pub greeting_speed_ms: u64,
    /// Start page name.
    pub start_page: String,
    /// Cases sort id, `None` for the catalog default.
    pub cases_sort: Option<String>,
    /// Precedents sort id, `None` for the catalog default.
    pub precedents_sort: Option<String>,
    /// Data set file, `None` for the built-in records.
    pub data_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            caption_speed_ms: 70,
            greeting_speed_ms: 30,
            start_page: Page::default().slug().to_string(),
            cases_sort: None,
            precedents_sort: None,
            data_file: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate the resolved values and turn them into startup options.
    ///
    /// Sort ids are checked later, against the catalog, when the list pages
    /// are built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown start page or a zero speed.
    pub fn app_options(&self, initial_search: Option<String>) -> Result<AppOptions, ConfigError> {
        let speed = |field: &'static str, millis: u64| {
            RevealSpeed::from_millis(millis)
                .map_err(|source| ConfigError::InvalidSpeed { field, source })
        };

        Ok(AppOptions {
            start_page: self.start_page.parse()?,
            initial_search,
            cases_sort: self.cases_sort.clone(),
            precedents_sort: self.precedents_sort.clone(),
            caption_speed: speed("caption_speed_ms", self.caption_speed_ms)?,
            greeting_speed: speed("greeting_speed_ms", self.greeting_speed_ms)?,
        })
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/lexdash/lexdash.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    // Try to get platform-appropriate state directory
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("lexdash").join("lexdash.log")
    } else {
        // Fallback to current directory
        PathBuf::from("lexdash.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/lexdash/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexdash").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `LEXDASH_CONFIG` environment variable
/// 3. Default path `~/.config/lexdash/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LEXDASH_CAPTION_SPEED_MS`: Override caption speed
/// - `LEXDASH_DATA`: Override data set file
///
/// A speed that is not a number is ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CAPTION_SPEED_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(millis) => config.caption_speed_ms = millis,
            Err(_) => warn!(value = %raw, "Ignoring non-numeric {}", CAPTION_SPEED_ENV),
        }
    }

    if let Ok(path) = std::env::var(DATA_ENV) {
        config.data_file = Some(PathBuf::from(path));
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        caption_speed_ms: config.caption_speed_ms.unwrap_or(defaults.caption_speed_ms),
        greeting_speed_ms: config
            .greeting_speed_ms
            .unwrap_or(defaults.greeting_speed_ms),
        start_page: config.start_page.unwrap_or(defaults.start_page),
        cases_sort: config.cases_sort.or(defaults.cases_sort),
        precedents_sort: config.precedents_sort.or(defaults.precedents_sort),
        data_file: config.data_file.or(defaults.data_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_override: Option<String>,
    data_override: Option<PathBuf>,
    caption_speed_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(page) = page_override {
        config.start_page = page;
    }

    if let Some(data) = data_override {
        config.data_file = Some(data);
    }

    if let Some(millis) = caption_speed_override {
        config.caption_speed_ms = millis;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
