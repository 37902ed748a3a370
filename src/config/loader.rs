//! Configuration file loading with precedence handling.

use super::DotConfig;
use crate::state::{
    DEFAULT_ANIMATE_DURATION, DEFAULT_CURRENT_PAGE_INDICATOR_TINT, DEFAULT_PAGE_INDICATOR_TINT,
};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PAGEDOTS_CONFIG";

/// Environment variable overriding the visible dot count.
pub const DISPLAY_COUNT_ENV_VAR: &str = "PAGEDOTS_DISPLAY_COUNT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

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

    /// A color value is neither a known name nor a `#rrggbb` literal.
    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor {
        /// Config key holding the color.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A layout value is outside its valid range.
    #[error("Invalid value for {field}: {value} ({expected})")]
    InvalidValue {
        /// Config key holding the value.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted range.
        expected: &'static str,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pagedots/config.toml`:
///
/// ```toml
/// animate_duration_ms = 200
/// current_page_indicator_color = "#52a0e8"
///
/// [dots]
/// display_count = 9
/// dot_size = 8.0
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Strip layout. Missing keys inside the table use their defaults.
    #[serde(default)]
    pub dots: Option<DotConfig>,

    /// Duration of animated page changes, in milliseconds.
    #[serde(default)]
    pub animate_duration_ms: Option<u64>,

    /// Hide the indicator when there is at most one page.
    #[serde(default)]
    pub hides_for_single_page: Option<bool>,

    /// Color of non-current dots (ratatui color string).
    #[serde(default)]
    pub page_indicator_color: Option<String>,

    /// Color of the current page's dot (ratatui color string).
    #[serde(default)]
    pub current_page_indicator_color: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Strip layout.
    pub dots: DotConfig,
    /// Duration of animated page changes.
    pub animate_duration: Duration,
    /// Hide for zero or one page.
    pub hides_for_single_page: bool,
    /// Color of non-current dots.
    pub page_indicator_color: Color,
    /// Color of the current page's dot.
    pub current_page_indicator_color: Color,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            dots: DotConfig::default(),
            animate_duration: DEFAULT_ANIMATE_DURATION,
            hides_for_single_page: false,
            page_indicator_color: DEFAULT_PAGE_INDICATOR_TINT,
            current_page_indicator_color: DEFAULT_CURRENT_PAGE_INDICATOR_TINT,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command line flags.
///
/// `None` means the flag was not given and lower-precedence sources win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliOverrides {
    /// `--display-count`
    pub display_count: Option<usize>,
    /// `--animate-ms`
    pub animate_ms: Option<u64>,
    /// `--hides-for-single-page`
    pub hides_for_single_page: Option<bool>,
    /// `--no-animate`; forces a zero duration, beating `animate_ms`.
    pub no_animate: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pagedots/pagedots.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pagedots").join("pagedots.log")
    } else {
        PathBuf::from("pagedots.log")
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
/// Returns `~/.config/pagedots/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagedots").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PAGEDOTS_CONFIG` environment variable
/// 3. Default path `~/.config/pagedots/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
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
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] if a color string cannot be parsed and
/// [`ConfigError::InvalidValue`] if the `[dots]` table is out of range.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_indicator_color = match config.page_indicator_color {
        Some(value) => parse_color("page_indicator_color", value)?,
        None => defaults.page_indicator_color,
    };
    let current_page_indicator_color = match config.current_page_indicator_color {
        Some(value) => parse_color("current_page_indicator_color", value)?,
        None => defaults.current_page_indicator_color,
    };

    let dots = config.dots.unwrap_or(defaults.dots);
    validate_dots(&dots)?;

    Ok(ResolvedConfig {
        dots,
        animate_duration: config
            .animate_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.animate_duration),
        hides_for_single_page: config
            .hides_for_single_page
            .unwrap_or(defaults.hides_for_single_page),
        page_indicator_color,
        current_page_indicator_color,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Reject layouts the dot strip cannot be built from.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for the first out-of-range field.
pub fn validate_dots(dots: &DotConfig) -> Result<(), ConfigError> {
    let invalid = |field, value: String, expected| ConfigError::InvalidValue {
        field,
        value,
        expected,
    };
    let is_ratio = |r: f64| r > 0.0 && r <= 1.0;

    if dots.display_count == 0 {
        return Err(invalid(
            "dots.display_count",
            dots.display_count.to_string(),
            "at least 1",
        ));
    }
    if !(dots.dot_size.is_finite() && dots.dot_size > 0.0) {
        return Err(invalid("dots.dot_size", dots.dot_size.to_string(), "positive"));
    }
    if !(dots.dot_space.is_finite() && dots.dot_space >= 0.0) {
        return Err(invalid(
            "dots.dot_space",
            dots.dot_space.to_string(),
            "zero or positive",
        ));
    }
    if !is_ratio(dots.small_dot_size_ratio) {
        return Err(invalid(
            "dots.small_dot_size_ratio",
            dots.small_dot_size_ratio.to_string(),
            "in (0, 1]",
        ));
    }
    if !is_ratio(dots.medium_dot_size_ratio) {
        return Err(invalid(
            "dots.medium_dot_size_ratio",
            dots.medium_dot_size_ratio.to_string(),
            "in (0, 1]",
        ));
    }
    Ok(())
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PAGEDOTS_DISPLAY_COUNT`: Override the visible dot count
///
/// Unparseable or zero values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DISPLAY_COUNT_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(count) if count > 0 => config.dots.display_count = count,
            _ => warn!(value = %raw, "Ignoring invalid {}", DISPLAY_COUNT_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(count) = overrides.display_count {
        config.dots.display_count = count;
    }

    if let Some(ms) = overrides.animate_ms {
        config.animate_duration = Duration::from_millis(ms);
    }

    if overrides.no_animate {
        config.animate_duration = Duration::ZERO;
    }

    if let Some(hides) = overrides.hides_for_single_page {
        config.hides_for_single_page = hides;
    }

    config
}

fn parse_color(field: &'static str, value: String) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::InvalidColor { field, value })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
