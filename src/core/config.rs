//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.concerts/config.toml` and is entirely optional.
//! Nothing is ever written back.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConcertsConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_URL: &str = "http://www.xpn.org/events/concert-calendar";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "concerts.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
/// Every listing row on the calendar page is a table cell.
pub const DEFAULT_MARKER: &str = "<td ";

/// Screen geometry, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Gap between the screen edge and the panes; the footer sits inside it.
    pub outer_margin: u16,
    /// Rows/columns between the list border and the names.
    pub list_margin: u16,
    /// Extra indent of the selected artist.
    pub selection_indent: u16,
    /// Columns of the list pane not available to names.
    pub list_reserved_cols: u16,
    pub detail_margin: u16,
    /// Rows per concert in the detail pane.
    pub detail_stride: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            outer_margin: 2,
            list_margin: 1,
            selection_indent: 4,
            list_reserved_cols: 7,
            detail_margin: 4,
            detail_stride: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Lines without this substring are never parsed.
    pub marker: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub url: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
    pub log_level: String,
    pub layout: LayoutConfig,
    pub extractor: ExtractorConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.concerts/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".concerts").join("config.toml"))
}

/// Load config from `~/.concerts/config.toml`, or defaults if there is none.
pub fn load_config() -> Result<ConcertsConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ConcertsConfig::default())
        }
    }
}

/// Load config from `path`. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<ConcertsConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(ConcertsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ConcertsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ConcertsConfig) -> ResolvedConfig {
    resolve_with_env(config, std::env::var("CONCERTS_URL").ok())
}

fn resolve_with_env(config: &ConcertsConfig, env_url: Option<String>) -> ResolvedConfig {
    // URL: env → config → default
    let url = env_url
        .or_else(|| config.source.url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let timeout = Duration::from_secs(
        config
            .source
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );

    ResolvedConfig {
        url,
        timeout,
        log_file: PathBuf::from(
            config
                .log
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        ),
        log_level: config
            .log
            .level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        layout: LayoutConfig::default(),
        extractor: ExtractorConfig::default(),
    }
}
