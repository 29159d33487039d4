//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `./.fraga-term.toml`, falling back to `~/.fraga-term.toml`.
//! A missing file is not an error; a missing key only fails the panel that
//! needs it, at the moment it fetches.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::ThemeId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FtermConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "videoProvider")]
    pub video_provider: VideoProviderConfig,
    #[serde(default)]
    pub members: MembersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    pub default_theme: Option<ThemeId>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub hyperlinks: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProviderConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub channel_id: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MembersConfig {
    /// Full member name → icon shown instead of the default one.
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const CONFIG_FILE_NAME: &str = ".fraga-term.toml";
pub const DEFAULT_SITE_URL: &str = "https://fragaria.cz";
pub const DEFAULT_VIDEO_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_VIDEO_CHANNEL_ID: &str = "UCz1zwJ9_6-IVdX6oCvq6T_g";
pub const DEFAULT_VIDEO_MAX_RESULTS: u32 = 15;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options except deferred secrets)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: ThemeId,
    pub poll_interval: Duration,
    /// `None` = auto-detect from the terminal environment.
    pub hyperlinks: Option<bool>,
    pub site_url: String,
    /// Stays `None` when unset; the video panel reports it when fetching.
    pub video_api_key: Option<String>,
    pub video_api_url: String,
    pub video_channel_id: String,
    pub video_max_results: u32,
    pub member_icons: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&FtermConfig::default(), |_| None)
    }
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

/// Returns the config file to read: `./.fraga-term.toml` if present, else
/// `~/.fraga-term.toml` if present.
pub fn config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::home_dir()
        .map(|h| h.join(CONFIG_FILE_NAME))
        .filter(|p| p.exists())
}

/// Load config from `path`.
///
/// A missing file returns `FtermConfig::default()`. A file that exists but is
/// malformed returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<FtermConfig, ConfigError> {
    let path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            warn!("Config file {} not found, using defaults", p.display());
            return Ok(FtermConfig::default());
        }
        None => {
            info!("No config file found, using defaults");
            return Ok(FtermConfig::default());
        }
    };

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FtermConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &FtermConfig) -> ResolvedConfig {
    resolve_with(config, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with(config: &FtermConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    // Theme: env → config → default
    let theme = env("FTERM_THEME")
        .and_then(|name| {
            let theme = ThemeId::from_name(&name);
            if theme.is_none() {
                warn!("Ignoring unknown FTERM_THEME value '{}'", name);
            }
            theme
        })
        .or(config.general.default_theme)
        .unwrap_or_default();

    // Hyperlinks: env → config → auto-detect
    let hyperlinks = env("FTERM_HYPERLINKS")
        .and_then(|v| parse_flag(&v))
        .or(config.display.hyperlinks);

    let site_url = env("FTERM_SITE_URL")
        .or_else(|| config.site.url.clone())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

    // API key: env → config; left unset otherwise
    let video_api_key = env("FTERM_VIDEO_API_KEY")
        .or_else(|| config.video_provider.api_key.clone())
        .filter(|k| !k.trim().is_empty());

    ResolvedConfig {
        theme,
        poll_interval: Duration::from_millis(
            config
                .general
                .poll_interval_ms
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        ),
        hyperlinks,
        site_url: site_url.trim_end_matches('/').to_string(),
        video_api_key,
        video_api_url: config
            .video_provider
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_VIDEO_API_URL.to_string())
            .trim_end_matches('/')
            .to_string(),
        video_channel_id: config
            .video_provider
            .channel_id
            .clone()
            .unwrap_or_else(|| DEFAULT_VIDEO_CHANNEL_ID.to_string()),
        video_max_results: config
            .video_provider
            .max_results
            .unwrap_or(DEFAULT_VIDEO_MAX_RESULTS),
        member_icons: config.members.icons.clone(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
