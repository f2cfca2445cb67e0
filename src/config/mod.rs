// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Current language
//! - `[notifications]` - Desktop/push flags, sound toggles, permission state
//! - `[server]` - API location, session token, optional push key override
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CHAT_SETTINGS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! Flat files written by the web client (`language`, `notifications:desktop`,
//! `notifications:push` at the top level) are migrated to the sectioned
//! format when loaded. The next save writes the new format.
//!
//! # Examples
//!
//! ```no_run
//! use chat_settings::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! if let Some(path) = config::config_path_with_override(None) {
//!     config::save_to_path(&config, &path).expect("Failed to save config");
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::notifications::{NotificationSettings, PermissionState, SoundToggleList};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Registry key of the current language (e.g., "en", "pt_BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub desktop: bool,

    /// Mirrors whether a push subscription exists.
    #[serde(default)]
    pub push: bool,

    /// Last known answer to the desktop permission prompt.
    #[serde(default)]
    pub permission: PermissionState,

    /// Set to `false` on platforms without a notification daemon.
    #[serde(default = "default_true")]
    pub supported: bool,

    #[serde(default)]
    pub sounds: SoundToggleList,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            desktop: false,
            push: false,
            permission: PermissionState::default(),
            supported: true,
            sounds: SoundToggleList::default(),
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn flags(&self) -> NotificationSettings {
        NotificationSettings {
            desktop: self.desktop,
            push: self.push,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Overrides the push key advertised by the server configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vapid: Option<String>,

    #[serde(default = "default_push_endpoint_base")]
    pub push_endpoint_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_token: None,
            vapid: None,
            push_endpoint_base: default_push_endpoint_base(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

// =============================================================================
// Legacy Config (flat key-value format)
// =============================================================================

#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    language: Option<String>,
    #[serde(default, rename = "notifications:desktop")]
    desktop: Option<bool>,
    #[serde(default, rename = "notifications:push")]
    push: Option<bool>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language,
            },
            notifications: NotificationsConfig {
                desktop: legacy.desktop.unwrap_or_default(),
                push: legacy.push.unwrap_or_default(),
                ..NotificationsConfig::default()
            },
            server: ServerConfig::default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_push_endpoint_base() -> String {
    DEFAULT_PUSH_ENDPOINT_BASE.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the path of `settings.toml` with an optional directory override.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path, migrating the flat format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    if let Ok(config) = toml::from_str::<Config>(&content) {
        if content.contains("[general]")
            || content.contains("[notifications]")
            || content.contains("[server]")
        {
            return Ok(config);
        }
    }

    if let Ok(legacy) = toml::from_str::<LegacyConfig>(&content) {
        return Ok(Config::from(legacy));
    }

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
