// SPDX-License-Identifier: MPL-2.0
//! Site configuration loaded from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default locale and whether to honour the system locale
//! - `[page]` - Locales this page variant ships and its fallback locale
//! - `[messages]` - Auto-dismiss delays for transient messages
//!
//! # Examples
//!
//! ```no_run
//! use morocco_docs::config;
//!
//! let (config, _warning) = config::load();
//! let profile = config.page_profile().expect("valid page profile");
//! println!("default locale: {}", profile.default_locale());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::i18n::{Locale, PageProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale used when nothing has been persisted yet.
    #[serde(default = "default_locale")]
    pub default_locale: Locale,

    /// Prefer the operating system locale over `default_locale` when it is
    /// one the page supports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_system_locale: Option<bool>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE,
            detect_system_locale: Some(false),
        }
    }
}

/// Page-variant locale settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<Locale>,

    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: Locale,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            supported_locales: default_supported_locales(),
            fallback_locale: DEFAULT_FALLBACK_LOCALE,
        }
    }
}

/// Transient message settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    #[serde(
        default = "default_success_dismiss_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_dismiss_secs: Option<u64>,

    #[serde(
        default = "default_tracking_error_dismiss_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_error_dismiss_secs: Option<u64>,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            success_dismiss_secs: default_success_dismiss_secs(),
            tracking_error_dismiss_secs: default_tracking_error_dismiss_secs(),
        }
    }
}

impl MessagesConfig {
    #[must_use]
    pub fn success_dismiss(&self) -> Duration {
        clamp_secs(self.success_dismiss_secs, DEFAULT_SUCCESS_DISMISS_SECS)
    }

    #[must_use]
    pub fn tracking_error_dismiss(&self) -> Duration {
        clamp_secs(
            self.tracking_error_dismiss_secs,
            DEFAULT_TRACKING_ERROR_DISMISS_SECS,
        )
    }
}

fn clamp_secs(value: Option<u64>, default: u64) -> Duration {
    Duration::from_secs(
        value
            .unwrap_or(default)
            .clamp(MIN_DISMISS_SECS, MAX_DISMISS_SECS),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Builds the page profile this configuration describes.
    ///
    /// With `detect_system_locale` enabled, a supported OS locale replaces
    /// the configured default.
    pub fn page_profile(&self) -> Result<PageProfile> {
        let mut default = self.general.default_locale;
        if self.general.detect_system_locale.unwrap_or(false) {
            if let Some(system) = system_locale() {
                if self.page.supported_locales.contains(&system) {
                    default = system;
                }
            }
        }

        PageProfile::new(
            self.page.supported_locales.iter().copied(),
            default,
            self.page.fallback_locale,
        )
    }
}

fn system_locale() -> Option<Locale> {
    sys_locale::get_locale().and_then(|raw| raw.parse().ok())
}

fn default_locale() -> Locale {
    DEFAULT_LOCALE
}

fn default_fallback_locale() -> Locale {
    DEFAULT_FALLBACK_LOCALE
}

fn default_supported_locales() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

fn default_success_dismiss_secs() -> Option<u64> {
    Some(DEFAULT_SUCCESS_DISMISS_SECS)
}

fn default_tracking_error_dismiss_secs() -> Option<u64> {
    Some(DEFAULT_TRACKING_ERROR_DISMISS_SECS)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
