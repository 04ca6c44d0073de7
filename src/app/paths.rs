// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for the preference store and `settings.toml`.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`MOROCCO_DOCS_DATA_DIR`, `MOROCCO_DOCS_CONFIG_DIR`)
//! 4. **Platform default** via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "MoroccoDocs";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "MOROCCO_DOCS_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "MOROCCO_DOCS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call takes effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !data_set || !config_set {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

/// Data directory: holds the persisted preference store.
///
/// Returns `None` if no platform data directory exists.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Config directory: holds `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
