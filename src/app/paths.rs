// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Single source of truth for where preferences and state live, so every
//! component resolves the same directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`VITRINE_DATA_DIR`, `VITRINE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VITRINE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Must be called once at startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Application data directory (state.cbor lives here).
///
/// Returns `None` if no platform data directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Data directory with an explicit override for tests.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = CLI_DATA_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Application config directory (settings.toml lives here).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory with an explicit override for tests.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
