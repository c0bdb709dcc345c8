// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[motion]` - Whether animations run at all
//! - `[carousel]` - Autoplay behavior of the services carousel
//! - `[gallery]` - Content directory and prefetch limits
//! - `[form]` - Draft autosave for the consultation form
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Master switch. When false, reveals fire immediately, the hero
    /// headline skips its typewriter, and pointer effects are inert.
    #[serde(
        default = "default_motion_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: default_motion_enabled(),
        }
    }
}

/// Services carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Whether the carousel advances on its own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Autoplay interval in milliseconds.
    #[serde(
        default = "default_autoplay_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_delay_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
        }
    }
}

impl CarouselConfig {
    /// The autoplay interval clamped to its supported range.
    pub fn autoplay_delay(&self) -> Duration {
        let ms = self
            .autoplay_delay_ms
            .unwrap_or(DEFAULT_AUTOPLAY_DELAY_MS)
            .clamp(MIN_AUTOPLAY_DELAY_MS, MAX_AUTOPLAY_DELAY_MS);
        Duration::from_millis(ms)
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory holding `projects.toml` and the project images. The
    /// `--content-dir` CLI flag takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    /// Maximum lightbox images kept prefetched.
    #[serde(
        default = "default_prefetch_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_images: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            prefetch_images: default_prefetch_images(),
        }
    }
}

/// Consultation form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// Whether unsent field text is saved across sessions.
    #[serde(
        default = "default_draft_autosave",
        skip_serializing_if = "Option::is_none"
    )]
    pub draft_autosave: Option<bool>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            draft_autosave: default_draft_autosave(),
        }
    }
}

/// The complete, sectioned configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub form: FormConfig,
}

impl Config {
    /// Whether animations should run.
    pub fn motion_enabled(&self) -> bool {
        self.motion.enabled.unwrap_or(true)
    }
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Returns `(config, warning)`. A missing file is not an error — defaults
/// apply silently. A present-but-broken file also yields defaults, plus a
/// notification key describing the problem so the user learns their
/// settings were ignored.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    let config = toml::from_str(&raw)?;
    Ok(config)
}

/// Saves the configuration to the default location, creating the config
/// directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("no config directory available".into()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}
