// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and start screen
//! - `[sheet]` - Wallet sheet dimensions and backdrop dimming
//! - `[release]` - Drag release heuristic per screen
//! - `[spring]` - Settle animation spring
//!
//! Every numeric value is optional and clamped to its valid range when read,
//! so a hand-edited file can never produce an unusable sheet.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `COFFEE_WALLET_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use coffee_wallet::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("tr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::app::screen::Screen;
use crate::error::{Error, Result};
use crate::ui::animation::SpringConfig;
use crate::ui::sheet::{ReleaseHeuristic, ReleaseVariant};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "tr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Screen shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_screen: Option<Screen>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            start_screen: Some(Screen::default()),
        }
    }
}

/// Wallet sheet dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    /// Height of the visible header strip when closed (px).
    #[serde(default = "default_min_height", skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,

    /// Fraction of the window height covered by the open sheet.
    #[serde(
        default = "default_max_height_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_height_ratio: Option<f32>,

    /// Width of the closed sheet (px).
    #[serde(
        default = "default_closed_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub closed_width: Option<f32>,

    /// Horizontal margin left around the open sheet (px).
    #[serde(
        default = "default_open_width_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_width_margin: Option<f32>,

    /// Backdrop opacity when fully open (0.0 to 1.0).
    #[serde(
        default = "default_max_backdrop_opacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_backdrop_opacity: Option<f32>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_height: default_min_height(),
            max_height_ratio: default_max_height_ratio(),
            closed_width: default_closed_width(),
            open_width_margin: default_open_width_margin(),
            max_backdrop_opacity: default_max_backdrop_opacity(),
        }
    }
}

impl SheetConfig {
    #[must_use]
    pub fn min_height(&self) -> f32 {
        clamped(
            self.min_height,
            DEFAULT_SHEET_MIN_HEIGHT,
            MIN_SHEET_MIN_HEIGHT,
            MAX_SHEET_MIN_HEIGHT,
        )
    }

    #[must_use]
    pub fn max_height_ratio(&self) -> f32 {
        clamped(
            self.max_height_ratio,
            DEFAULT_SHEET_MAX_HEIGHT_RATIO,
            MIN_SHEET_MAX_HEIGHT_RATIO,
            MAX_SHEET_MAX_HEIGHT_RATIO,
        )
    }

    #[must_use]
    pub fn closed_width(&self) -> f32 {
        clamped(
            self.closed_width,
            DEFAULT_CLOSED_SHEET_WIDTH,
            MIN_CLOSED_SHEET_WIDTH,
            MAX_CLOSED_SHEET_WIDTH,
        )
    }

    #[must_use]
    pub fn open_width_margin(&self) -> f32 {
        clamped(
            self.open_width_margin,
            DEFAULT_OPEN_WIDTH_MARGIN,
            MIN_OPEN_WIDTH_MARGIN,
            MAX_OPEN_WIDTH_MARGIN,
        )
    }

    #[must_use]
    pub fn max_backdrop_opacity(&self) -> f32 {
        clamped(
            self.max_backdrop_opacity,
            DEFAULT_MAX_BACKDROP_OPACITY,
            MIN_BACKDROP_OPACITY,
            MAX_BACKDROP_OPACITY,
        )
    }
}

/// Release heuristic per screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseConfig {
    /// Variant used on the map screen.
    #[serde(default = "default_map_variant", skip_serializing_if = "Option::is_none")]
    pub map: Option<ReleaseVariant>,

    /// Variant used on the wallet screen.
    #[serde(
        default = "default_wallet_variant",
        skip_serializing_if = "Option::is_none"
    )]
    pub wallet: Option<ReleaseVariant>,

    /// Overrides the flick cutoff of both variants (px/s, negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flick_velocity: Option<f32>,

    /// Overrides the velocity projection factor of both variants (s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_factor: Option<f32>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            map: default_map_variant(),
            wallet: default_wallet_variant(),
            flick_velocity: None,
            projection_factor: None,
        }
    }
}

impl ReleaseConfig {
    #[must_use]
    pub fn variant_for(&self, screen: Screen) -> ReleaseVariant {
        match screen {
            Screen::Map => self.map.unwrap_or(ReleaseVariant::Projected),
            Screen::Wallet => self.wallet.unwrap_or(ReleaseVariant::Midpoint),
        }
    }

    /// Resolved heuristic for a screen, with overrides applied.
    #[must_use]
    pub fn heuristic_for(&self, screen: Screen) -> ReleaseHeuristic {
        let preset = ReleaseHeuristic::from_variant(self.variant_for(screen));
        ReleaseHeuristic {
            flick_velocity: clamped(
                self.flick_velocity,
                preset.flick_velocity,
                MIN_FLICK_VELOCITY,
                MAX_FLICK_VELOCITY,
            ),
            projection_factor: clamped(
                self.projection_factor,
                preset.projection_factor,
                MIN_PROJECTION_FACTOR,
                MAX_PROJECTION_FACTOR,
            ),
        }
    }
}

/// Settle animation spring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpringSettings {
    #[serde(default = "default_stiffness", skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,

    #[serde(default = "default_damping", skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,

    #[serde(default = "default_mass", skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
        }
    }
}

impl SpringSettings {
    /// Spring used to settle the wallet sheet.
    #[must_use]
    pub fn sheet_spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: clamped(
                self.stiffness,
                DEFAULT_SPRING_STIFFNESS,
                MIN_SPRING_STIFFNESS,
                MAX_SPRING_STIFFNESS,
            ),
            damping: clamped(
                self.damping,
                DEFAULT_SPRING_DAMPING,
                MIN_SPRING_DAMPING,
                MAX_SPRING_DAMPING,
            ),
            mass: clamped(self.mass, DEFAULT_SPRING_MASS, MIN_SPRING_MASS, MAX_SPRING_MASS),
            ..SpringConfig::sheet()
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sheet: SheetConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub spring: SpringSettings,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_min_height() -> Option<f32> {
    Some(DEFAULT_SHEET_MIN_HEIGHT)
}

fn default_max_height_ratio() -> Option<f32> {
    Some(DEFAULT_SHEET_MAX_HEIGHT_RATIO)
}

fn default_closed_width() -> Option<f32> {
    Some(DEFAULT_CLOSED_SHEET_WIDTH)
}

fn default_open_width_margin() -> Option<f32> {
    Some(DEFAULT_OPEN_WIDTH_MARGIN)
}

fn default_max_backdrop_opacity() -> Option<f32> {
    Some(DEFAULT_MAX_BACKDROP_OPACITY)
}

fn default_map_variant() -> Option<ReleaseVariant> {
    Some(ReleaseVariant::Projected)
}

fn default_wallet_variant() -> Option<ReleaseVariant> {
    Some(ReleaseVariant::Midpoint)
}

fn default_stiffness() -> Option<f32> {
    Some(DEFAULT_SPRING_STIFFNESS)
}

fn default_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn default_mass() -> Option<f32> {
    Some(DEFAULT_SPRING_MASS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Reads an optional value, falling back to `default` when missing or not
/// finite and clamping to `[min, max]`.
fn clamped(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the config file path that [`load`] and [`save`] use.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
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
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
