//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::{Color, HarmonySize, HexCase};
use crate::services::harmonies::DEFAULT_BASE_COLOR;
use crate::services::wheel::WheelGeometry;

/// Smallest accepted wheel canvas, in pixels.
pub const MIN_WHEEL_SIZE: u32 = 20;
/// Largest accepted wheel canvas, in pixels.
pub const MAX_WHEEL_SIZE: u32 = 4096;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses "auto", "dark" or "light" (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode. Must be 'auto', 'light', or 'dark'"),
        }
    }

    /// Lowercase name, as accepted by [`ThemeMode::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Palette generation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Base color used when none is given on the command line
    #[serde(default = "default_base_color")]
    pub default_base: Color,
    /// Verbose (5 colors) or compact harmonies
    #[serde(default)]
    pub size: HarmonySize,
    /// Case of printed hex values
    #[serde(default)]
    pub hex_case: HexCase,
}

fn default_base_color() -> Color {
    DEFAULT_BASE_COLOR
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_base: default_base_color(),
            size: HarmonySize::default(),
            hex_case: HexCase::default(),
        }
    }
}

/// Wheel canvas used by `wheel pick`/`wheel locate` and the web API defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Canvas edge length in pixels
    #[serde(default = "default_wheel_size")]
    pub size: u32,
    /// Gap between canvas edge and wheel rim in pixels
    #[serde(default = "default_wheel_margin")]
    pub margin: u32,
}

const fn default_wheel_size() -> u32 {
    200
}

const fn default_wheel_margin() -> u32 {
    10
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: default_wheel_size(),
            margin: default_wheel_margin(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key help line on startup
    #[serde(default = "default_true")]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: default_true(),
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/huewheel/config.toml`
/// - macOS: `~/Library/Application Support/huewheel/config.toml`
/// - Windows: `%APPDATA%\huewheel\config.toml`
///
/// Setting `HUEWHEEL_CONFIG_DIR` replaces the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette generation
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Wheel geometry
    #[serde(default)]
    pub wheel: WheelConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `HUEWHEEL_CONFIG_DIR` wins when set; otherwise the platform config
    /// directory joined with `huewheel`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - wheel size is within [`MIN_WHEEL_SIZE`]..=[`MAX_WHEEL_SIZE`]
    /// - the margin leaves a wheel with a positive radius
    pub fn validate(&self) -> Result<()> {
        let WheelConfig { size, margin } = self.wheel;

        if !(MIN_WHEEL_SIZE..=MAX_WHEEL_SIZE).contains(&size) {
            anyhow::bail!(
                "Wheel size must be between {MIN_WHEEL_SIZE} and {MAX_WHEEL_SIZE}, got {size}"
            );
        }

        if margin.saturating_mul(2) >= size {
            anyhow::bail!("Wheel margin {margin} leaves no room for a wheel of size {size}");
        }

        Ok(())
    }

    /// Wheel geometry for the configured canvas.
    #[must_use]
    pub fn wheel_geometry(&self) -> WheelGeometry {
        WheelGeometry::from_canvas(f64::from(self.wheel.size), f64::from(self.wheel.margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.default_base, Color::new(0x63, 0x66, 0xf1));
        assert_eq!(config.palette.size, HarmonySize::Verbose);
        assert_eq!(config.palette.hex_case, HexCase::Lower);
        assert_eq!(config.wheel.size, 200);
        assert_eq!(config.wheel.margin, 10);
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.wheel_geometry(), WheelGeometry::default());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.wheel.size = 10;
        assert!(config.validate().is_err());

        config.wheel.size = 100;
        config.wheel.margin = 50;
        assert!(config.validate().is_err());

        config.wheel.margin = 49;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.palette.default_base = Color::new(255, 0, 0);
        config.palette.size = HarmonySize::Compact;
        config.palette.hex_case = HexCase::Upper;
        config.ui.theme_mode = ThemeMode::Light;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());

        let content = fs::read_to_string(&config_file).unwrap();
        assert!(content.contains("default_base = \"#ff0000\""));
        assert!(content.contains("size = \"compact\""));
        assert!(content.contains("theme_mode = \"Light\""));

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[palette]\ndefault_base = \"teal\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.default_base, Color::new(0, 128, 128));
        assert_eq!(loaded.palette.size, HarmonySize::Verbose);
        assert_eq!(loaded.wheel, WheelConfig::default());
    }

    #[test]
    fn test_load_partial_tables() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(
            &config_file,
            "[palette]\ndefault_base = \"#ff0000\"\n\n[wheel]\nsize = 400\n\n[ui]\ntheme_mode = \"Dark\"\n",
        )
        .unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.default_base, Color::new(255, 0, 0));
        assert_eq!(loaded.wheel.size, 400);
        assert_eq!(loaded.wheel.margin, 10);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert!(loaded.ui.show_help_on_startup);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        fs::write(&config_file, "[palette]\ndefault_base = \"nope\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "[wheel]\nsize = 5\nmargin = 1\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.wheel.size = 1;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("auto").unwrap(), ThemeMode::Auto);
        assert_eq!(ThemeMode::parse("LIGHT").unwrap(), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("dark").unwrap(), ThemeMode::Dark);
        assert!(ThemeMode::parse("sepia").is_err());
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
