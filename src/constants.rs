//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HueWheel";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "huewheel";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "huewheel";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "HUEWHEEL_CONFIG_DIR";
