//! HueWheel Library
//!
//! This library provides the core of the HueWheel palette tool: mapping
//! points on a color wheel to colors and back, generating color harmonies
//! from a base color, deriving theme tokens and exporting palettes.
//!
//! The command line, the terminal UI (feature `ratatui`) and the HTTP API
//! (feature `web`) are thin layers over [`services`].

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
