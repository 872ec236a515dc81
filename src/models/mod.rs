//! Data models for colors and color harmonies.
//!
//! This module contains the core value types used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod color;
pub mod harmony;

// Re-export all model types
pub use color::{Color, HexCase, Hsl, Lab};
pub use harmony::{Harmony, HarmonyKind, HarmonySize};
