//! Color harmony data structures.
//!
//! A harmony is a named set of colors derived from one base color by hue
//! rotation and/or lightness adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// The five harmony schemes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Shades and tints of the base color
    Monochromatic,
    /// Base color plus the opposite hue
    Complementary,
    /// Neighbouring hues
    Analogous,
    /// Three hues 120° apart
    Triadic,
    /// Four hues forming a rectangle
    Tetradic,
}

impl HarmonyKind {
    /// All kinds in the order they are generated and displayed.
    pub const ALL: [Self; 5] = [
        Self::Monochromatic,
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
    ];

    /// Display name (e.g., "Complementary").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }

    /// One-line description shown under the harmony name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monochromatic => "Different shades and tints of the same color",
            Self::Complementary => "Colors opposite on the color wheel",
            Self::Analogous => "Colors adjacent on the color wheel",
            Self::Triadic => "Three colors evenly spaced on the color wheel",
            Self::Tetradic => "Four colors forming a rectangle on the color wheel",
        }
    }

    /// Lowercase identifier used in CSS variable names and file exports.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output-size policy for generated harmonies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HarmonySize {
    /// Five colors per harmony
    #[default]
    Verbose,
    /// Two to four colors per harmony
    Compact,
}

impl HarmonySize {
    /// Returns the other policy.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Verbose => Self::Compact,
            Self::Compact => Self::Verbose,
        }
    }

    /// Parses "verbose" or "compact" (case-insensitive).
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            other => anyhow::bail!("Invalid harmony size '{other}'. Must be 'verbose' or 'compact'"),
        }
    }
}

impl fmt::Display for HarmonySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbose => f.write_str("verbose"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

/// A named set of colors derived from a base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Harmony {
    /// Which scheme produced this harmony.
    #[serde(skip)]
    pub kind: HarmonyKind,
    /// Display name (e.g., "Triadic").
    pub name: String,
    /// Short description of the scheme.
    pub description: String,
    /// Ordered colors, 2 to 5 entries.
    pub colors: Vec<Color>,
}

impl Harmony {
    /// Creates a harmony of the given kind with the kind's name and description.
    #[must_use]
    pub fn new(kind: HarmonyKind, colors: Vec<Color>) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            colors,
        }
    }

    /// Get a color by index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Get the number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the harmony has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
