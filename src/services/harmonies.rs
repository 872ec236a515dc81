//! Color harmony generation.
//!
//! Derives the five harmony schemes from a single base color. Generation is
//! total: input that cannot be parsed as a color is replaced by
//! [`DEFAULT_BASE_COLOR`] and the harmonies are computed from that instead.

use tracing::debug;

use crate::models::{Color, Harmony, HarmonyKind, HarmonySize};

/// Base color substituted for unparseable input (indigo).
pub const DEFAULT_BASE_COLOR: Color = Color::new(0x63, 0x66, 0xf1);

/// A resolved base color and whether the fallback had to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColor {
    /// The color harmonies are generated from
    pub color: Color,
    /// `true` when the input was invalid and [`DEFAULT_BASE_COLOR`] was substituted
    pub fallback: bool,
}

/// Parses `input`, substituting [`DEFAULT_BASE_COLOR`] when it is not a color.
#[must_use]
pub fn resolve_base(input: &str) -> BaseColor {
    match Color::parse(input) {
        Ok(color) => BaseColor {
            color,
            fallback: false,
        },
        Err(e) => {
            debug!("Using fallback base color for {input:?}: {e:#}");
            BaseColor {
                color: DEFAULT_BASE_COLOR,
                fallback: true,
            }
        }
    }
}

/// Generates the five verbose harmonies for `input`.
///
/// Never fails; see [`resolve_base`] for the fallback rule.
///
/// # Examples
///
/// ```
/// use huewheel::services::harmonies::generate_harmonies;
///
/// let harmonies = generate_harmonies("#6366f1");
/// assert_eq!(harmonies.len(), 5);
/// assert_eq!(harmonies[0].name, "Monochromatic");
/// assert_eq!(generate_harmonies("not-a-color"), harmonies);
/// ```
#[must_use]
pub fn generate_harmonies(input: &str) -> Vec<Harmony> {
    generate_harmonies_with(input, HarmonySize::Verbose)
}

/// Generates the five harmonies for `input` using the given size policy.
#[must_use]
pub fn generate_harmonies_with(input: &str, size: HarmonySize) -> Vec<Harmony> {
    harmonies_for(resolve_base(input).color, size)
}

/// Generates the five harmonies for an already parsed base color.
#[must_use]
pub fn harmonies_for(base: Color, size: HarmonySize) -> Vec<Harmony> {
    HarmonyKind::ALL
        .iter()
        .map(|&kind| Harmony::new(kind, harmony_colors(base, kind, size)))
        .collect()
}

/// Builds the color list for one harmony scheme.
#[must_use]
pub fn harmony_colors(base: Color, kind: HarmonyKind, size: HarmonySize) -> Vec<Color> {
    // Achromatic colors rotate from hue 0
    let hue = base.to_hsl().hue_or_zero();
    let rotate = |offset: f64| base.with_hue(hue + offset);

    match (kind, size) {
        (HarmonyKind::Monochromatic, HarmonySize::Verbose) => vec![
            base.brighten(2.0),
            base.brighten(1.0),
            base,
            base.darken(1.0),
            base.darken(2.0),
        ],
        (HarmonyKind::Monochromatic, HarmonySize::Compact) => {
            vec![base.brighten(1.0), base, base.darken(1.0)]
        }
        (HarmonyKind::Complementary, HarmonySize::Verbose) => {
            let complement = rotate(180.0);
            vec![
                base.brighten(1.0),
                base,
                base.darken(1.0),
                complement,
                complement.darken(1.0),
            ]
        }
        (HarmonyKind::Complementary, HarmonySize::Compact) => vec![base, rotate(180.0)],
        (HarmonyKind::Analogous, HarmonySize::Verbose) => vec![
            rotate(-60.0),
            rotate(-30.0),
            base,
            rotate(30.0),
            rotate(60.0),
        ],
        (HarmonyKind::Analogous, HarmonySize::Compact) => {
            vec![rotate(-30.0), base, rotate(30.0)]
        }
        (HarmonyKind::Triadic, HarmonySize::Verbose) => vec![
            base.brighten(0.5),
            base,
            base.darken(0.5),
            rotate(120.0),
            rotate(240.0),
        ],
        (HarmonyKind::Triadic, HarmonySize::Compact) => {
            vec![base, rotate(120.0), rotate(240.0)]
        }
        (HarmonyKind::Tetradic, HarmonySize::Verbose) => vec![
            base,
            rotate(60.0),
            rotate(180.0),
            rotate(240.0),
            rotate(300.0),
        ],
        (HarmonyKind::Tetradic, HarmonySize::Compact) => {
            vec![base, rotate(60.0), rotate(180.0), rotate(240.0)]
        }
    }
}
