//! Accent tokens derived from the base color.
//!
//! The UIs tint their chrome with three HSL tokens computed from the current
//! base color. Lightness is clamped into a readable band for each token.

use serde::Serialize;
use std::fmt;

use crate::models::Color;

/// Hue used when the base color has none (achromatic).
const FALLBACK_HUE: f64 = 240.0;
/// Saturation used when the base color has none.
const FALLBACK_SATURATION: f64 = 1.0;
/// Lightness used when the base color is black.
const FALLBACK_LIGHTNESS: f64 = 0.7;

/// One HSL token: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslToken {
    /// Degrees, 0.0..360.0
    pub hue: f64,
    /// Percent
    pub saturation: f64,
    /// Percent
    pub lightness: f64,
}

impl HslToken {
    /// The token as an RGB color.
    #[must_use]
    pub fn color(&self) -> Color {
        Color::from_hsl(self.hue, self.saturation / 100.0, self.lightness / 100.0)
    }
}

impl fmt::Display for HslToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.1}% {:.1}%",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Primary, muted and dark accent tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeTokens {
    /// Accent color, lightness 50-80%
    pub primary: HslToken,
    /// Soft variant, lightness 70-90%
    pub muted: HslToken,
    /// Deep variant, lightness 20-50%
    pub dark: HslToken,
}

impl ThemeTokens {
    /// Derives the tokens for `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    /// use huewheel::services::ThemeTokens;
    ///
    /// let tokens = ThemeTokens::derive(Color::new(99, 102, 241));
    /// assert!((tokens.primary.lightness - 66.67).abs() < 0.01);
    /// assert!((tokens.muted.lightness - 86.67).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn derive(base: Color) -> Self {
        let hsl = base.to_hsl();
        let hue = hsl.hue.unwrap_or(FALLBACK_HUE);
        let saturation = if hsl.saturation > 0.0 {
            hsl.saturation
        } else {
            FALLBACK_SATURATION
        } * 100.0;
        let lightness = if hsl.lightness > 0.0 {
            hsl.lightness
        } else {
            FALLBACK_LIGHTNESS
        } * 100.0;

        let token = |lightness: f64| HslToken {
            hue,
            saturation,
            lightness,
        };

        Self {
            primary: token(lightness.clamp(50.0, 80.0)),
            muted: token((lightness + 20.0).clamp(70.0, 90.0)),
            dark: token((lightness - 20.0).clamp(20.0, 50.0)),
        }
    }

    /// Renders the tokens as CSS custom property declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "--dynamic-primary: {};\n--dynamic-primary-muted: {};\n--dynamic-primary-dark: {};\n",
            self.primary, self.muted, self.dark
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightness_bands() {
        let tokens = ThemeTokens::derive(Color::new(99, 102, 241));
        let l = Color::new(99, 102, 241).to_hsl().lightness * 100.0;

        assert!((tokens.primary.lightness - l).abs() < 1e-9);
        assert!((tokens.muted.lightness - (l + 20.0)).abs() < 1e-9);
        assert!((tokens.dark.lightness - (l - 20.0)).abs() < 1e-9);
        assert!((tokens.primary.hue - 238.73).abs() < 0.01);
    }

    #[test]
    fn test_clamping() {
        let light = ThemeTokens::derive(Color::new(250, 240, 245));
        assert_eq!(light.primary.lightness, 80.0);
        assert_eq!(light.muted.lightness, 90.0);
        assert_eq!(light.dark.lightness, 50.0);

        let dark = ThemeTokens::derive(Color::new(20, 5, 10));
        assert_eq!(dark.primary.lightness, 50.0);
        assert_eq!(dark.muted.lightness, 70.0);
        assert_eq!(dark.dark.lightness, 20.0);
    }

    #[test]
    fn test_achromatic_uses_fallback_hue() {
        let tokens = ThemeTokens::derive(Color::new(128, 128, 128));
        assert_eq!(tokens.primary.hue, 240.0);
        assert_eq!(tokens.primary.saturation, 100.0);

        let black = ThemeTokens::derive(Color::new(0, 0, 0));
        assert_eq!(black.primary.lightness, 70.0);
    }

    #[test]
    fn test_to_css() {
        let css = ThemeTokens::derive(Color::new(255, 0, 0)).to_css();
        assert_eq!(
            css,
            "--dynamic-primary: 0.0 100.0% 50.0%;\n\
             --dynamic-primary-muted: 0.0 100.0% 70.0%;\n\
             --dynamic-primary-dark: 0.0 100.0% 30.0%;\n"
        );
    }

    #[test]
    fn test_token_color() {
        let tokens = ThemeTokens::derive(Color::new(255, 0, 0));
        assert_eq!(tokens.primary.color(), Color::new(255, 0, 0));
    }
}
