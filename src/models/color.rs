//! Color value handling: hex/CSS parsing, HSL and CIE Lab conversions.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lab lightness step used by [`Color::brighten`] and [`Color::darken`].
pub const LAB_STEP: f64 = 18.0;

// D65 reference white
const WHITE_X: f64 = 0.950_470;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_830;

const LAB_T0: f64 = 4.0 / 29.0;
const LAB_T1: f64 = 6.0 / 29.0;
const LAB_T2: f64 = 3.0 * LAB_T1 * LAB_T1;
const LAB_T3: f64 = LAB_T1 * LAB_T1 * LAB_T1;

/// Named colors accepted by [`Color::parse`].
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("lime", (0, 255, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("aqua", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("purple", (128, 0, 128)),
    ("teal", (0, 128, 128)),
    ("navy", (0, 0, 128)),
    ("orange", (255, 165, 0)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("coral", (255, 127, 80)),
    ("gold", (255, 215, 0)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("turquoise", (64, 224, 208)),
    ("salmon", (250, 128, 114)),
    ("crimson", (220, 20, 60)),
    ("tomato", (255, 99, 71)),
    ("orchid", (218, 112, 214)),
    ("khaki", (240, 230, 140)),
    ("lavender", (230, 230, 250)),
    ("plum", (221, 160, 221)),
    ("chocolate", (210, 105, 30)),
    ("steelblue", (70, 130, 180)),
    ("slategray", (112, 128, 144)),
    ("rebeccapurple", (102, 51, 153)),
];

/// Output case for hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `#6366f1`
    #[default]
    Lower,
    /// `#6366F1`
    Upper,
}

/// HSL representation of a color.
///
/// `hue` is `None` for achromatic colors (grays, black, white), where the
/// angle on the wheel is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0
    pub hue: Option<f64>,
    /// Saturation, 0.0-1.0
    pub saturation: f64,
    /// Lightness, 0.0-1.0
    pub lightness: f64,
}

impl Hsl {
    /// Hue in degrees, treating an undefined hue as 0.
    #[must_use]
    pub fn hue_or_zero(&self) -> f64 {
        self.hue.unwrap_or(0.0)
    }
}

/// CIE L*a*b* (D65) representation of a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0.0-100.0
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

/// Immutable sRGB color.
///
/// Every derivation (`brighten`, `darken`, `with_hue`, ...) returns a new value.
/// Serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from any supported notation.
    ///
    /// Accepts hex (`#RRGGBB`, `RRGGBB`, `#RGB`), `rgb(r, g, b)`,
    /// `hsl(h, s%, l%)` and a table of CSS color names. Case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    ///
    /// assert_eq!(Color::parse("#6366F1").unwrap(), Color::new(99, 102, 241));
    /// assert_eq!(Color::parse("rgb(255, 0, 0)").unwrap(), Color::new(255, 0, 0));
    /// assert_eq!(Color::parse("Navy").unwrap(), Color::new(0, 0, 128));
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();

        if lower.starts_with("rgb") {
            return Self::parse_rgb_function(&lower);
        }
        if lower.starts_with("hsl") {
            return Self::parse_hsl_function(&lower);
        }
        if let Some((_, (r, g, b))) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(Self::new(*r, *g, *b));
        }

        Self::from_hex(trimmed)
    }

    /// Parses a color from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    ///
    /// let color = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, Color::new(255, 0, 0));
    ///
    /// let color = Color::from_hex("0f0").unwrap();
    /// assert_eq!(color, Color::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Expected hex digits (RRGGBB or RGB)");
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB) or 3 (RGB)"
            ),
        };

        let r = u8::from_str_radix(&expanded[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&expanded[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&expanded[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    fn parse_rgb_function(input: &str) -> Result<Self> {
        let pattern = Regex::new(
            r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$",
        )
        .context("Failed to compile rgb() pattern")?;
        let caps = pattern
            .captures(input)
            .with_context(|| format!("Invalid rgb() color '{input}'"))?;

        let channel = |idx: usize| -> Result<u8> {
            caps[idx]
                .parse::<u8>()
                .with_context(|| format!("Channel out of range in '{input}'"))
        };

        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    fn parse_hsl_function(input: &str) -> Result<Self> {
        let pattern = Regex::new(
            r"^hsla?\(\s*(-?[\d.]+)(?:deg)?\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,\s*[\d.]+\s*)?\)$",
        )
        .context("Failed to compile hsl() pattern")?;
        let caps = pattern
            .captures(input)
            .with_context(|| format!("Invalid hsl() color '{input}'"))?;

        let number = |idx: usize| -> Result<f64> {
            caps[idx]
                .parse::<f64>()
                .with_context(|| format!("Invalid number in '{input}'"))
        };

        let saturation = number(2)?;
        let lightness = number(3)?;
        if saturation > 100.0 || lightness > 100.0 {
            anyhow::bail!("Saturation and lightness must be at most 100% in '{input}'");
        }

        Ok(Self::from_hsl(number(1)?, saturation / 100.0, lightness / 100.0))
    }

    /// Converts the color to a lowercase hex string, e.g. `#6366f1`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to an uppercase hex string, e.g. `#6366F1`.
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as hex in the requested case.
    #[must_use]
    pub fn format_hex(&self, case: HexCase) -> String {
        match case {
            HexCase::Lower => self.to_hex(),
            HexCase::Upper => self.to_hex_upper(),
        }
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    ///
    /// let hsl = Color::new(255, 0, 0).to_hsl();
    /// assert_eq!(hsl.hue, Some(0.0));
    /// assert!((hsl.saturation - 1.0).abs() < 1e-9);
    /// assert!((hsl.lightness - 0.5).abs() < 1e-9);
    ///
    /// assert_eq!(Color::new(128, 128, 128).to_hsl().hue, None);
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl {
                hue: None,
                saturation: 0.0,
                lightness,
            };
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        Hsl {
            hue: Some(normalize_hue(sector * 60.0)),
            saturation,
            lightness,
        }
    }

    /// Creates a color from HSL components.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (any value, wrapped into 0..360)
    /// * `s` - Saturation (0.0-1.0, will be clamped)
    /// * `l` - Lightness (0.0-1.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    ///
    /// assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::new(0, 255, 0));
    /// assert_eq!(Color::from_hsl(-120.0, 1.0, 0.5), Color::new(0, 0, 255));
    /// ```
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = normalize_hue(h) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel_from_unit(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            channel_from_unit(hue_to_channel(p, q, h + 1.0 / 3.0)),
            channel_from_unit(hue_to_channel(p, q, h)),
            channel_from_unit(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Returns the color rotated to hue `h`, keeping saturation and lightness.
    #[must_use]
    pub fn with_hue(&self, h: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(h, hsl.saturation, hsl.lightness)
    }

    /// Converts the color to CIE Lab (D65).
    #[must_use]
    pub fn to_lab(&self) -> Lab {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let x = xyz_to_lab_component(
            (0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / WHITE_X,
        );
        let y = xyz_to_lab_component(
            (0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / WHITE_Y,
        );
        let z = xyz_to_lab_component(
            (0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / WHITE_Z,
        );

        Lab {
            l: (116.0 * y - 16.0).max(0.0),
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// Creates a color from CIE Lab, clamping out-of-gamut channels.
    #[must_use]
    pub fn from_lab(lab: Lab) -> Self {
        let y = (lab.l + 16.0) / 116.0;
        let x = y + lab.a / 500.0;
        let z = y - lab.b / 200.0;

        let x = WHITE_X * lab_to_xyz_component(x);
        let y = WHITE_Y * lab_to_xyz_component(y);
        let z = WHITE_Z * lab_to_xyz_component(z);

        Self::new(
            linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            linear_to_srgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        )
    }

    /// Returns a perceptually lighter color.
    ///
    /// Each unit of `amount` raises Lab lightness by [`LAB_STEP`].
    /// Negative amounts darken.
    ///
    /// # Examples
    ///
    /// ```
    /// use huewheel::models::Color;
    ///
    /// let base = Color::new(99, 102, 241);
    /// assert!(base.brighten(1.0).to_lab().l > base.to_lab().l);
    /// assert!(base.brighten(2.0).to_lab().l > base.brighten(1.0).to_lab().l);
    /// ```
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Self {
        let mut lab = self.to_lab();
        lab.l += LAB_STEP * amount;
        Self::from_lab(lab)
    }

    /// Returns a perceptually darker color. Inverse direction of [`Color::brighten`].
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.brighten(-amount)
    }
}

/// Wraps a hue in degrees into 0.0..360.0.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_from_unit(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> u8 {
    let companded = if value <= 0.003_04 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    };
    channel_from_unit(companded)
}

fn xyz_to_lab_component(t: f64) -> f64 {
    if t > LAB_T3 {
        t.cbrt()
    } else {
        t / LAB_T2 + LAB_T0
    }
}

fn lab_to_xyz_component(t: f64) -> f64 {
    if t > LAB_T1 {
        t * t * t
    } else {
        LAB_T2 * (t - LAB_T0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
