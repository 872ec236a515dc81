//! Export functionality for color palettes.
//!
//! Renders a base color and its harmonies as Markdown documentation, JSON,
//! CSS custom properties or a GIMP palette file.

pub mod css;
pub mod gpl;
pub mod markdown;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::{Color, Harmony, HexCase};

pub use css::generate_css;
pub use gpl::generate_gpl;
pub use markdown::generate_markdown;

/// Output format of [`export_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Markdown document with one table per harmony
    #[default]
    Markdown,
    /// `{ base, harmonies }` JSON document
    Json,
    /// CSS custom properties on `:root`
    Css,
    /// GIMP palette (`.gpl`)
    Gpl,
}

impl ExportFormat {
    /// Parses a format name: `md`, `markdown`, `json`, `css`, `gpl` or `gimp`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "gpl" | "gimp" => Ok(Self::Gpl),
            other => anyhow::bail!(
                "Invalid export format '{other}'. Must be one of: md, json, css, gpl"
            ),
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Css => "css",
            Self::Gpl => "gpl",
        }
    }

    /// MIME type used when serving the export over HTTP.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Json => "application/json",
            Self::Css => "text/css; charset=utf-8",
            Self::Gpl => "text/plain; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Serialize)]
struct PaletteDocument<'a> {
    base: String,
    harmonies: Vec<HarmonyDocument<'a>>,
}

#[derive(Serialize)]
struct HarmonyDocument<'a> {
    name: &'a str,
    description: &'a str,
    colors: Vec<String>,
}

/// Renders a palette in the requested format.
///
/// `case` controls how hex values are written; parsing stays case-insensitive.
///
/// # Examples
///
/// ```
/// use huewheel::export::{export_palette, ExportFormat};
/// use huewheel::models::{Color, HarmonySize, HexCase};
/// use huewheel::services::harmonies_for;
///
/// let base = Color::new(99, 102, 241);
/// let harmonies = harmonies_for(base, HarmonySize::Verbose);
/// let gpl = export_palette(base, &harmonies, ExportFormat::Gpl, HexCase::Lower).unwrap();
/// assert!(gpl.starts_with("GIMP Palette\n"));
/// ```
pub fn export_palette(
    base: Color,
    harmonies: &[Harmony],
    format: ExportFormat,
    case: HexCase,
) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(generate_markdown(base, harmonies, case)),
        ExportFormat::Css => Ok(generate_css(base, harmonies, case)),
        ExportFormat::Gpl => Ok(generate_gpl(base, harmonies, case)),
        ExportFormat::Json => {
            let document = PaletteDocument {
                base: base.format_hex(case),
                harmonies: harmonies
                    .iter()
                    .map(|h| HarmonyDocument {
                        name: &h.name,
                        description: &h.description,
                        colors: h.colors.iter().map(|c| c.format_hex(case)).collect(),
                    })
                    .collect(),
            };
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize palette to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Suggested file name: `palette_<hex>_<YYYY-MM-DD>.<ext>`.
#[must_use]
pub fn default_file_name(base: Color, format: ExportFormat, date: NaiveDate) -> String {
    let hex = base.to_hex();
    format!(
        "palette_{}_{}.{}",
        hex.trim_start_matches('#'),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// [`default_file_name`] for today's local date.
#[must_use]
pub fn default_file_name_today(base: Color, format: ExportFormat) -> String {
    default_file_name(base, format, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HarmonySize;
    use crate::services::harmonies_for;

    fn palette() -> (Color, Vec<Harmony>) {
        let base = Color::new(99, 102, 241);
        (base, harmonies_for(base, HarmonySize::Verbose))
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(ExportFormat::parse("md").unwrap(), ExportFormat::Markdown);
        assert_eq!(ExportFormat::parse("Markdown").unwrap(), ExportFormat::Markdown);
        assert_eq!(ExportFormat::parse("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::parse("gimp").unwrap(), ExportFormat::Gpl);
        assert!(ExportFormat::parse("pdf").is_err());
    }

    #[test]
    fn test_json_export() {
        let (base, harmonies) = palette();
        let json = export_palette(base, &harmonies, ExportFormat::Json, HexCase::Lower).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["base"], "#6366f1");
        assert_eq!(value["harmonies"].as_array().unwrap().len(), 5);
        assert_eq!(value["harmonies"][0]["name"], "Monochromatic");
        assert_eq!(value["harmonies"][0]["colors"].as_array().unwrap().len(), 5);
        assert_eq!(value["harmonies"][0]["colors"][2], "#6366f1");
    }

    #[test]
    fn test_json_export_uppercase() {
        let (base, harmonies) = palette();
        let json = export_palette(base, &harmonies, ExportFormat::Json, HexCase::Upper).unwrap();
        assert!(json.contains("\"#6366F1\""));
        assert!(!json.contains("\"#6366f1\""));
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let base = Color::new(99, 102, 241);
        assert_eq!(
            default_file_name(base, ExportFormat::Markdown, date),
            "palette_6366f1_2024-03-09.md"
        );
        assert_eq!(
            default_file_name(base, ExportFormat::Gpl, date),
            "palette_6366f1_2024-03-09.gpl"
        );
    }

    #[test]
    fn test_default_file_name_today() {
        let name = default_file_name_today(Color::new(0, 0, 0), ExportFormat::Css);
        assert!(name.starts_with("palette_000000_"));
        assert!(name.ends_with(".css"));
    }
}
