//! Markdown palette document.
//!
//! One section per harmony with its description and a table listing every
//! color as hex, RGB and HSL.

use std::fmt::Write as _;

use crate::models::{Color, Harmony, HexCase};

/// Generates a markdown document for a palette.
///
/// # Examples
///
/// ```
/// use huewheel::export::markdown::generate_markdown;
/// use huewheel::models::{Color, HarmonySize, HexCase};
/// use huewheel::services::harmonies_for;
///
/// let base = Color::new(255, 0, 0);
/// let doc = generate_markdown(base, &harmonies_for(base, HarmonySize::Compact), HexCase::Lower);
/// assert!(doc.starts_with("# Color Palette"));
/// assert!(doc.contains("## Tetradic"));
/// ```
pub fn generate_markdown(base: Color, harmonies: &[Harmony], case: HexCase) -> String {
    let mut output = String::new();

    output.push_str("# Color Palette\n\n");
    let _ = writeln!(output, "**Base color:** `{}`\n", base.format_hex(case));

    for harmony in harmonies {
        let _ = writeln!(output, "## {}\n", harmony.name);
        let _ = writeln!(output, "{}\n", harmony.description);

        output.push_str("| # | Hex | RGB | HSL |\n");
        output.push_str("|---|-----|-----|-----|\n");

        for (index, color) in harmony.colors.iter().enumerate() {
            let _ = writeln!(
                output,
                "| {} | `{}` | {} | {} |",
                index + 1,
                color.format_hex(case),
                format_rgb(*color),
                format_hsl(*color)
            );
        }

        output.push('\n');
    }

    output
}

/// Formats a color as `rgb(r, g, b)`.
#[must_use]
pub fn format_rgb(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// Formats a color as `hsl(h, s%, l%)` with whole numbers.
///
/// Achromatic colors are written with hue 0.
#[must_use]
pub fn format_hsl(color: Color) -> String {
    let hsl = color.to_hsl();
    format!(
        "hsl({:.0}, {:.0}%, {:.0}%)",
        hsl.hue_or_zero(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HarmonySize;
    use crate::services::harmonies_for;

    #[test]
    fn test_sections_for_every_harmony() {
        let base = Color::new(99, 102, 241);
        let doc = generate_markdown(base, &harmonies_for(base, HarmonySize::Verbose), HexCase::Lower);

        assert!(doc.contains("**Base color:** `#6366f1`"));
        for name in ["Monochromatic", "Complementary", "Analogous", "Triadic", "Tetradic"] {
            assert!(doc.contains(&format!("## {name}\n")), "missing {name}");
        }
        assert!(doc.contains("Colors opposite on the color wheel"));
        assert_eq!(doc.matches("| # | Hex | RGB | HSL |").count(), 5);
    }

    #[test]
    fn test_row_format() {
        let base = Color::new(255, 0, 0);
        let doc = generate_markdown(base, &harmonies_for(base, HarmonySize::Compact), HexCase::Upper);

        assert!(doc.contains("| 1 | `#FF0000` | rgb(255, 0, 0) | hsl(0, 100%, 50%) |"));
        // Compact complementary has two rows
        let section = doc
            .split("## Complementary")
            .nth(1)
            .and_then(|rest| rest.split("## ").next())
            .unwrap();
        assert!(section.contains("| 2 |"));
        assert!(!section.contains("| 3 |"));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_rgb(Color::new(1, 2, 3)), "rgb(1, 2, 3)");
        assert_eq!(format_hsl(Color::new(128, 128, 128)), "hsl(0, 0%, 50%)");
        assert_eq!(format_hsl(Color::new(0, 0, 255)), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn test_empty_harmonies() {
        let doc = generate_markdown(Color::new(0, 0, 0), &[], HexCase::Lower);
        assert!(doc.contains("# Color Palette"));
        assert!(!doc.contains("## "));
    }
}
