//! CSS custom property export.

use std::fmt::Write as _;

use crate::models::{Color, Harmony, HexCase};
use crate::services::ThemeTokens;

/// Generates a `:root` block declaring one variable per palette color.
///
/// Variables are named `--<harmony>-<n>` with 1-based `n`. The accent theme
/// tokens for the base color are appended.
pub fn generate_css(base: Color, harmonies: &[Harmony], case: HexCase) -> String {
    let mut output = String::new();

    output.push_str(":root {\n");
    let _ = writeln!(output, "  --palette-base: {};", base.format_hex(case));

    for harmony in harmonies {
        for (index, color) in harmony.colors.iter().enumerate() {
            let _ = writeln!(
                output,
                "  --{}-{}: {};",
                harmony.kind.slug(),
                index + 1,
                color.format_hex(case)
            );
        }
    }

    for line in ThemeTokens::derive(base).to_css().lines() {
        let _ = writeln!(output, "  {line}");
    }

    output.push_str("}\n");
    output
}
