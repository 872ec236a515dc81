//! Harmonies command: print the five palettes for a base color.

use crate::cli::common::{load_config_or_default, print_json, CliResult};
use crate::models::{Color, Harmony, HarmonySize, HexCase};
use crate::services::{harmonies_for, resolve_base};
use clap::Args;
use serde::Serialize;
use std::fmt::Write as _;

/// Generate color harmonies for a base color
#[derive(Debug, Clone, Args)]
pub struct HarmoniesArgs {
    /// Base color (hex, rgb(), hsl() or a CSS color name)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Emit 2-4 colors per harmony instead of 5
    #[arg(long)]
    pub compact: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print hex values in uppercase
    #[arg(long)]
    pub uppercase: bool,
}

/// JSON output of the harmonies command.
#[derive(Serialize, Debug)]
pub struct HarmoniesOutput {
    /// Base color actually used
    pub base: String,
    /// Whether the input was replaced by the default base color
    pub fallback: bool,
    /// Harmony size policy
    pub size: HarmonySize,
    /// The five harmonies
    pub harmonies: Vec<HarmonyOutput>,
}

/// One harmony in JSON output.
#[derive(Serialize, Debug)]
pub struct HarmonyOutput {
    /// Display name
    pub name: String,
    /// Description of the scheme
    pub description: String,
    /// Hex colors
    pub colors: Vec<String>,
}

impl HarmonyOutput {
    /// Converts a harmony, formatting hex values in `case`.
    #[must_use]
    pub fn from_harmony(harmony: &Harmony, case: HexCase) -> Self {
        Self {
            name: harmony.name.clone(),
            description: harmony.description.clone(),
            colors: harmony.colors.iter().map(|c| c.format_hex(case)).collect(),
        }
    }
}

impl HarmoniesArgs {
    /// Execute the harmonies command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config_or_default();
        let size = if self.compact {
            HarmonySize::Compact
        } else {
            config.palette.size
        };
        let case = if self.uppercase {
            HexCase::Upper
        } else {
            config.palette.hex_case
        };

        let base = resolve_base(&self.color);
        if base.fallback {
            eprintln!(
                "Warning: '{}' is not a valid color, using {}",
                self.color,
                base.color.format_hex(case)
            );
        }

        let harmonies = harmonies_for(base.color, size);

        if self.json {
            print_json(&HarmoniesOutput {
                base: base.color.format_hex(case),
                fallback: base.fallback,
                size,
                harmonies: harmonies
                    .iter()
                    .map(|h| HarmonyOutput::from_harmony(h, case))
                    .collect(),
            })?;
        } else {
            print!("{}", format_harmonies(base.color, &harmonies, case));
        }

        Ok(())
    }
}

/// Formats harmonies as plain text, one block per harmony.
#[must_use]
pub fn format_harmonies(base: Color, harmonies: &[Harmony], case: HexCase) -> String {
    let mut output = format!("Base: {}\n", base.format_hex(case));

    for harmony in harmonies {
        let colors: Vec<String> = harmony.colors.iter().map(|c| c.format_hex(case)).collect();
        let _ = writeln!(output, "\n{} - {}", harmony.name, harmony.description);
        let _ = writeln!(output, "  {}", colors.join("  "));
    }

    output
}
