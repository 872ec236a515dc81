//! Export command for writing palette files.

use crate::cli::common::{load_config_or_default, CliError, CliResult};
use crate::export::{self, ExportFormat};
use crate::models::{Color, HarmonySize};
use crate::services::{harmonies_for, resolve_base};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export a palette to a file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Base color
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output format: md, json, css or gpl
    #[arg(short, long, value_name = "FORMAT", default_value = "md")]
    pub format: String,

    /// Output path (defaults to palette_[hex]_[date].[ext]); "-" writes to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit 2-4 colors per harmony instead of 5
    #[arg(long)]
    pub compact: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let format = ExportFormat::parse(&self.format)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let config = load_config_or_default();
        let size = if self.compact {
            HarmonySize::Compact
        } else {
            config.palette.size
        };

        let base = resolve_base(&self.color);
        if base.fallback {
            eprintln!(
                "Warning: '{}' is not a valid color, using {}",
                self.color, base.color
            );
        }

        let harmonies = harmonies_for(base.color, size);
        let content =
            export::export_palette(base.color, &harmonies, format, config.palette.hex_case)
                .map_err(|e| CliError::io(format!("Failed to generate export: {e}")))?;

        let output_path = self.get_output_path(base.color, format);
        if output_path.as_os_str() == "-" {
            print!("{content}");
            return Ok(());
        }

        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported palette to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, base: Color, format: ExportFormat) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        PathBuf::from(export::default_file_name_today(base, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<&str>) -> ExportArgs {
        ExportArgs {
            color: "#6366f1".to_string(),
            format: "md".to_string(),
            output: output.map(PathBuf::from),
            compact: false,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(None).get_output_path(Color::new(99, 102, 241), ExportFormat::Css);
        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("palette_6366f1_"));
        assert!(path_str.ends_with(".css"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let path = args(Some("out/palette.md"))
            .get_output_path(Color::new(99, 102, 241), ExportFormat::Markdown);
        assert_eq!(path, PathBuf::from("out/palette.md"));
    }
}
