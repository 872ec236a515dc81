//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::{Color, HarmonySize, HexCase};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default base color
    #[arg(long, value_name = "COLOR")]
    base: Option<String>,

    /// Harmony size (verbose or compact)
    #[arg(long, value_name = "SIZE")]
    size: Option<String>,

    /// Hex output case (lower or upper)
    #[arg(long, value_name = "CASE")]
    case: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Wheel canvas size in pixels
    #[arg(long, value_name = "PX")]
    wheel_size: Option<u32>,

    /// Wheel margin in pixels
    #[arg(long, value_name = "PX")]
    wheel_margin: Option<u32>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    palette: PaletteOutput,
    wheel: WheelOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    default_base: String,
    size: HarmonySize,
    hex_case: HexCase,
}

#[derive(Serialize, Debug)]
struct WheelOutput {
    size: u32,
    margin: u32,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.base.is_none()
            && self.size.is_none()
            && self.case.is_none()
            && self.theme.is_none()
            && self.wheel_size.is_none()
            && self.wheel_margin.is_none()
    }

    /// Applies the given options to `config`.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(base) = &self.base {
            config.palette.default_base = Color::parse(base)
                .map_err(|e| CliError::validation(format!("Invalid base color '{base}': {e}")))?;
        }

        if let Some(size) = &self.size {
            config.palette.size =
                HarmonySize::parse(size).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(case) = &self.case {
            config.palette.hex_case = match case.to_lowercase().as_str() {
                "lower" => HexCase::Lower,
                "upper" => HexCase::Upper,
                _ => {
                    return Err(CliError::validation(
                        "Invalid hex case. Must be 'lower' or 'upper'",
                    ))
                }
            };
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode =
                ThemeMode::parse(theme).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(size) = self.wheel_size {
            config.wheel.size = size;
        }

        if let Some(margin) = self.wheel_margin {
            config.wheel.margin = margin;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --base, --size, --case, --theme, --wheel-size or --wheel-margin",
            ));
        }

        let mut config = Config::load().map_err(|e| {
            CliError::validation(format!("Failed to load configuration: {e:#}"))
        })?;
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        palette: PaletteOutput {
            default_base: config.palette.default_base.format_hex(config.palette.hex_case),
            size: config.palette.size,
            hex_case: config.palette.hex_case,
        },
        wheel: WheelOutput {
            size: config.wheel.size,
            margin: config.wheel.margin,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str().to_string(),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("huewheel Configuration");
    println!("======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Palette:");
    println!(
        "  Default Base: {}",
        config.palette.default_base.format_hex(config.palette.hex_case)
    );
    println!("  Harmony Size: {}", config.palette.size);
    println!(
        "  Hex Case: {}",
        match config.palette.hex_case {
            HexCase::Lower => "lower",
            HexCase::Upper => "upper",
        }
    );
    println!();

    println!("Wheel:");
    println!("  Size: {}px", config.wheel.size);
    println!("  Margin: {}px", config.wheel.margin);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();
}
