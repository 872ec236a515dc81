//! Wheel commands: map canvas points to colors and back.

use crate::cli::common::{load_config_or_default, print_json, CliError, CliResult};
use crate::models::Color;
use crate::services::WheelGeometry;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Color wheel coordinate commands
#[derive(Args, Debug)]
pub struct WheelArgs {
    #[command(subcommand)]
    command: WheelCommand,
}

#[derive(Subcommand, Debug)]
enum WheelCommand {
    /// Print the color under a canvas point
    Pick(WheelPickArgs),
    /// Print the canvas point of a color
    Locate(WheelLocateArgs),
}

/// Canvas options shared by both wheel commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct CanvasArgs {
    /// Canvas edge length in pixels (defaults to the configured wheel size)
    #[arg(long, value_name = "PX")]
    pub size: Option<u32>,

    /// Gap between canvas edge and wheel rim (defaults to the configured margin)
    #[arg(long, value_name = "PX")]
    pub margin: Option<u32>,
}

impl CanvasArgs {
    /// Builds the wheel geometry, falling back to configured values.
    pub fn geometry(&self) -> CliResult<WheelGeometry> {
        let config = load_config_or_default();
        let size = self.size.unwrap_or(config.wheel.size);
        let margin = self.margin.unwrap_or(config.wheel.margin);

        if margin.saturating_mul(2) >= size {
            return Err(CliError::validation(format!(
                "Margin {margin} leaves no room for a wheel on a {size}px canvas"
            )));
        }

        Ok(WheelGeometry::from_canvas(f64::from(size), f64::from(margin)))
    }
}

/// Print the color under a canvas point
#[derive(Args, Debug)]
pub struct WheelPickArgs {
    /// Horizontal canvas coordinate
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Vertical canvas coordinate (grows downwards)
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    #[command(flatten)]
    canvas: CanvasArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Print the canvas point of a color
#[derive(Args, Debug)]
pub struct WheelLocateArgs {
    /// Color to locate
    #[arg(value_name = "COLOR")]
    color: String,

    #[command(flatten)]
    canvas: CanvasArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PickOutput {
    x: f64,
    y: f64,
    hue: f64,
    saturation: f64,
    color: Color,
}

#[derive(Serialize, Debug)]
struct LocateOutput {
    color: Color,
    x: f64,
    y: f64,
}

impl WheelArgs {
    /// Execute wheel subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            WheelCommand::Pick(args) => args.execute(),
            WheelCommand::Locate(args) => args.execute(),
        }
    }
}

impl WheelPickArgs {
    /// Execute pick command
    pub fn execute(&self) -> CliResult<()> {
        let wheel = self.canvas.geometry()?;

        let hit = wheel.pick(self.x, self.y).ok_or_else(|| {
            CliError::validation(format!(
                "Point ({}, {}) is outside the wheel (center {}, {}; radius {})",
                self.x, self.y, wheel.center_x, wheel.center_y, wheel.radius
            ))
        })?;

        if self.json {
            print_json(&PickOutput {
                x: self.x,
                y: self.y,
                hue: hit.hue,
                saturation: hit.saturation,
                color: hit.color,
            })?;
        } else {
            println!(
                "{}  hue {:.1}  saturation {:.3}",
                hit.color, hit.hue, hit.saturation
            );
        }

        Ok(())
    }
}

impl WheelLocateArgs {
    /// Execute locate command
    pub fn execute(&self) -> CliResult<()> {
        let wheel = self.canvas.geometry()?;

        let color = Color::parse(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color '{}': {e}", self.color)))?;

        let point = wheel.locate(color).ok_or_else(|| {
            CliError::validation(format!(
                "Color {color} has no hue and no position on the wheel"
            ))
        })?;

        if self.json {
            print_json(&LocateOutput {
                color,
                x: point.x,
                y: point.y,
            })?;
        } else {
            println!("{:.2} {:.2}", point.x, point.y);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rejects_oversized_margin() {
        let canvas = CanvasArgs {
            size: Some(40),
            margin: Some(20),
        };
        let err = canvas.geometry().unwrap_err();
        assert_eq!(err.exit_code().code(), 1);
    }

    #[test]
    fn test_canvas_explicit_values() {
        let canvas = CanvasArgs {
            size: Some(300),
            margin: Some(0),
        };
        assert_eq!(
            canvas.geometry().unwrap(),
            WheelGeometry::new(150.0, 150.0, 150.0)
        );
    }
}
