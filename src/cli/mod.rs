//! CLI command handlers for huewheel.
//!
//! This module provides headless, scriptable access to the palette generator
//! and the wheel mapper for automation and shell pipelines.

pub mod common;
pub mod config;
pub mod export;
pub mod harmonies;
pub mod random;
pub mod wheel;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use harmonies::HarmoniesArgs;
pub use random::RandomArgs;
pub use wheel::WheelArgs;

/// Headless subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the five color harmonies for a base color
    Harmonies(HarmoniesArgs),
    /// Map between wheel coordinates and colors
    Wheel(WheelArgs),
    /// Print a random base color
    Random(RandomArgs),
    /// Export a palette to Markdown, JSON, CSS or GIMP palette
    Export(ExportArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    /// Runs the selected subcommand.
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Self::Harmonies(args) => args.execute(),
            Self::Wheel(args) => args.execute(),
            Self::Random(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}
