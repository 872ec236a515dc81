//! Random command: print a random base color.

use crate::cli::common::{load_config_or_default, print_json, CliResult};
use crate::cli::harmonies::HarmonyOutput;
use crate::services::{harmonies_for, random_color};
use clap::Args;
use serde::Serialize;

/// Print a random base color
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// Output the color and its harmonies as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct RandomOutput {
    base: String,
    harmonies: Vec<HarmonyOutput>,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config_or_default();
        let case = config.palette.hex_case;
        let color = random_color(&mut rand::thread_rng());

        if self.json {
            let harmonies = harmonies_for(color, config.palette.size);
            print_json(&RandomOutput {
                base: color.format_hex(case),
                harmonies: harmonies
                    .iter()
                    .map(|h| HarmonyOutput::from_harmony(h, case))
                    .collect(),
            })?;
        } else {
            println!("{}", color.format_hex(case));
        }

        Ok(())
    }
}
