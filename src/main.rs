//! HueWheel - color wheel picker and harmony palette generator
//!
//! Without a subcommand this launches the terminal UI; subcommands give
//! headless access for scripts.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huewheel::cli::Command;
use huewheel::constants::APP_BINARY_NAME;

/// HueWheel - color wheel picker and harmony palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Initial base color for the TUI (hex, rgb(), hsl() or a CSS name)
    #[arg(short, long, value_name = "COLOR")]
    color: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_tracing(cli.verbose);
        if let Err(e) = command.execute() {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code().code());
        }
        return Ok(());
    }

    run_tui(cli.color.as_deref())
}

#[cfg(feature = "ratatui")]
fn run_tui(color: Option<&str>) -> Result<()> {
    use huewheel::config::Config;
    use huewheel::models::Color;

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring unreadable configuration: {e:#}");
        Config::default()
    });

    let initial = match color {
        Some(input) => match Color::parse(input) {
            Ok(color) => Some(color),
            Err(e) => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    huewheel::tui::run(config, initial)
}

#[cfg(not(feature = "ratatui"))]
fn run_tui(_color: Option<&str>) -> Result<()> {
    anyhow::bail!(
        "{APP_BINARY_NAME} was built without the terminal UI; run a subcommand (see --help)"
    )
}
