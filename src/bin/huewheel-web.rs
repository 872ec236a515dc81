//! huewheel Web Server Binary
//!
//! This binary starts the huewheel web server that provides a REST API over
//! the harmony generator and the color wheel mapper.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001)
//! huewheel-web
//!
//! # Specify host and port
//! huewheel-web --host 0.0.0.0 --port 8080
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huewheel::config::Config;
use huewheel::web;

/// huewheel Web Server - REST API for palettes and the color wheel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable configuration: {e:#}");
        Config::default()
    });
    info!(
        "Default base {} ({} harmonies)",
        config.palette.default_base, config.palette.size
    );

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
