//! Futures Pulse - Main Entry Point
//!
//! Interactive terminal menu over Binance USDⓈ-M Futures public
//! market data endpoints.

use anyhow::Result;
use clap::Parser;
use futures_pulse::config::Config;
use futures_pulse::exchange::FapiClient;
use futures_pulse::menu;
use futures_pulse::render;
use tracing_subscriber::EnvFilter;

/// Futures Pulse CLI
#[derive(Parser)]
#[command(name = "futures-pulse")]
#[command(version, about = "Pulse checks on Binance Futures market data")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_logging();

    let config = Config::load()?;
    config.validate()?;
    let client = FapiClient::new(&config)?;

    print_banner();

    menu::run(&client).await
}

/// Logs go to stderr so tables on stdout stay clean. Default level is
/// warn; raise with RUST_LOG for request-level detail.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!(
        "{}",
        render::banner(&format!(
            "futures-pulse v{}  ·  Binance Futures",
            env!("CARGO_PKG_VERSION")
        ))
    );
}
