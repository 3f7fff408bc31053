//! TCP echo server: every byte a client sends is written straight back.

use clap::Parser;
use name_viz::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "name-viz-echo")]
#[command(version)]
#[command(about = "Echo every TCP connection's input back to it", long_about = None)]
struct Cli {
    /// Address to listen on, e.g. '0.0.0.0:9000' or '127.0.0.1:7000' (default from settings)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,

    /// Read settings from this file instead of the standard locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_with_overrides(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let addr = cli.addr.unwrap_or(settings.echo.addr);
    match name_viz::echo::serve(&addr).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to listen on {}: {}", addr, e);
            ExitCode::FAILURE
        }
    }
}
