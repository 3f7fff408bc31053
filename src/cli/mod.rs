mod args;
mod global;
mod handlers;

use args::{DecodeArgs, SeeArgs, ServeArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "name-viz")]
#[command(version)]
#[command(about = "Fun Name Visualizer: see how text is stored byte-by-byte, and decode bytes back into text", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:
  name-viz see --name \"Ada Lovelace\"
  name-viz see --reverse=codepoints --name \"U+0041 0x0042 67\"
  name-viz see --reverse=bytes --name \"0xF0 0x9F 0x98 0x8A\"
  name-viz decode --hex \"41 64 61\"
  name-viz decode --bin \"01000001 01100100 01100001\"
  name-viz serve --addr 127.0.0.1:8080")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hex and binary representation of every letter in a name
    See(SeeArgs),
    /// Convert hex or binary bytes back into UTF-8 text
    Decode(DecodeArgs),
    /// Host the visualiser over HTTP
    Serve(ServeArgs),
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let settings = match cli.global.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            let color =
                !cli.global.no_color && name_viz::should_use_color(io::stderr().is_terminal());
            report_error(e.as_ref(), color);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::See(args) => handlers::see::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Serve(args) => handlers::serve::handle(args, &cli.global, &settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let color = cli.global.color(&settings, io::stderr().is_terminal());
            report_error(e.as_ref(), color);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(global: &GlobalArgs) {
    let level = if global.verbose {
        Level::DEBUG
    } else if global.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!global.no_color && io::stderr().is_terminal())
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn report_error(e: &dyn std::error::Error, color: bool) {
    if color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
    } else {
        eprintln!("error: {}", e);
    }
}
