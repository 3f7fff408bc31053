use clap::Args;
use name_viz::Settings;
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Only log warnings and errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read settings from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Whether to colour a stream, honouring --no-color before the settings file
    pub fn color(&self, settings: &Settings, is_terminal: bool) -> bool {
        !self.no_color && settings.display.color.enabled(is_terminal)
    }

    pub fn load_settings(&self) -> Result<Settings, Box<dyn std::error::Error>> {
        match &self.config {
            Some(path) => Settings::load_from_file(path),
            None => Settings::load_with_overrides(),
        }
    }
}
