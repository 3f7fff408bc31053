use clap::{Args, ValueEnum};

/// How `see` prints its rows
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SeeFormat {
    /// Fixed-width table
    #[default]
    Table,
    /// `{"items": [...]}` document
    Json,
    /// Header line plus one line per character
    Csv,
}

/// Arguments for showing how text is stored
#[derive(Args, Debug)]
pub struct SeeArgs {
    /// Name or tokens to visualize
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Reverse input: 'codepoints' or 'bytes' to build text from numbers
    #[arg(short = 'r', long, value_name = "MODE")]
    pub reverse: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = SeeFormat::Table)]
    pub format: SeeFormat,

    /// Name given without --name; words are joined with spaces
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Arguments for turning hex or binary bytes back into text
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex bytes (space separated or continuous, e.g. '41 73' or '4173')
    #[arg(long)]
    pub hex: Option<String>,

    /// Binary bytes (space separated, e.g. '01000001 01110011')
    #[arg(long)]
    pub bin: Option<String>,
}

/// Arguments for the HTTP server
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on (default from settings)
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<String>,
}
