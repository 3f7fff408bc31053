use std::fmt;
use std::num::ParseIntError;

/// Errors raised while analysing, decoding or rebuilding text.
///
/// Every variant is a terminal input-validation failure for one call.
/// The `Display` output is plain text so adapters can relay it verbatim.
#[derive(Debug, PartialEq)]
pub enum ViewError {
    /// Nothing to work on; the label names what was empty
    EmptyInput(&'static str),
    /// The hex literal contained something other than hex digits
    InvalidHex(hex::FromHexError),
    /// A binary chunk is not an unsigned base-2 number
    InvalidBinaryChunk { chunk: String },
    /// A binary chunk has more than 8 digits
    ChunkTooLong { chunk: String },
    /// A numeric token was empty or failed to parse in its base
    InvalidToken {
        token: String,
        source: Option<ParseIntError>,
    },
    /// A code point token is outside `0..=0x10FFFF`
    CodePointRange { value: i64, token: String },
    /// A byte token is outside `0..=255`
    ByteRange { value: i64, token: String },
    /// A reverse mode was requested but the input held no tokens
    MissingValues(&'static str),
    /// The reverse mode name is not recognised
    UnknownMode(String),
    /// The download format is neither json nor csv
    UnsupportedFormat(String),
}

impl ViewError {
    pub(crate) fn invalid_token(token: &str, source: Option<ParseIntError>) -> Self {
        ViewError::InvalidToken {
            token: token.to_string(),
            source,
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::EmptyInput(what) => write!(f, "{} is empty", what),
            ViewError::InvalidHex(e) => write!(f, "invalid hex input: {}", e),
            ViewError::InvalidBinaryChunk { chunk } => {
                write!(f, "invalid binary chunk {:?}", chunk)
            }
            ViewError::ChunkTooLong { chunk } => {
                write!(f, "binary chunk {:?} is longer than 8 bits", chunk)
            }
            ViewError::InvalidToken { token, source } => match source {
                _ if token.is_empty() => write!(f, "empty numeric token"),
                Some(e) => write!(f, "invalid numeric token {:?}: {}", token, e),
                None => write!(f, "invalid numeric token {:?}", token),
            },
            ViewError::CodePointRange { value, token } => {
                write!(f, "code point {} out of range for token {:?}", value, token)
            }
            ViewError::ByteRange { value, token } => {
                write!(f, "byte {} out of range for token {:?}", value, token)
            }
            ViewError::MissingValues(what) => write!(f, "{} values required", what),
            ViewError::UnknownMode(mode) => {
                write!(f, "unknown mode {:?} (use text, codepoints, bytes)", mode)
            }
            ViewError::UnsupportedFormat(_) => write!(f, "unsupported format"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::InvalidHex(e) => Some(e),
            ViewError::InvalidToken {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for ViewError {
    fn from(e: hex::FromHexError) -> Self {
        ViewError::InvalidHex(e)
    }
}

/// Check if colored output should be used on a stream
pub fn should_use_color(is_terminal: bool) -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    is_terminal
}
