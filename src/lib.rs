//! Byte-level views of text.
//!
//! `name-viz` walks a string one Unicode scalar at a time and reports how each
//! one is stored: its code point, its UTF-8 bytes in hex, decimal and binary,
//! and its HTML numeric entities. It also goes the other way, rebuilding text
//! from hex literals, binary literals, byte tokens or code point tokens.
//!
//! # Example
//!
//! ```
//! use name_viz::{analyse, build_from_code_points, tokenize};
//!
//! let rows = analyse("Hi").unwrap();
//! assert_eq!(rows[0].code_point_hex, "U+0048");
//!
//! let text = build_from_code_points(&tokenize("U+0041, 0x42; 67")).unwrap();
//! assert_eq!(text, "ABC");
//! ```

mod analysis;
mod config;
mod errors;
mod literals;
mod mode;
mod render;
mod tokens;

pub mod echo;
pub mod server;

pub use analysis::{AnalysisRow, analyse, quote_char};
pub use config::{ColorChoice, Settings};
pub use errors::{ViewError, should_use_color};
pub use literals::{decode_binary, decode_hex, to_hex_string};
pub use mode::{InputMode, Resolved, resolve_input, resolve_labelled};
pub use render::{
    CSV_HEADER, DecodedText, Visualisation, render_csv, render_json, render_table,
};
pub use tokens::{build_from_bytes, build_from_code_points, tokenize};

#[cfg(test)]
mod tests;
