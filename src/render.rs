//! Shared output formats for analysis rows and decoded bytes.
//!
//! The CLI and the HTTP service both render through here so a table, a JSON
//! download and a CSV download always agree on field order and naming.

use crate::analysis::AnalysisRow;
use crate::mode::Resolved;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const TABLE_HEADER: &str = "Letter           Code Point (dec)  Code Point (hex)  HTML Entity (dec)  HTML Entity (hex)  UTF-8 Hex Bytes        UTF-8 Dec Bytes        Binary Bytes";
const TABLE_DIVIDER: &str = "--------------  -----------------  ----------------  ------------------  ------------------  --------------------  ---------------------  ------------------------------";

/// Column names used for CSV output, in column order.
pub const CSV_HEADER: [&str; 8] = [
    "Character",
    "CodePointHex",
    "CodePointDec",
    "UTF8BytesHex",
    "UTF8BytesDec",
    "UTF8BytesBinary",
    "HTMLEntityDecimal",
    "HTMLEntityHex",
];

const INVALID_UTF8_WARNING: &str = "byte sequence is not valid UTF-8, showing best effort:";

/// Envelope for JSON output: `{"items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualisation {
    pub items: Vec<AnalysisRow>,
}

/// Decoded bytes prepared for display as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Lossy rendering; invalid sequences become U+FFFD
    pub text: String,
    pub valid_utf8: bool,
    pub byte_count: usize,
}

impl DecodedText {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        DecodedText {
            text: String::from_utf8_lossy(bytes).into_owned(),
            valid_utf8: std::str::from_utf8(bytes).is_ok(),
            byte_count: bytes.len(),
        }
    }

    /// Advisory message when the bytes were not valid UTF-8.
    pub fn warning(&self) -> Option<&'static str> {
        (!self.valid_utf8).then_some(INVALID_UTF8_WARNING)
    }
}

/// Render the per-character table with its introductory lines.
pub fn render_table(resolved: &Resolved, rows: &[AnalysisRow]) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Name: {}", resolved.text);
    if let Some(note) = &resolved.note {
        let _ = writeln!(out, "  ({})", note);
    }
    out.push_str("This is how a computer represents your name byte-by-byte:\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_DIVIDER);
    out.push('\n');

    for row in rows {
        let _ = writeln!(
            out,
            "{:<14}  {:<17}  {:<16}  {:<18}  {:<18}  {:<20}  {:<21}  {}",
            row.character,
            row.code_point_dec,
            row.code_point_hex,
            row.html_entity_decimal,
            row.html_entity_hex,
            row.utf8_bytes_hex.join(" "),
            row.utf8_bytes_dec.join(" "),
            row.utf8_bytes_binary.join(" "),
        );
    }

    out
}

/// Render rows as the `{"items": [...]}` JSON document.
pub fn render_json(rows: &[AnalysisRow]) -> serde_json::Result<String> {
    serde_json::to_string(&Visualisation {
        items: rows.to_vec(),
    })
}

/// Render rows as CSV with a header line.
pub fn render_csv(rows: &[AnalysisRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record(&[
            row.character.clone(),
            row.code_point_hex.clone(),
            row.code_point_dec.to_string(),
            row.utf8_bytes_hex.join(" "),
            row.utf8_bytes_dec.join(" "),
            row.utf8_bytes_binary.join(" "),
            row.html_entity_decimal.clone(),
            row.html_entity_hex.clone(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
