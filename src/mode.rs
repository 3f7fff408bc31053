use crate::errors::ViewError;
use crate::render::DecodedText;
use crate::tokens::{build_from_bytes, build_from_code_points, tokenize};
use std::fmt;
use std::str::FromStr;

/// How raw input should be read before it is analysed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Use the input as-is
    #[default]
    Text,
    /// Input is a list of code point tokens
    CodePoints,
    /// Input is a list of byte tokens
    Bytes,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::CodePoints => "codepoints",
            InputMode::Bytes => "bytes",
        }
    }
}

impl FromStr for InputMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "text" => Ok(InputMode::Text),
            "codepoint" | "codepoints" | "cp" => Ok(InputMode::CodePoints),
            "byte" | "bytes" => Ok(InputMode::Bytes),
            _ => Err(ViewError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text ready for analysis, plus what happened on the way there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    /// Set when the text was rebuilt from tokens
    pub note: Option<String>,
    /// Set when rebuilt bytes were not valid UTF-8
    pub warning: Option<String>,
}

/// Turn user input into the text to analyse.
pub fn resolve_input(mode: InputMode, input: &str) -> Result<Resolved, ViewError> {
    resolve_with_label(mode, mode.as_str(), input)
}

/// Like [`resolve_input`], with the mode given as the user typed it.
///
/// The note repeats `label` verbatim, so `cp` stays `cp` rather than
/// becoming `codepoints`.
pub fn resolve_labelled(label: &str, input: &str) -> Result<Resolved, ViewError> {
    resolve_with_label(label.parse()?, label, input)
}

fn resolve_with_label(mode: InputMode, label: &str, input: &str) -> Result<Resolved, ViewError> {
    let note = Some(format!("built from {}: {}", label, input.trim()));

    match mode {
        InputMode::Text => Ok(Resolved {
            text: input.to_string(),
            note: None,
            warning: None,
        }),
        InputMode::CodePoints => {
            let tokens = require_tokens(input, "code point")?;
            Ok(Resolved {
                text: build_from_code_points(&tokens)?,
                note,
                warning: None,
            })
        }
        InputMode::Bytes => {
            let tokens = require_tokens(input, "byte")?;
            let bytes = build_from_bytes(&tokens)?;
            let warning = DecodedText::from_bytes(&bytes).warning().map(str::to_string);
            if warning.is_some() {
                tracing::debug!(bytes = bytes.len(), "rebuilt bytes are not valid UTF-8");
            }
            Ok(Resolved {
                text: replace_invalid_bytes(&bytes),
                note,
                warning,
            })
        }
    }
}

/// Decode `bytes` as UTF-8 with one U+FFFD for every byte that is not part of
/// a valid sequence.
///
/// A truncated four-byte sequence becomes three replacement characters, not
/// the single one `String::from_utf8_lossy` would give.
fn replace_invalid_bytes(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                // None means the input ended mid-sequence
                let bad = e.error_len().unwrap_or(rest.len());
                out.extend(std::iter::repeat_n(char::REPLACEMENT_CHARACTER, bad));
                bytes = &rest[bad..];
            }
        }
    }
}

fn require_tokens<'a>(input: &'a str, what: &'static str) -> Result<Vec<&'a str>, ViewError> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(ViewError::MissingValues(what));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_aliases() {
        assert_eq!("".parse::<InputMode>().unwrap(), InputMode::Text);
        assert_eq!("TEXT".parse::<InputMode>().unwrap(), InputMode::Text);
        assert_eq!("cp".parse::<InputMode>().unwrap(), InputMode::CodePoints);
        assert_eq!(
            " CodePoint ".parse::<InputMode>().unwrap(),
            InputMode::CodePoints
        );
        assert_eq!("byte".parse::<InputMode>().unwrap(), InputMode::Bytes);
        assert!(matches!(
            "unknown".parse::<InputMode>(),
            Err(ViewError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_resolve_text_passes_through() {
        let resolved = resolve_input(InputMode::Text, "Ada Lovelace").unwrap();
        assert_eq!(resolved.text, "Ada Lovelace");
        assert_eq!(resolved.note, None);
    }

    #[test]
    fn test_resolve_code_points() {
        let resolved = resolve_input(InputMode::CodePoints, "U+0041 0x0042 67").unwrap();
        assert_eq!(resolved.text, "ABC");
        assert_eq!(
            resolved.note.as_deref(),
            Some("built from codepoints: U+0041 0x0042 67")
        );
    }

    #[test]
    fn test_resolve_bytes() {
        let resolved = resolve_input(InputMode::Bytes, "0xF0 0x9F 0x98 0x8A").unwrap();
        assert_eq!(resolved.text, "\u{1F60A}");
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn test_resolve_invalid_bytes_warns() {
        let resolved = resolve_input(InputMode::Bytes, "0x41 0xFF").unwrap();
        assert_eq!(resolved.text, "A\u{FFFD}");
        assert!(resolved.warning.is_some());
    }

    #[test]
    fn test_truncated_sequence_keeps_one_row_per_byte() {
        let resolved = resolve_input(InputMode::Bytes, "0xF0 0x9F 0x98 0x41").unwrap();
        assert_eq!(resolved.text, "\u{FFFD}\u{FFFD}\u{FFFD}A");
        assert!(resolved.warning.is_some());
        assert_eq!(crate::analyse(&resolved.text).unwrap().len(), 4);
    }

    #[test]
    fn test_replace_invalid_bytes() {
        assert_eq!(replace_invalid_bytes(b"Ada"), "Ada");
        assert_eq!(replace_invalid_bytes(&[0xE0, 0xA4]), "\u{FFFD}\u{FFFD}");
        assert_eq!(
            replace_invalid_bytes(&[0xED, 0xA0, 0x80, 0x42]),
            "\u{FFFD}\u{FFFD}\u{FFFD}B"
        );
        assert_eq!(
            replace_invalid_bytes(&[0xFF, 0xE0, 0xA4, 0x88]),
            "\u{FFFD}\u{0908}"
        );
    }

    #[test]
    fn test_labelled_note_echoes_mode_as_typed() {
        let resolved = resolve_labelled("cp", "U+0041").unwrap();
        assert_eq!(resolved.text, "A");
        assert_eq!(resolved.note.as_deref(), Some("built from cp: U+0041"));

        let resolved = resolve_labelled("Bytes", "0x42").unwrap();
        assert_eq!(resolved.note.as_deref(), Some("built from Bytes: 0x42"));

        assert!(matches!(
            resolve_labelled("words", "1 2"),
            Err(ViewError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_resolve_requires_tokens() {
        assert_eq!(
            resolve_input(InputMode::Bytes, " ; , "),
            Err(ViewError::MissingValues("byte"))
        );
        assert_eq!(
            resolve_input(InputMode::CodePoints, ""),
            Err(ViewError::MissingValues("code point"))
        );
    }
}
