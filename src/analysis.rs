use crate::errors::ViewError;
use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// How a single Unicode scalar value is represented.
///
/// The three byte lists always have the same length and describe the same
/// UTF-8 bytes, position by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    /// The scalar in single quotes, e.g. `'A'`; see [`quote_char`]
    #[serde(rename = "Character")]
    pub character: String,
    /// `U+XXXX`, at least four uppercase hex digits
    #[serde(rename = "CodePointHex")]
    pub code_point_hex: String,
    #[serde(rename = "CodePointDec")]
    pub code_point_dec: u32,
    /// Each UTF-8 byte as `0xHH`
    #[serde(rename = "UTF8BytesHex")]
    pub utf8_bytes_hex: Vec<String>,
    #[serde(rename = "UTF8BytesDec")]
    pub utf8_bytes_dec: Vec<String>,
    /// Each UTF-8 byte as eight binary digits
    #[serde(rename = "UTF8BytesBinary")]
    pub utf8_bytes_binary: Vec<String>,
    #[serde(rename = "HTMLEntityDecimal")]
    pub html_entity_decimal: String,
    #[serde(rename = "HTMLEntityHex")]
    pub html_entity_hex: String,
}

impl AnalysisRow {
    /// Describe one scalar value.
    pub fn from_char(c: char) -> Self {
        let mut buf = [0u8; 4];
        let bytes = c.encode_utf8(&mut buf).as_bytes();
        let code_point = u32::from(c);

        AnalysisRow {
            character: quote_char(c),
            code_point_hex: format!("U+{:04X}", code_point),
            code_point_dec: code_point,
            utf8_bytes_hex: bytes.iter().map(|b| format!("0x{:02X}", b)).collect(),
            utf8_bytes_dec: bytes.iter().map(|b| b.to_string()).collect(),
            utf8_bytes_binary: bytes.iter().map(|b| format!("{:08b}", b)).collect(),
            html_entity_decimal: format!("&#{};", code_point),
            html_entity_hex: format!("&#x{:04X};", code_point),
        }
    }

    /// Number of bytes the scalar occupies in UTF-8.
    pub fn byte_len(&self) -> usize {
        self.utf8_bytes_hex.len()
    }
}

/// Quote `c` as a character literal.
///
/// Printable scalars (letters, marks, numbers, punctuation, symbols and the
/// ASCII space) appear as-is. Everything else is escaped: `\n`-style for the
/// usual controls, `\xHH` for other ASCII controls, then `\uHHHH` or
/// `\UHHHHHHHH` in lowercase hex.
pub fn quote_char(c: char) -> String {
    let inner = match c {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        c if is_printable(c) => c.to_string(),
        '\x07' => "\\a".to_string(),
        '\x08' => "\\b".to_string(),
        '\x0C' => "\\f".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\x0B' => "\\v".to_string(),
        c if c < ' ' || c == '\x7F' => format!("\\x{:02x}", u32::from(c)),
        c if u32::from(c) < 0x10000 => format!("\\u{:04x}", u32::from(c)),
        c => format!("\\U{:08x}", u32::from(c)),
    };
    format!("'{}'", inner)
}

fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Separator | GeneralCategoryGroup::Other
        )
}

/// Walk every scalar in `input` and describe how it is stored.
///
/// Rows come back in input order, one per `char`.
pub fn analyse(input: &str) -> Result<Vec<AnalysisRow>, ViewError> {
    if input.is_empty() {
        return Err(ViewError::EmptyInput("input string"));
    }

    Ok(input.chars().map(AnalysisRow::from_char).collect())
}
