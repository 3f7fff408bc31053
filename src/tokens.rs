use crate::errors::ViewError;

/// Split free-form input into value tokens on whitespace, `,` and `;`.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Build text from code point tokens such as `U+0041`, `0x42`, `0b1000011`
/// or `68`.
///
/// Surrogates (`U+D800`..=`U+DFFF`) are in range but are not scalar values;
/// they come out as U+FFFD.
pub fn build_from_code_points<S: AsRef<str>>(tokens: &[S]) -> Result<String, ViewError> {
    let mut text = String::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        let value = parse_numeric_token(token, true)?;
        if !(0..=0x10FFFF).contains(&value) {
            return Err(ViewError::CodePointRange {
                value,
                token: token.to_string(),
            });
        }

        let c = char::from_u32(value as u32).unwrap_or_else(|| {
            tracing::warn!(token, "surrogate code point replaced with U+FFFD");
            char::REPLACEMENT_CHARACTER
        });
        text.push(c);
    }

    Ok(text)
}

/// Build raw bytes from byte tokens such as `0x41`, `0b01100010` or `99`.
///
/// `U+` is not a byte prefix; such tokens fail to parse.
pub fn build_from_bytes<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>, ViewError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let value = parse_numeric_token(token, false)?;
            u8::try_from(value).map_err(|_| ViewError::ByteRange {
                value,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse one token, choosing the base from its prefix.
///
/// Priority: `U+` (only when `allow_code_point` is set), then `0x`, then `0b`,
/// then signed decimal.
fn parse_numeric_token(token: &str, allow_code_point: bool) -> Result<i64, ViewError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ViewError::invalid_token(token, None));
    }

    let (digits, radix) = match token.get(..2) {
        Some(prefix) if allow_code_point && prefix.eq_ignore_ascii_case("U+") => {
            (&token[2..], 16)
        }
        Some("0x" | "0X") => (&token[2..], 16),
        Some("0b" | "0B") => (&token[2..], 2),
        _ => (token, 10),
    };

    i64::from_str_radix(digits, radix).map_err(|e| ViewError::invalid_token(token, Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(
            tokenize("U+0041, U+0042;0x0043 68"),
            vec!["U+0041", "U+0042", "0x0043", "68"]
        );
    }

    #[test]
    fn test_tokenize_drops_empty_fragments() {
        assert_eq!(tokenize(" ,;\t\n 1,,2 ;; "), vec!["1", "2"]);
        assert!(tokenize(" , ; ").is_empty());
    }

    #[test]
    fn test_build_from_code_points() {
        assert_eq!(
            build_from_code_points(&["U+0041", "0x0042", "67"]).unwrap(),
            "ABC"
        );
        assert_eq!(build_from_code_points(&["u+1f642"]).unwrap(), "\u{1F642}");
        assert_eq!(build_from_code_points(&["0b1000001"]).unwrap(), "A");
    }

    #[test]
    fn test_build_from_code_points_range() {
        assert!(matches!(
            build_from_code_points(&["0x110000"]),
            Err(ViewError::CodePointRange { value: 0x110000, .. })
        ));
        assert!(matches!(
            build_from_code_points(&["-1"]),
            Err(ViewError::CodePointRange { value: -1, .. })
        ));
        assert_eq!(
            build_from_code_points(&["U+10FFFF"]).unwrap(),
            "\u{10FFFF}"
        );
    }

    #[test]
    fn test_build_from_code_points_surrogate_becomes_replacement() {
        assert_eq!(build_from_code_points(&["U+D800"]).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_build_from_code_points_invalid_token() {
        assert!(matches!(
            build_from_code_points(&["not-a-number"]),
            Err(ViewError::InvalidToken { .. })
        ));
        assert!(matches!(
            build_from_code_points(&["0x"]),
            Err(ViewError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_build_from_bytes() {
        assert_eq!(
            build_from_bytes(&["0x41", "0b01100010", "99"]).unwrap(),
            b"Abc".to_vec()
        );
        assert_eq!(
            build_from_bytes(&["0xF0", "0x9F", "0x98", "0x8A"]).unwrap(),
            "\u{1F60A}".as_bytes()
        );
    }

    #[test]
    fn test_build_from_bytes_range() {
        assert!(matches!(
            build_from_bytes(&["999"]),
            Err(ViewError::ByteRange { value: 999, .. })
        ));
        assert!(matches!(
            build_from_bytes(&["-1"]),
            Err(ViewError::ByteRange { value: -1, .. })
        ));
    }

    #[test]
    fn test_build_from_bytes_ignores_code_point_prefix() {
        assert!(matches!(
            build_from_bytes(&["U+0041"]),
            Err(ViewError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(
            build_from_bytes(&[" "]),
            Err(ViewError::InvalidToken {
                token: String::new(),
                source: None
            })
        );
    }
}
