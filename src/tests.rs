use crate::{
    AnalysisRow, InputMode, ViewError, analyse, build_from_bytes, build_from_code_points,
    decode_binary, decode_hex, resolve_input, to_hex_string, tokenize,
};

fn decimal_tokens(text: &str) -> Vec<String> {
    text.chars().map(|c| u32::from(c).to_string()).collect()
}

#[test]
fn test_row_count_matches_scalar_count() {
    for text in ["A", "Ada Lovelace", "na\u{EF}ve", "\u{1F642}\u{1F642}", "e\u{301}"] {
        assert_eq!(analyse(text).unwrap().len(), text.chars().count(), "{text:?}");
    }
}

#[test]
fn test_byte_lists_are_aligned() {
    let samples = [
        '\0', 'A', '\u{7F}', '\u{80}', '\u{E9}', '\u{7FF}', '\u{800}', '\u{FFFF}', '\u{10000}',
        '\u{10FFFF}',
    ];
    for c in samples {
        let row = AnalysisRow::from_char(c);
        assert_eq!(row.utf8_bytes_hex.len(), c.len_utf8());
        assert_eq!(row.utf8_bytes_dec.len(), c.len_utf8());
        assert_eq!(row.utf8_bytes_binary.len(), c.len_utf8());

        let mut buf = [0u8; 4];
        for (i, byte) in c.encode_utf8(&mut buf).bytes().enumerate() {
            assert_eq!(row.utf8_bytes_hex[i], format!("0x{:02X}", byte));
            assert_eq!(row.utf8_bytes_dec[i], byte.to_string());
            assert_eq!(u8::from_str_radix(&row.utf8_bytes_binary[i], 2).unwrap(), byte);
        }
    }
}

#[test]
fn test_code_points_round_trip() {
    let text = "Zo\u{EB} \u{0908}\u{1F642}";
    let tokens = decimal_tokens(text);
    assert_eq!(build_from_code_points(&tokens).unwrap(), text);
}

#[test]
fn test_analysis_survives_reverse_bytes() {
    let text = "Ada \u{1F60A}";
    let tokens: Vec<String> = analyse(text)
        .unwrap()
        .into_iter()
        .flat_map(|row| row.utf8_bytes_hex)
        .collect();

    let rebuilt = build_from_bytes(&tokens).unwrap();
    assert_eq!(rebuilt, text.as_bytes());
    assert_eq!(
        analyse(std::str::from_utf8(&rebuilt).unwrap()).unwrap(),
        analyse(text).unwrap()
    );
}

#[test]
fn test_binary_rows_feed_decode_binary() {
    let text = "\u{0908}";
    let bits = analyse(text).unwrap()[0].utf8_bytes_binary.join(" ");
    assert_eq!(decode_binary(&bits).unwrap(), text.as_bytes());
}

#[test]
fn test_hex_round_trip() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(decode_hex(&to_hex_string(&data)).unwrap(), data);
}

#[test]
fn test_reverse_modes_resolve_to_same_text() {
    let from_cp = resolve_input(InputMode::CodePoints, "U+0041, 0x42; 0b1000011").unwrap();
    let from_bytes = resolve_input(InputMode::Bytes, "65 0x42 0b01000011").unwrap();
    assert_eq!(from_cp.text, "ABC");
    assert_eq!(from_bytes.text, "ABC");
}

#[test]
fn test_documented_failures() {
    assert_eq!(analyse(""), Err(ViewError::EmptyInput("input string")));
    assert!(decode_binary("2").is_err());
    assert!(matches!(
        build_from_code_points(&tokenize("not-a-number")),
        Err(ViewError::InvalidToken { .. })
    ));
    assert!(matches!(
        build_from_bytes(&tokenize("999")),
        Err(ViewError::ByteRange { .. })
    ));
}
