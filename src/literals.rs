use crate::errors::ViewError;

/// Parse hex bytes written continuously (`4142`), space separated (`41 42`)
/// or with per-byte prefixes (`0x41 0x42`).
///
/// Every `0x`/`0X` and all whitespace is removed before decoding. An odd
/// number of digits gets an implicit leading zero nibble, so `413` reads as
/// `04 13`. The result is raw bytes and need not be valid UTF-8.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, ViewError> {
    let mut clean: String = input
        .replace("0x", "")
        .replace("0X", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if clean.len() % 2 != 0 {
        clean.insert(0, '0');
    }

    Ok(hex::decode(&clean)?)
}

/// Render bytes as continuous uppercase hex, the inverse of [`decode_hex`].
pub fn to_hex_string(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Parse whitespace separated binary chunks, one byte per chunk.
///
/// Chunks do not need to be padded (`1` is byte 1), but may not be longer
/// than 8 digits.
pub fn decode_binary(input: &str) -> Result<Vec<u8>, ViewError> {
    let chunks: Vec<&str> = input.split_whitespace().collect();
    if chunks.is_empty() {
        return Err(ViewError::EmptyInput("binary input"));
    }

    chunks
        .into_iter()
        .map(|chunk| {
            if chunk.len() > 8 {
                return Err(ViewError::ChunkTooLong {
                    chunk: chunk.to_string(),
                });
            }
            // from_str_radix tolerates a leading '+', plain digits only here
            if !chunk.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(ViewError::InvalidBinaryChunk {
                    chunk: chunk.to_string(),
                });
            }
            u8::from_str_radix(chunk, 2).map_err(|_| ViewError::InvalidBinaryChunk {
                chunk: chunk.to_string(),
            })
        })
        .collect()
}
