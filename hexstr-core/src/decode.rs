use crate::digit::{INVALID_HEX_DIGIT, parse_hex_digit};
use crate::error::{DecodeError, HexError, Result};

/// Decodes `text` into bytes. `None` means the input was malformed;
/// empty input yields `Some(vec![])`.
pub fn decode(text: &str) -> Option<Vec<u8>> {
    try_decode(text).ok()
}

/// Like [`decode`], but reports which check rejected the input.
pub fn try_decode(text: &str) -> std::result::Result<Vec<u8>, DecodeError> {
    try_decode_bytes(text.as_bytes())
}

/// Decodes raw digit bytes, which need not be valid UTF-8.
///
/// Length is checked before any byte is looked at. Nothing decoded
/// ahead of a bad pair is returned.
pub fn try_decode_bytes(digits: &[u8]) -> std::result::Result<Vec<u8>, DecodeError> {
    if digits.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: digits.len() });
    }

    let mut out = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        let value = (parse_hex_digit(pair[0]) << 4) | parse_hex_digit(pair[1]);
        let byte = u8::try_from(value).map_err(|_| invalid_digit(i * 2, pair))?;
        out.push(byte);
    }
    Ok(out)
}

// Only called once the pair is known to hold a bad digit.
fn invalid_digit(index: usize, pair: &[u8]) -> DecodeError {
    if parse_hex_digit(pair[0]) != INVALID_HEX_DIGIT {
        DecodeError::InvalidDigit {
            index: index + 1,
            byte: pair[1],
        }
    } else {
        DecodeError::InvalidDigit {
            index,
            byte: pair[0],
        }
    }
}

/// Decodes `text` and requires exactly `len` bytes out.
pub fn decode_exact(text: &str, len: usize) -> Result<Vec<u8>> {
    decode_exact_bytes(text.as_bytes(), len)
}

pub fn decode_exact_bytes(digits: &[u8], len: usize) -> Result<Vec<u8>> {
    let bytes = try_decode_bytes(digits)?;
    if bytes.len() != len {
        return Err(HexError::Length {
            expected: len,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Fixed-size form of [`decode_exact`], for keys, salts and digests.
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    let bytes = decode_exact(text, N)?;
    out.copy_from_slice(&bytes);
    Ok(out)
}
