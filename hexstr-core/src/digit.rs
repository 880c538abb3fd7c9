/// Marks a character that is not a hex digit. Lies outside both the nibble
/// range and the byte range, so `(hi << 4) | lo >= 256` catches either side.
pub const INVALID_HEX_DIGIT: u16 = 256;

/// Maps one ASCII hex digit (either case) to its nibble value, or
/// [`INVALID_HEX_DIGIT`].
pub fn parse_hex_digit(digit: u8) -> u16 {
    match digit {
        b'0'..=b'9' => u16::from(digit - b'0'),
        b'a'..=b'f' => u16::from(digit - b'a') + 10,
        b'A'..=b'F' => u16::from(digit - b'A') + 10,
        _ => INVALID_HEX_DIGIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_hex_digit() {
        for (i, c) in b"0123456789abcdef".iter().enumerate() {
            assert_eq!(parse_hex_digit(*c), i as u16);
        }
        for (i, c) in b"ABCDEF".iter().enumerate() {
            assert_eq!(parse_hex_digit(*c), 10 + i as u16);
        }
    }

    #[test]
    fn everything_else_is_invalid() {
        let valid = b"0123456789abcdefABCDEF";
        for b in 0..=u8::MAX {
            if !valid.contains(&b) {
                assert_eq!(parse_hex_digit(b), INVALID_HEX_DIGIT, "byte {b:#04x}");
            }
        }
    }

    #[test]
    fn sentinel_dominates_any_pair() {
        for lo in 0..16u16 {
            assert!((INVALID_HEX_DIGIT << 4) | lo >= 256);
            assert!((lo << 4) | INVALID_HEX_DIGIT >= 256);
        }
    }
}
