use thiserror::Error;

/// Why a hex string failed to decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed hex: odd length ({len})")]
    OddLength { len: usize },

    #[error("malformed hex: invalid hex digit {byte:#04x} at offset {index}")]
    InvalidDigit { index: usize, byte: u8 },
}

#[derive(Error, Debug)]
pub enum HexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("expected {expected} bytes ({} hex chars), got {actual}", .expected * 2)]
    Length { expected: usize, actual: usize },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, HexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DecodeError::OddLength { len: 3 }.to_string(),
            "malformed hex: odd length (3)"
        );
        assert_eq!(
            DecodeError::InvalidDigit { index: 1, byte: b'z' }.to_string(),
            "malformed hex: invalid hex digit 0x7a at offset 1"
        );
        assert_eq!(
            HexError::Length {
                expected: 32,
                actual: 4
            }
            .to_string(),
            "expected 32 bytes (64 hex chars), got 4"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_cross_threads() {
        assert_send_sync::<DecodeError>();
        assert_send_sync::<HexError>();
    }

    #[test]
    fn decode_error_is_transparent_inside_hex_error() {
        let err: HexError = DecodeError::OddLength { len: 1 }.into();
        assert_eq!(err.to_string(), "malformed hex: odd length (1)");
        assert!(matches!(err, HexError::Decode(DecodeError::OddLength { len: 1 })));
    }
}
