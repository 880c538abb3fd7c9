#![forbid(unsafe_code)]

pub mod decode;
pub mod digit;
pub mod error;

// Re-exports: stable API surface
pub use decode::{
    decode, decode_array, decode_exact, decode_exact_bytes, try_decode, try_decode_bytes,
};
pub use digit::{INVALID_HEX_DIGIT, parse_hex_digit};
pub use error::{DecodeError, HexError, Result};
