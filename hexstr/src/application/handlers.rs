use std::io::{Read, Write};
use std::path::PathBuf;

use hexstr_core::error::{HexError, Result};
use hexstr_core::{DecodeError, decode_exact_bytes, try_decode_bytes};

/// Argument text goes through verbatim; stdin only loses its line ending.
/// Stdin is not required to be UTF-8, so every byte reaches the decoder.
fn hex_input(arg: Option<String>) -> Result<Vec<u8>> {
    if let Some(text) = arg {
        return Ok(text.into_bytes());
    }
    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(buf)
}

// The message itself is printed once by main.
fn rejected(err: HexError) -> HexError {
    let kind = match &err {
        HexError::Decode(DecodeError::OddLength { .. }) => "odd_length",
        HexError::Decode(DecodeError::InvalidDigit { .. }) => "invalid_digit",
        HexError::Length { .. } => "length",
        HexError::Io(_) => "io",
    };
    tracing::warn!(kind, "hex input rejected");
    err
}

pub fn handle_decode(hex: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let digits = hex_input(hex)?;
    let bytes = try_decode_bytes(&digits).map_err(|e| rejected(e.into()))?;
    tracing::debug!(chars = digits.len(), bytes = bytes.len(), "decoded");

    match out {
        Some(path) => std::fs::write(&path, &bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn handle_check(hex: Option<String>, len: Option<usize>) -> Result<()> {
    let digits = hex_input(hex)?;
    let bytes = match len {
        Some(n) => decode_exact_bytes(&digits, n),
        None => try_decode_bytes(&digits).map_err(HexError::from),
    }
    .map_err(rejected)?;
    println!("ok: {} bytes", bytes.len());
    Ok(())
}

pub fn handle_encode(input: Option<PathBuf>) -> Result<()> {
    let bytes = match input {
        Some(path) => std::fs::read(&path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = bytes.len(), "encoding");
    println!("{}", hex::encode(&bytes));
    Ok(())
}
