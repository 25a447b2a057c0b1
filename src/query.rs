//! Query value normalization.
//!
//! Turns a caller-supplied query into the byte needle searched for in the
//! pattern: either a literal 2/4/8-character string taken as raw bytes, or
//! a `0x`-prefixed hex value re-encoded in little-endian byte order, which
//! is how a clobbered return address or register reads back on x86.

use crate::error::{Error, Result};

/// Normalize a query value into the byte sequence to search for.
///
/// `0x`-prefixed values must carry exactly 4, 8, or 16 hex digits and are
/// decoded as base-16, then re-encoded little-endian into 2, 4, or 8
/// bytes. Plain strings must be exactly 2, 4, or 8 characters and are
/// taken as raw bytes, one byte per character.
pub fn normalize(value: &str) -> Result<Vec<u8>> {
    if let Some(digits) = value.strip_prefix("0x") {
        return decode_hex(value, digits);
    }
    match value.len() {
        2 | 4 | 8 => Ok(value.as_bytes().to_vec()),
        _ => Err(Error::InvalidValueLength),
    }
}

/// Decode hex digits and re-encode them in little-endian byte order.
fn decode_hex(literal: &str, digits: &str) -> Result<Vec<u8>> {
    if !matches!(digits.len(), 4 | 8 | 16) {
        return Err(Error::InvalidHexLength);
    }

    // from_str_radix accepts a leading sign, which is not valid hex here.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexValue(literal.to_string()));
    }
    let parsed = u64::from_str_radix(digits, 16)
        .map_err(|_| Error::InvalidHexValue(literal.to_string()))?;

    let bytes = match digits.len() {
        4 => (parsed as u16).to_le_bytes().to_vec(),
        8 => (parsed as u32).to_le_bytes().to_vec(),
        _ => parsed.to_le_bytes().to_vec(),
    };
    Ok(bytes)
}
