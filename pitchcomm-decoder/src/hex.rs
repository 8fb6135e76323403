//! Hex string normalization
//!
//! Packets are usually copied out of a serial monitor, so the input may carry
//! spaces between bytes and `0x` prefixes on the whole string or on each byte.

use crate::types::{DecoderError, Result};
use ::hex::FromHexError;

/// Parse a hex string with or without spaces and `0x` prefixes into bytes
///
/// All whitespace and every `0x` occurrence are removed first; the remainder
/// must be an even-length run of hex digits.
///
/// # Example
/// ```
/// use pitchcomm_decoder::parse_hex_string;
///
/// assert_eq!(parse_hex_string("0x01 0xFF").unwrap(), vec![0x01, 0xFF]);
/// assert_eq!(parse_hex_string("01ff").unwrap(), vec![0x01, 0xFF]);
/// ```
pub fn parse_hex_string(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let clean = compact.replace("0x", "");

    ::hex::decode(&clean).map_err(|e| match e {
        FromHexError::OddLength => {
            DecoderError::FormatError(format!("odd number of hex digits ({})", clean.len()))
        }
        FromHexError::InvalidHexCharacter { c, index } => DecoderError::FormatError(format!(
            "non-hexadecimal character {:?} at position {}",
            c, index
        )),
        other => DecoderError::FormatError(other.to_string()),
    })
}
