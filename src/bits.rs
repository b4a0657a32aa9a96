//! Bit-sequence validation and key decoders.
//!
//! The battery operates on ASCII strings of exactly [`SEQUENCE_LENGTH`]
//! `'0'`/`'1'` characters. Keys arrive as hexadecimal (the usual form for
//! a generated key), base64, or an already-expanded binary string.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::error::{KeyTestError, Result};

/// Number of bits every FIPS 140-3 test consumes.
pub const SEQUENCE_LENGTH: usize = 20_000;

/// A validated, borrowed sequence of exactly [`SEQUENCE_LENGTH`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSequence<'a> {
    binary: &'a str,
}

impl<'a> BitSequence<'a> {
    /// Validate `binary` and borrow it as a bit sequence.
    pub fn parse(binary: &'a str) -> Result<Self> {
        validate_binary(binary)?;
        Ok(Self { binary })
    }

    pub fn len(&self) -> usize {
        self.binary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binary.is_empty()
    }

    /// Bits in order, `true` for `'1'`.
    pub fn iter(&self) -> impl Iterator<Item = bool> + 'a {
        self.binary.bytes().map(|b| b == b'1')
    }
}

/// Check that `binary` holds exactly [`SEQUENCE_LENGTH`] characters, each
/// `'0'` or `'1'`.
pub fn validate_binary(binary: &str) -> Result<()> {
    let length = binary.chars().count();
    if length != SEQUENCE_LENGTH {
        warn!(
            "Rejected bit sequence: expected {} bits, got {}",
            SEQUENCE_LENGTH, length
        );
        return Err(KeyTestError::InvalidLength {
            expected: SEQUENCE_LENGTH,
            actual: length,
        });
    }

    if let Some((position, symbol)) = binary
        .chars()
        .enumerate()
        .find(|&(_, c)| c != '0' && c != '1')
    {
        warn!(
            "Rejected bit sequence: symbol {:?} at position {}",
            symbol, position
        );
        return Err(KeyTestError::InvalidSymbol { position, symbol });
    }

    Ok(())
}

/// Expand a hexadecimal key into its binary string.
///
/// Every hex digit contributes four bits, leading zero digits included, so
/// a 5000-digit key always expands to 20000 bits. An optional `0x` prefix
/// and surrounding whitespace are ignored.
pub fn bits_from_hex(key: &str) -> Result<String> {
    let trimmed = key.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(KeyTestError::InvalidHex("key is empty".to_string()));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(KeyTestError::InvalidHex(format!(
            "unexpected character {:?}",
            c
        )));
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| KeyTestError::InvalidHex("could not parse key".to_string()))?;
    let binary = format!("{:0width$b}", value, width = digits.len() * 4);

    debug!(
        "Expanded {} hex digits into {} bits",
        digits.len(),
        binary.len()
    );
    Ok(binary)
}

/// Decode a standard base64 key, rendering each byte MSB first.
pub fn bits_from_base64(data: &str) -> Result<String> {
    let bytes = STANDARD.decode(data.trim())?;
    let binary: String = bytes.iter().map(|b| format!("{:08b}", b)).collect();

    debug!("Decoded {} bytes into {} bits", bytes.len(), binary.len());
    Ok(binary)
}
