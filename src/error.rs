use thiserror::Error;

/// Errors raised while preparing a bit sequence for the FIPS 140-3 battery.
///
/// A statistical test that fails is not an error: it is reported through
/// [`crate::TestOutcome::passed`].
#[derive(Debug, Error)]
pub enum KeyTestError {
    #[error("expected the input to be {expected} bits long, but got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("binary string contains prohibited symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("invalid hexadecimal key: {0}")]
    InvalidHex(String),

    #[error("invalid base64 key: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, KeyTestError>;
