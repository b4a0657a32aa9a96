use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(unused_imports)]
use tracing::{debug, info, warn};

pub mod api;
pub mod battery;
pub mod bits;
pub mod collector;
pub mod config;
pub mod error;
pub mod report;

pub use battery::BatteryResult;
pub use bits::{bits_from_base64, bits_from_hex, validate_binary, BitSequence, SEQUENCE_LENGTH};
pub use collector::{BlockHistogram, CollectedStats, RunHistogram};
pub use error::{KeyTestError, Result};
pub use fips_tests::{longest_run, monobit, poker, series, Statistic, TestOutcome};

/// How the `key` field of a [`ValidationRequest`] is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    #[default]
    Hex,
    Binary,
    Base64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub key: String,
    #[serde(default)]
    pub input_format: InputFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub request_id: Uuid,
    /// True only when the key was analyzed and every test passed.
    pub valid: bool,
    pub message: String,
    pub result: Option<BatteryResult>,
    pub report: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Validate a binary string and run the full FIPS 140-3 battery over it.
pub fn run_battery(binary: &str) -> Result<BatteryResult> {
    let sequence = BitSequence::parse(binary)?;
    Ok(BatteryResult::analyze(&sequence))
}

/// Run the battery over a hexadecimal key. The key must expand to exactly
/// [`SEQUENCE_LENGTH`] bits.
pub fn run_hex_key(key: &str) -> Result<BatteryResult> {
    let binary = bits_from_hex(key)?;
    debug!("Bits received from key: {}", binary.len());
    run_battery(&binary)
}

/// Decode `key` according to `format` into a binary string.
pub fn decode_key(key: &str, format: InputFormat) -> Result<String> {
    match format {
        InputFormat::Hex => bits_from_hex(key),
        InputFormat::Base64 => bits_from_base64(key),
        InputFormat::Binary => Ok(key.trim().to_string()),
    }
}

/// Decode and analyze a request, folding input errors into the response.
pub fn validate_key(request: &ValidationRequest) -> ValidationResponse {
    let request_id = Uuid::new_v4();
    debug!(
        "Starting validation: request_id={}, format={:?}, key_length={}",
        request_id,
        request.input_format,
        request.key.len()
    );

    let analysis = decode_key(&request.key, request.input_format).and_then(|b| run_battery(&b));

    match analysis {
        Ok(result) => {
            let message = format!(
                "{}/4 FIPS 140-3 tests passed",
                result.tests_passed()
            );
            info!(
                "Validation complete: request_id={}, passed={}",
                request_id, result.passed
            );
            ValidationResponse {
                request_id,
                valid: result.passed,
                message,
                report: Some(report::render(&result)),
                result: Some(result),
                analyzed_at: Utc::now(),
            }
        }
        Err(e) => {
            warn!("Rejected key: request_id={}, error={}", request_id, e);
            ValidationResponse {
                request_id,
                valid: false,
                message: e.to_string(),
                result: None,
                report: None,
                analyzed_at: Utc::now(),
            }
        }
    }
}
