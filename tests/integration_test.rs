mod common;

use common::{splitmix_bits, to_base64, to_hex, LEADING_ZERO_SEED, PASSING_SEED};
use fipskeytest::{
    run_hex_key, validate_key, InputFormat, KeyTestError, Statistic, ValidationRequest,
};

#[test]
fn test_hex_key_passes() {
    let key = to_hex(&splitmix_bits(PASSING_SEED));
    assert_eq!(key.len(), 5_000);

    let result = run_hex_key(&key).unwrap();
    assert!(result.passed);
    assert_eq!(result.longest_run.statistic, Statistic::LongestRun { length: 14 });
}

#[test]
fn test_hex_key_with_leading_zero() {
    let bits = splitmix_bits(LEADING_ZERO_SEED);
    let key = to_hex(&bits);
    assert!(key.starts_with('0'));

    let result = run_hex_key(&key).unwrap();
    assert!(result.passed);
    assert_eq!(
        result.monobit.statistic,
        Statistic::BitCounts {
            ones: 10_038,
            zeros: 9_962
        }
    );
}

#[test]
fn test_hex_key_prefixed_and_uppercase() {
    let key = format!("0x{}", to_hex(&splitmix_bits(PASSING_SEED)).to_uppercase());
    assert!(run_hex_key(&key).unwrap().passed);
}

#[test]
fn test_short_hex_key() {
    let key = to_hex(&splitmix_bits(PASSING_SEED));
    assert!(matches!(
        run_hex_key(&key[..4_096]),
        Err(KeyTestError::InvalidLength {
            expected: 20_000,
            actual: 16_384
        })
    ));
}

#[test]
fn test_validate_key_formats_agree() {
    let bits = splitmix_bits(PASSING_SEED);
    let requests = [
        (to_hex(&bits), InputFormat::Hex),
        (to_base64(&bits), InputFormat::Base64),
        (bits.clone(), InputFormat::Binary),
    ];

    let results: Vec<_> = requests
        .into_iter()
        .map(|(key, input_format)| {
            let response = validate_key(&ValidationRequest { key, input_format });
            assert!(response.valid, "{}", response.message);
            assert_eq!(response.message, "4/4 FIPS 140-3 tests passed");
            response.result.unwrap()
        })
        .collect();

    assert_eq!(results[0], results[1]);
    assert_eq!(results[1], results[2]);
}

#[test]
fn test_validate_key_report() {
    let response = validate_key(&ValidationRequest {
        key: to_hex(&splitmix_bits(PASSING_SEED)),
        input_format: InputFormat::Hex,
    });
    let report = response.report.unwrap();
    assert!(report.contains("FIPS 140-3 success"));
    assert!(report.contains("9989 ones and 10011 zeros."));
    assert!(report.contains("Poker value is 10.5."));
}
