#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fipskeytest::SEQUENCE_LENGTH;

/// Seed whose sequence passes all four tests.
pub const PASSING_SEED: u64 = 42;

/// Passing seed whose hex form starts with a `0` digit.
pub const LEADING_ZERO_SEED: u64 = 0x5EED;

/// Deterministic 20000-bit sequence from a splitmix64 stream, MSB first.
pub fn splitmix_bits(seed: u64) -> String {
    let mut state = seed;
    let mut bits = String::with_capacity(SEQUENCE_LENGTH);
    while bits.len() < SEQUENCE_LENGTH {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        for i in (0..64).rev() {
            if bits.len() == SEQUENCE_LENGTH {
                break;
            }
            bits.push(if (z >> i) & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

pub fn to_hex(bits: &str) -> String {
    bits.as_bytes()
        .chunks(4)
        .map(|nibble| {
            let value = nibble.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b - b'0'));
            std::char::from_digit(value, 16).unwrap_or('?')
        })
        .collect()
}

pub fn to_base64(bits: &str) -> String {
    let bytes: Vec<u8> = bits
        .as_bytes()
        .chunks(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | (b - b'0')))
        .collect();
    STANDARD.encode(bytes)
}
