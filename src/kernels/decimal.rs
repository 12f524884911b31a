//! This module contains the pure, stateless kernel for fixed-point decimal
//! columns.
//!
//! A wire element carries sign, declared precision/scale, and the magnitude
//! as a little-endian base-256 byte array of at most [`MAX_NUMERIC_LEN`]
//! bytes. Decoding accumulates the magnitude (missing high bytes are zero),
//! applies the sign, and divides by `10^scale`; encoding is the exact
//! inverse. Magnitudes beyond ~15 significant decimal digits lose precision
//! in the native `f64` representation; that is best-effort by contract, not
//! an error. A magnitude that does not fit the maximum wire length IS an
//! error, never a silent wrap.

use bytemuck::Zeroable;

use crate::bridge::format::{SqlNumericStruct, MAX_NUMERIC_LEN, NULL_DATA};
use crate::error::BridgeError;
use crate::null_handling::NullPolicy;
use crate::types::{is_na_real, na_real};

/// 2^128: the first magnitude that no longer fits the wire's 16 bytes.
const MAGNITUDE_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Largest integer `f64` represents exactly (2^53); beyond it the decode is
/// best-effort.
const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

//==================================================================================
// 1. Magnitude Codec
//==================================================================================

/// Accumulates a little-endian base-256 magnitude, least-significant byte
/// first. Arrays shorter than [`MAX_NUMERIC_LEN`] are treated as zero-padded
/// in the high bytes; the full 16 bytes cannot overflow the accumulator.
pub(crate) fn magnitude_from_le(bytes: &[u8]) -> u128 {
    let mut padded = [0u8; MAX_NUMERIC_LEN];
    let n = bytes.len().min(MAX_NUMERIC_LEN);
    padded[..n].copy_from_slice(&bytes[..n]);
    u128::from_le_bytes(padded)
}

/// Splits a non-negative integral value into its little-endian base-256
/// representation, or `None` if it needs more than [`MAX_NUMERIC_LEN`] bytes.
pub(crate) fn magnitude_to_le(scaled: f64) -> Option<[u8; MAX_NUMERIC_LEN]> {
    if !scaled.is_finite() || scaled < 0.0 || scaled >= MAGNITUDE_LIMIT {
        return None;
    }
    Some((scaled as u128).to_le_bytes())
}

//==================================================================================
// 2. Inbound
//==================================================================================

/// Decodes `rows` decimal structs into native floating values. The scale
/// embedded in each wire element is authoritative on this path.
pub(crate) fn decode_numerics(
    rows: usize,
    data: &[u8],
    policy: &NullPolicy,
) -> Result<Vec<f64>, BridgeError> {
    let width = std::mem::size_of::<SqlNumericStruct>();
    let need = rows * width;
    if data.len() < need {
        return Err(BridgeError::BufferMismatch(need, data.len()));
    }

    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        if policy.indicator_marks_null(row) {
            out.push(na_real());
            continue;
        }
        let wire: SqlNumericStruct =
            bytemuck::pod_read_unaligned(&data[row * width..(row + 1) * width]);

        let magnitude = magnitude_from_le(&wire.val) as f64;
        if magnitude > EXACT_LIMIT {
            log::debug!(
                "decimal magnitude at row {} exceeds 2^53; decoding is best-effort",
                row
            );
        }
        let unsigned = magnitude / 10f64.powi(i32::from(wire.scale));
        out.push(if wire.sign == 0 { -unsigned } else { unsigned });
    }
    Ok(out)
}

//==================================================================================
// 3. Outbound
//==================================================================================

/// Encodes native floating values into decimal structs carrying the column's
/// declared precision and scale. Returns `(data, indicators, saw_null)`.
pub(crate) fn encode_numerics(
    values: &[f64],
    precision: u8,
    scale: i8,
) -> Result<(Vec<u8>, Vec<i64>, bool), BridgeError> {
    let width = std::mem::size_of::<SqlNumericStruct>();
    let mut data = Vec::with_capacity(values.len() * width);
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;

    for (row, &v) in values.iter().enumerate() {
        if is_na_real(v) {
            saw_null = true;
            data.extend_from_slice(bytemuck::bytes_of(&SqlNumericStruct::zeroed()));
            indicators.push(NULL_DATA);
            continue;
        }
        let scaled = (v.abs() * 10f64.powi(i32::from(scale))).round();
        let val = magnitude_to_le(scaled)
            .ok_or(BridgeError::NumericOverflow { row, value: v })?;
        if scaled > EXACT_LIMIT {
            log::debug!(
                "decimal value at row {} exceeds 2^53 after scaling; encoding is best-effort",
                row
            );
        }
        let wire = SqlNumericStruct {
            precision,
            scale,
            sign: u8::from(v >= 0.0),
            val,
        };
        data.extend_from_slice(bytemuck::bytes_of(&wire));
        indicators.push(width as i64);
    }
    Ok((data, indicators, saw_null))
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(precision: u8, scale: i8, sign: u8, magnitude: u128) -> SqlNumericStruct {
        SqlNumericStruct {
            precision,
            scale,
            sign,
            val: magnitude.to_le_bytes(),
        }
    }

    fn to_buffer(wires: &[SqlNumericStruct]) -> Vec<u8> {
        wires
            .iter()
            .flat_map(|w| bytemuck::bytes_of(w).to_vec())
            .collect()
    }

    #[test]
    fn test_magnitude_accumulates_least_significant_byte_first() {
        // [0x39, 0x30] little-endian is 0x3039 = 12345.
        assert_eq!(magnitude_from_le(&[0x39, 0x30]), 12345);
        // Missing high bytes are zero.
        assert_eq!(magnitude_from_le(&[0x01]), 1);
        assert_eq!(magnitude_from_le(&[]), 0);
    }

    #[test]
    fn test_full_width_magnitude_does_not_overflow() {
        let all_ones = [0xFFu8; MAX_NUMERIC_LEN];
        assert_eq!(magnitude_from_le(&all_ones), u128::MAX);
    }

    #[test]
    fn test_decode_applies_scale_and_sign() {
        let wires = [
            numeric(5, 2, 1, 12345),  // 123.45
            numeric(5, 2, 0, 12345),  // -123.45
            numeric(5, 0, 1, 12345),  // 12345
        ];
        let data = to_buffer(&wires);

        let out = decode_numerics(3, &data, &NullPolicy::NotNull).unwrap();
        assert!((out[0] - 123.45).abs() < f64::EPSILON * 128.0);
        assert!((out[1] + 123.45).abs() < f64::EPSILON * 128.0);
        assert_eq!(out[2], 12345.0);
    }

    #[test]
    fn test_encode_123_45_scale_2_roundtrips_exactly() {
        let (data, indicators, saw_null) = encode_numerics(&[123.45], 5, 2).unwrap();
        assert!(!saw_null);
        assert_eq!(indicators, vec![19]);

        let wire: SqlNumericStruct = bytemuck::pod_read_unaligned(&data);
        assert_eq!(wire.sign, 1);
        assert_eq!(magnitude_from_le(&wire.val), 12345);

        let back = decode_numerics(1, &data, &NullPolicy::Indicator(&indicators)).unwrap();
        assert!((back[0] - 123.45).abs() < f64::EPSILON * 128.0);
    }

    #[test]
    fn test_negative_value_roundtrip() {
        let (data, indicators, _) = encode_numerics(&[-0.07], 3, 2).unwrap();
        let back = decode_numerics(1, &data, &NullPolicy::Indicator(&indicators)).unwrap();
        assert!((back[0] + 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_null_slots_are_zeroed_with_null_indicator() {
        let (data, indicators, saw_null) =
            encode_numerics(&[1.0, na_real()], 5, 2).unwrap();
        assert!(saw_null);
        assert_eq!(indicators[1], NULL_DATA);

        let width = std::mem::size_of::<SqlNumericStruct>();
        let slot: SqlNumericStruct = bytemuck::pod_read_unaligned(&data[width..2 * width]);
        assert_eq!(slot, SqlNumericStruct::zeroed());

        let back = decode_numerics(2, &data, &NullPolicy::Indicator(&indicators)).unwrap();
        assert!(is_na_real(back[1]));
        assert!(!is_na_real(back[0]));
    }

    #[test]
    fn test_magnitude_beyond_wire_length_is_an_overflow_error() {
        // 1e40 needs more than 16 base-256 bytes.
        let result = encode_numerics(&[1e40], 38, 0).unwrap_err();
        assert!(matches!(
            result,
            BridgeError::NumericOverflow { row: 0, .. }
        ));

        // Scale pushes an otherwise-fitting value over the limit.
        let result = encode_numerics(&[1e38], 38, 4);
        assert!(matches!(result, Err(BridgeError::NumericOverflow { .. })));
    }

    #[test]
    fn test_precision_beyond_f64_digits_is_best_effort_not_an_error() {
        // 20 significant digits: decodes to the nearest representable f64.
        let wire = numeric(20, 0, 1, 12_345_678_901_234_567_890);
        let data = to_buffer(&[wire]);

        let out = decode_numerics(1, &data, &NullPolicy::NotNull).unwrap();
        let expected = 12_345_678_901_234_567_890u128 as f64;
        assert_eq!(out[0], expected);
    }

    #[test]
    fn test_zero_encodes_with_positive_sign() {
        let (data, _, _) = encode_numerics(&[0.0], 1, 0).unwrap();
        let wire: SqlNumericStruct = bytemuck::pod_read_unaligned(&data);
        assert_eq!(wire.sign, 1);
        assert_eq!(magnitude_from_le(&wire.val), 0);
    }
}
