//! This module contains the pure, stateless kernel for variable-width
//! binary columns.
//!
//! Addressing is identical to the character kernel (cumulative runs, byte
//! length indicators) but bytes are copied verbatim with no encoding
//! interpretation.
//!
//! Known asymmetry, part of the public contract: raw vectors have no
//! per-element null. Inbound, a negative indicator yields an EMPTY element,
//! not a null one. Outbound, a zero-length element is written with a
//! `NULL_DATA` indicator, so "null" and "empty" are one and the same wire
//! value for binary columns only. Round-trips preserve element values under
//! this equivalence.

use crate::bridge::format::NULL_DATA;
use crate::error::BridgeError;

//==================================================================================
// 1. Inbound
//==================================================================================

/// Decodes `rows` binary runs. Negative indicators produce empty elements.
pub(crate) fn decode_raw(
    rows: usize,
    data: &[u8],
    indicators: &[i64],
) -> Result<Vec<Vec<u8>>, BridgeError> {
    if indicators.len() < rows {
        return Err(BridgeError::IndicatorMismatch(rows, indicators.len()));
    }

    let mut out = Vec::with_capacity(rows);
    let mut offset = 0usize;
    for &ind in indicators.iter().take(rows) {
        if ind < 0 {
            out.push(Vec::new());
            continue;
        }
        let len = ind as usize;
        let end = offset
            .checked_add(len)
            .ok_or(BridgeError::BufferMismatch(usize::MAX, data.len()))?;
        let run = data
            .get(offset..end)
            .ok_or(BridgeError::BufferMismatch(end, data.len()))?;
        out.push(run.to_vec());
        offset = end;
    }
    Ok(out)
}

//==================================================================================
// 2. Outbound
//==================================================================================

/// Encodes binary elements into concatenated runs. Zero-length elements are
/// written as `NULL_DATA` (see the module contract). Oversized elements fail
/// with `LengthExceeded`. Returns `(data, indicators, max_len)`; there is no
/// `saw_null` here because raw vectors cannot hold one.
pub(crate) fn encode_raw(
    values: &[Vec<u8>],
    max_width: usize,
) -> Result<(Vec<u8>, Vec<i64>, usize), BridgeError> {
    let mut data = Vec::new();
    let mut indicators = Vec::with_capacity(values.len());
    let mut max_len = 0usize;

    for (row, value) in values.iter().enumerate() {
        if value.is_empty() {
            indicators.push(NULL_DATA);
            continue;
        }
        if value.len() > max_width {
            return Err(BridgeError::LengthExceeded {
                row,
                len: value.len(),
                max: max_width,
            });
        }
        data.extend_from_slice(value);
        indicators.push(value.len() as i64);
        max_len = max_len.max(value.len());
    }
    Ok((data, indicators, max_len))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_indicator_yields_empty_not_null() {
        let data = [1u8, 2, 3];
        let indicators = vec![2i64, -1, 1];

        let out = decode_raw(3, &data, &indicators).unwrap();
        assert_eq!(out, vec![vec![1u8, 2], vec![], vec![3]]);
    }

    #[test]
    fn test_zero_length_indicator_also_yields_empty() {
        let data = [9u8];
        let indicators = vec![0i64, 1];

        let out = decode_raw(2, &data, &indicators).unwrap();
        assert_eq!(out, vec![vec![], vec![9u8]]);
    }

    #[test]
    fn test_empty_element_encodes_as_null_indicator() {
        let values = vec![vec![1u8, 2], vec![], vec![3u8]];
        let (data, indicators, max_len) = encode_raw(&values, 16).unwrap();

        assert_eq!(data, vec![1u8, 2, 3]);
        assert_eq!(indicators, vec![2, NULL_DATA, 1]);
        assert_eq!(max_len, 2);
    }

    #[test]
    fn test_empty_and_null_collapse_through_a_roundtrip() {
        // The documented asymmetry: empty survives as empty, which on the
        // wire is indistinguishable from null.
        let values = vec![vec![0xAAu8], vec![], vec![0xBBu8, 0xCC]];
        let (data, indicators, _) = encode_raw(&values, 8).unwrap();
        let back = decode_raw(3, &data, &indicators).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_oversized_element_is_reported() {
        let values = vec![vec![0u8; 9]];
        let result = encode_raw(&values, 8);
        assert!(matches!(
            result,
            Err(BridgeError::LengthExceeded {
                row: 0,
                len: 9,
                max: 8
            })
        ));
    }
}
