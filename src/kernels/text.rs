//! This module contains the pure, stateless kernel for variable-width
//! character columns.
//!
//! The wire carries one concatenated byte run per non-null row: row N's run
//! starts immediately after row N-1's, so offsets are cumulative and rows
//! must be walked in order. Null rows contribute no bytes. Two code-unit
//! widths exist, single-byte UTF-8 and double-byte UTF-16LE, chosen per
//! column; indicators are byte lengths under both.

use crate::bridge::format::NULL_DATA;
use crate::error::BridgeError;

//==================================================================================
// 1. Inbound
//==================================================================================

/// Decodes `rows` UTF-8 runs into native strings. A negative indicator is a
/// null element. Trailing buffer bytes past the last consumed run are
/// padding and are ignored.
pub(crate) fn decode_utf8(
    rows: usize,
    data: &[u8],
    indicators: &[i64],
) -> Result<Vec<Option<String>>, BridgeError> {
    if indicators.len() < rows {
        return Err(BridgeError::IndicatorMismatch(rows, indicators.len()));
    }

    let mut out = Vec::with_capacity(rows);
    let mut offset = 0usize;
    for (row, &ind) in indicators.iter().take(rows).enumerate() {
        if ind < 0 {
            out.push(None);
            continue;
        }
        let len = ind as usize;
        let run = run_slice(data, offset, len)?;
        let s = std::str::from_utf8(run).map_err(|e| {
            BridgeError::Encoding(format!("invalid UTF-8 in row {}: {}", row, e))
        })?;
        out.push(Some(s.to_owned()));
        offset += len;
    }
    Ok(out)
}

/// Decodes `rows` UTF-16LE runs into native strings. Indicators count bytes,
/// so every non-null run must have even length.
pub(crate) fn decode_utf16(
    rows: usize,
    data: &[u8],
    indicators: &[i64],
) -> Result<Vec<Option<String>>, BridgeError> {
    if indicators.len() < rows {
        return Err(BridgeError::IndicatorMismatch(rows, indicators.len()));
    }

    let mut out = Vec::with_capacity(rows);
    let mut offset = 0usize;
    for (row, &ind) in indicators.iter().take(rows).enumerate() {
        if ind < 0 {
            out.push(None);
            continue;
        }
        let len = ind as usize;
        if len % 2 != 0 {
            return Err(BridgeError::Encoding(format!(
                "UTF-16 run in row {} has odd byte length {}",
                row, len
            )));
        }
        let run = run_slice(data, offset, len)?;
        let units: Vec<u16> = run
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let s = String::from_utf16(&units).map_err(|e| {
            BridgeError::Encoding(format!("invalid UTF-16 in row {}: {}", row, e))
        })?;
        out.push(Some(s));
        offset += len;
    }
    Ok(out)
}

fn run_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], BridgeError> {
    let end = offset
        .checked_add(len)
        .ok_or(BridgeError::BufferMismatch(usize::MAX, data.len()))?;
    data.get(offset..end)
        .ok_or(BridgeError::BufferMismatch(end, data.len()))
}

//==================================================================================
// 2. Outbound
//==================================================================================

/// Encodes native strings into concatenated UTF-8 runs. An element longer
/// than `max_width` bytes fails with `LengthExceeded`; truncating here would
/// silently desynchronize row data downstream. Returns
/// `(data, indicators, saw_null, max_len)`.
pub(crate) fn encode_utf8(
    values: &[Option<String>],
    max_width: usize,
) -> Result<(Vec<u8>, Vec<i64>, bool, usize), BridgeError> {
    let mut data = Vec::new();
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;
    let mut max_len = 0usize;

    for (row, value) in values.iter().enumerate() {
        match value {
            None => {
                saw_null = true;
                indicators.push(NULL_DATA);
            }
            Some(s) => {
                let bytes = s.as_bytes();
                if bytes.len() > max_width {
                    return Err(BridgeError::LengthExceeded {
                        row,
                        len: bytes.len(),
                        max: max_width,
                    });
                }
                data.extend_from_slice(bytes);
                indicators.push(bytes.len() as i64);
                max_len = max_len.max(bytes.len());
            }
        }
    }
    Ok((data, indicators, saw_null, max_len))
}

/// Encodes native strings into concatenated UTF-16LE runs; `max_width` is in
/// bytes, matching the indicator unit.
pub(crate) fn encode_utf16(
    values: &[Option<String>],
    max_width: usize,
) -> Result<(Vec<u8>, Vec<i64>, bool, usize), BridgeError> {
    let mut data = Vec::new();
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;
    let mut max_len = 0usize;

    for (row, value) in values.iter().enumerate() {
        match value {
            None => {
                saw_null = true;
                indicators.push(NULL_DATA);
            }
            Some(s) => {
                let units: Vec<u16> = s.encode_utf16().collect();
                let byte_len = units.len() * 2;
                if byte_len > max_width {
                    return Err(BridgeError::LengthExceeded {
                        row,
                        len: byte_len,
                        max: max_width,
                    });
                }
                for unit in units {
                    data.extend_from_slice(&unit.to_le_bytes());
                }
                indicators.push(byte_len as i64);
                max_len = max_len.max(byte_len);
            }
        }
    }
    Ok((data, indicators, saw_null, max_len))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
