//! This module contains the pure, stateless kernel for structured date and
//! datetime columns.
//!
//! The wire carries calendar fields (`SqlDateStruct`, `SqlTimestampStruct`);
//! the native side measures time as one continuous number: days since
//! 1970-01-01 for dates, seconds (with fractional nanoseconds) since
//! 1970-01-01T00:00:00 for datetimes. Both are timezone-less throughout.
//! Missing values travel only in the indicator array; there is no in-band
//! sentinel for temporal columns.

use bytemuck::Zeroable;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike};

use crate::bridge::format::{SqlDateStruct, SqlTimestampStruct, NULL_DATA};
use crate::error::BridgeError;
use crate::null_handling::NullPolicy;
use crate::types::{is_na_real, na_real};

// chrono's `NaiveDate::default()` is the Unix epoch itself.
fn epoch() -> NaiveDate {
    NaiveDate::default()
}

fn year_to_wire(year: i32, row: usize) -> Result<i16, BridgeError> {
    i16::try_from(year).map_err(|_| BridgeError::InvalidTemporal { row })
}

//==================================================================================
// 1. Inbound
//==================================================================================

/// Decodes `rows` date structs into epoch-relative day counts.
pub(crate) fn decode_dates(
    rows: usize,
    data: &[u8],
    policy: &NullPolicy,
) -> Result<Vec<f64>, BridgeError> {
    let width = std::mem::size_of::<SqlDateStruct>();
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
        let wire: SqlDateStruct =
            bytemuck::pod_read_unaligned(&data[row * width..(row + 1) * width]);
        let date = NaiveDate::from_ymd_opt(i32::from(wire.year), u32::from(wire.month), u32::from(wire.day))
            .ok_or(BridgeError::InvalidTemporal { row })?;
        out.push(date.signed_duration_since(epoch()).num_days() as f64);
    }
    Ok(out)
}

/// Decodes `rows` timestamp structs into epoch-relative seconds, carrying
/// the nanosecond fraction in the value's fractional part.
pub(crate) fn decode_timestamps(
    rows: usize,
    data: &[u8],
    policy: &NullPolicy,
) -> Result<Vec<f64>, BridgeError> {
    let width = std::mem::size_of::<SqlTimestampStruct>();
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
        let wire: SqlTimestampStruct =
            bytemuck::pod_read_unaligned(&data[row * width..(row + 1) * width]);
        let datetime = NaiveDate::from_ymd_opt(
            i32::from(wire.year),
            u32::from(wire.month),
            u32::from(wire.day),
        )
        .and_then(|d| {
            d.and_hms_nano_opt(
                u32::from(wire.hour),
                u32::from(wire.minute),
                u32::from(wire.second),
                wire.fraction,
            )
        })
        .ok_or(BridgeError::InvalidTemporal { row })?;

        let seconds = datetime.and_utc().timestamp() as f64;
        out.push(seconds + f64::from(datetime.nanosecond()) * 1e-9);
    }
    Ok(out)
}

//==================================================================================
// 2. Outbound
//==================================================================================

/// Encodes epoch-relative day counts back into date structs. Returns
/// `(data, indicators, saw_null)`.
pub(crate) fn encode_dates(values: &[f64]) -> Result<(Vec<u8>, Vec<i64>, bool), BridgeError> {
    let width = std::mem::size_of::<SqlDateStruct>();
    let mut data = Vec::with_capacity(values.len() * width);
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;

    for (row, &v) in values.iter().enumerate() {
        if is_na_real(v) {
            saw_null = true;
            data.extend_from_slice(bytemuck::bytes_of(&SqlDateStruct::zeroed()));
            indicators.push(NULL_DATA);
            continue;
        }
        let days = v.floor() as i64;
        let date = Duration::try_days(days)
            .and_then(|d| epoch().checked_add_signed(d))
            .ok_or(BridgeError::InvalidTemporal { row })?;
        let wire = SqlDateStruct {
            year: year_to_wire(date.year(), row)?,
            month: date.month() as u16,
            day: date.day() as u16,
        };
        data.extend_from_slice(bytemuck::bytes_of(&wire));
        indicators.push(width as i64);
    }
    Ok((data, indicators, saw_null))
}

/// Encodes epoch-relative seconds back into timestamp structs, splitting the
/// fractional part into nanoseconds.
pub(crate) fn encode_timestamps(values: &[f64]) -> Result<(Vec<u8>, Vec<i64>, bool), BridgeError> {
    let width = std::mem::size_of::<SqlTimestampStruct>();
    let mut data = Vec::with_capacity(values.len() * width);
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;

    for (row, &v) in values.iter().enumerate() {
        if is_na_real(v) {
            saw_null = true;
            data.extend_from_slice(bytemuck::bytes_of(&SqlTimestampStruct::zeroed()));
            indicators.push(NULL_DATA);
            continue;
        }
        let mut seconds = v.floor();
        let mut nanos = ((v - seconds) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            seconds += 1.0;
            nanos = 0;
        }
        if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
            return Err(BridgeError::InvalidTemporal { row });
        }
        let datetime = DateTime::from_timestamp(seconds as i64, nanos)
            .ok_or(BridgeError::InvalidTemporal { row })?
            .naive_utc();
        let wire = SqlTimestampStruct {
            year: year_to_wire(datetime.year(), row)?,
            month: datetime.month() as u16,
            day: datetime.day() as u16,
            hour: datetime.hour() as u16,
            minute: datetime.minute() as u16,
            second: datetime.second() as u16,
            fraction: datetime.nanosecond(),
        };
        data.extend_from_slice(bytemuck::bytes_of(&wire));
        indicators.push(width as i64);
    }
    Ok((data, indicators, saw_null))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
