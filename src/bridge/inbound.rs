// In: src/bridge/inbound.rs

//! Inbound conversions: wire column buffer -> native vector.
//!
//! This is a thin dispatch layer. It selects the null policy once per
//! column, picks the kernel for the wire type, and tags the result with the
//! matching native vector variant. All element-level work happens in
//! `kernels`.

use crate::bridge::format::ColumnMeta;
use crate::error::BridgeError;
use crate::kernels::fixed::{
    decode_fixed, BigIntCodec, DoubleCodec, IntCodec, LogicalCodec, RealCodec, SmallIntCodec,
    TinyIntCodec,
};
use crate::kernels::{decimal, raw, temporal, text};
use crate::null_handling::NullPolicy;
use crate::types::{NativeVector, SqlDataType};

/// Decodes one column buffer into a native vector of `rows` elements.
///
/// `data` is row-major: fixed-stride for the fixed-width families,
/// concatenated variable-length runs for character/binary. `indicators` is
/// required for the variable-width families (it carries run lengths, not
/// just nulls) and optional elsewhere; a nullable fixed-width column without
/// indicators falls back to its reserved sentinel. The buffer is only
/// borrowed for the duration of the call.
pub fn decode_column(
    meta: &ColumnMeta,
    rows: usize,
    data: &[u8],
    indicators: Option<&[i64]>,
) -> Result<NativeVector, BridgeError> {
    log::trace!(
        "decode_column: {} rows of {}, nullable={}",
        rows,
        meta.data_type,
        meta.nullable
    );
    let policy = NullPolicy::for_column(meta, indicators, rows)?;

    match meta.data_type {
        SqlDataType::TinyInt => Ok(NativeVector::Int(decode_fixed::<TinyIntCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::SmallInt => Ok(NativeVector::Int(decode_fixed::<SmallIntCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::Integer => Ok(NativeVector::Int(decode_fixed::<IntCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::BigInt => Ok(NativeVector::Double(decode_fixed::<BigIntCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::Real => Ok(NativeVector::Double(decode_fixed::<RealCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::Double => Ok(NativeVector::Double(decode_fixed::<DoubleCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::Bit => Ok(NativeVector::Logical(decode_fixed::<LogicalCodec>(
            rows, data, &policy,
        )?)),
        SqlDataType::Char => {
            let ind = required_indicators(meta, indicators)?;
            Ok(NativeVector::Character(text::decode_utf8(rows, data, ind)?))
        }
        SqlDataType::WChar => {
            let ind = required_indicators(meta, indicators)?;
            Ok(NativeVector::Character(text::decode_utf16(rows, data, ind)?))
        }
        SqlDataType::Binary => {
            let ind = required_indicators(meta, indicators)?;
            Ok(NativeVector::Raw(raw::decode_raw(rows, data, ind)?))
        }
        SqlDataType::Date => Ok(NativeVector::Date(temporal::decode_dates(
            rows, data, &policy,
        )?)),
        SqlDataType::Timestamp => Ok(NativeVector::DateTime(temporal::decode_timestamps(
            rows, data, &policy,
        )?)),
        SqlDataType::Numeric => Ok(NativeVector::Double(decimal::decode_numerics(
            rows, data, &policy,
        )?)),
    }
}

/// The variable-width families address their runs through the indicator
/// array, so its absence is a contract violation independent of nullability.
fn required_indicators<'a>(
    meta: &ColumnMeta,
    indicators: Option<&'a [i64]>,
) -> Result<&'a [i64], BridgeError> {
    indicators.ok_or(BridgeError::MissingIndicators(meta.data_type))
}
