// In: src/bridge/outbound.rs

//! Outbound conversions: native vector -> wire column buffer + indicators.
//!
//! The exact mirror of `inbound`: feeding an `EncodedColumn` back through
//! `decode_column` with the same metadata reproduces the original vector
//! values, up to the documented precision limits for decimals and the
//! null/empty equivalence for binary columns.

use crate::bridge::format::{ColumnMeta, EncodedColumn};
use crate::error::BridgeError;
use crate::kernels::fixed::{
    encode_fixed, BigIntCodec, DoubleCodec, FixedCodec, IntCodec, LogicalCodec, RealCodec,
    SmallIntCodec, TinyIntCodec,
};
use crate::kernels::{decimal, raw, temporal, text};
use crate::types::{NativeVector, SqlDataType};

/// Encodes a native vector into the wire form of the column described by
/// `meta`.
///
/// `max_width` bounds each element's byte length for the variable-width
/// families and is ignored elsewhere. An element over the bound fails with
/// `LengthExceeded`; truncation is never performed. The vector variant must
/// match the column type or the call fails with `TypeMismatch`.
pub fn encode_column(
    vector: &NativeVector,
    meta: &ColumnMeta,
    max_width: usize,
) -> Result<EncodedColumn, BridgeError> {
    log::trace!(
        "encode_column: {} elements of {} as {}",
        vector.len(),
        vector.kind(),
        meta.data_type
    );

    match (meta.data_type, vector) {
        (SqlDataType::TinyInt, NativeVector::Int(v)) => Ok(fixed_column::<TinyIntCodec>(v)),
        (SqlDataType::SmallInt, NativeVector::Int(v)) => Ok(fixed_column::<SmallIntCodec>(v)),
        (SqlDataType::Integer, NativeVector::Int(v)) => Ok(fixed_column::<IntCodec>(v)),
        (SqlDataType::BigInt, NativeVector::Double(v)) => Ok(fixed_column::<BigIntCodec>(v)),
        (SqlDataType::Real, NativeVector::Double(v)) => Ok(fixed_column::<RealCodec>(v)),
        (SqlDataType::Double, NativeVector::Double(v)) => Ok(fixed_column::<DoubleCodec>(v)),
        (SqlDataType::Bit, NativeVector::Logical(v)) => Ok(fixed_column::<LogicalCodec>(v)),
        (SqlDataType::Char, NativeVector::Character(v)) => {
            let (data, indicators, saw_null, max_len) = text::encode_utf8(v, max_width)?;
            Ok(EncodedColumn {
                data,
                indicators,
                nullable: saw_null,
                max_len,
            })
        }
        (SqlDataType::WChar, NativeVector::Character(v)) => {
            let (data, indicators, saw_null, max_len) = text::encode_utf16(v, max_width)?;
            Ok(EncodedColumn {
                data,
                indicators,
                nullable: saw_null,
                max_len,
            })
        }
        (SqlDataType::Binary, NativeVector::Raw(v)) => {
            let (data, indicators, max_len) = raw::encode_raw(v, max_width)?;
            Ok(EncodedColumn {
                data,
                indicators,
                // Raw vectors cannot hold a native null; empty elements are
                // written as the shared null/empty wire value.
                nullable: false,
                max_len,
            })
        }
        (SqlDataType::Date, NativeVector::Date(v)) => {
            let (data, indicators, saw_null) = temporal::encode_dates(v)?;
            Ok(structured_column(meta.data_type, data, indicators, saw_null))
        }
        (SqlDataType::Timestamp, NativeVector::DateTime(v)) => {
            let (data, indicators, saw_null) = temporal::encode_timestamps(v)?;
            Ok(structured_column(meta.data_type, data, indicators, saw_null))
        }
        (SqlDataType::Numeric, NativeVector::Double(v)) => {
            let (data, indicators, saw_null) =
                decimal::encode_numerics(v, meta.precision, meta.scale)?;
            Ok(structured_column(meta.data_type, data, indicators, saw_null))
        }
        (_, v) => Err(BridgeError::TypeMismatch {
            expected: meta.data_type,
            actual: v.kind(),
        }),
    }
}

fn fixed_column<C: FixedCodec>(values: &[C::Native]) -> EncodedColumn {
    let (data, indicators, saw_null) = encode_fixed::<C>(values);
    let width = std::mem::size_of::<C::Wire>();
    EncodedColumn {
        max_len: live_width(&indicators, width),
        data,
        indicators,
        nullable: saw_null,
    }
}

fn structured_column(
    data_type: SqlDataType,
    data: Vec<u8>,
    indicators: Vec<i64>,
    saw_null: bool,
) -> EncodedColumn {
    let width = data_type.fixed_width().unwrap_or(0);
    EncodedColumn {
        max_len: live_width(&indicators, width),
        data,
        indicators,
        nullable: saw_null,
    }
}

/// Element width if any non-null element was written, zero otherwise.
fn live_width(indicators: &[i64], width: usize) -> usize {
    if indicators.iter().any(|&i| i >= 0) {
        width
    } else {
        0
    }
}
