// In: src/bridge/format.rs

//! Defines all wire-level structures and constants for the column transport
//! format. This is the single source of truth for the contract between the
//! bridge and the surrounding extension: indicator sentinels, the structured
//! date/time/decimal element layouts, the per-column metadata the caller
//! supplies, and the buffer + indicator pair outbound conversions return.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::types::SqlDataType;

//==================================================================================
// I. Indicator Contract
//==================================================================================

/// The indicator value marking a null row. Any negative indicator is accepted
/// as null on input; outbound conversions always write exactly this value.
pub const NULL_DATA: i64 = -1;

/// Maximum length, in bytes, of a decimal magnitude on the wire.
pub const MAX_NUMERIC_LEN: usize = 16;

//==================================================================================
// II. Structured Wire Elements
//==================================================================================

/// One calendar date as transported in a date column buffer.
///
/// Field order and widths are fixed by the wire contract; the struct has no
/// internal padding, so a column buffer is a plain array of these.
#[derive(Pod, Zeroable, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct SqlDateStruct {
    pub year: i16,
    pub month: u16,
    pub day: u16,
}

/// One date + time-of-day element as transported in a datetime column buffer.
/// `fraction` is in nanoseconds.
#[derive(Pod, Zeroable, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct SqlTimestampStruct {
    pub year: i16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub fraction: u32,
}

/// One fixed-point decimal element: sign, declared precision/scale, and a
/// little-endian base-256 magnitude. `sign` is 1 for non-negative values and
/// 0 for negative ones. Magnitudes shorter than [`MAX_NUMERIC_LEN`] are
/// zero-padded in the high bytes.
#[derive(Pod, Zeroable, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct SqlNumericStruct {
    pub precision: u8,
    pub scale: i8,
    pub sign: u8,
    pub val: [u8; MAX_NUMERIC_LEN],
}

//==================================================================================
// III. Column Metadata & Outbound Result
//==================================================================================

/// Per-column conversion metadata, validated and supplied by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMeta {
    /// The wire-level element type of the column.
    pub data_type: SqlDataType,
    /// Whether the column may contain nulls. Non-nullable columns skip all
    /// null probing on the fixed-width path.
    pub nullable: bool,
    /// Total significant digits; decimal columns only.
    pub precision: u8,
    /// Digits right of the decimal point; decimal columns only.
    pub scale: i8,
}

impl ColumnMeta {
    /// Metadata for a non-decimal column.
    pub fn new(data_type: SqlDataType, nullable: bool) -> Self {
        Self {
            data_type,
            nullable,
            precision: 0,
            scale: 0,
        }
    }

    /// Metadata for a decimal column with the given precision and scale.
    pub fn decimal(precision: u8, scale: i8, nullable: bool) -> Self {
        Self {
            data_type: SqlDataType::Numeric,
            nullable,
            precision,
            scale,
        }
    }
}

/// The result of an outbound conversion: the raw column buffer, the parallel
/// indicator array, and the summary facts the transport layer binds alongside
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    /// Row-major element data: fixed-stride for the fixed-width families,
    /// concatenated runs for character/binary.
    pub data: Vec<u8>,
    /// One entry per row: [`NULL_DATA`] for null, otherwise the element's
    /// byte length.
    pub indicators: Vec<i64>,
    /// Whether any null was written. Mirrors what the caller declared only
    /// when the vector actually contained a missing element.
    pub nullable: bool,
    /// Widest element actually written, in bytes. Zero for an all-null or
    /// empty column.
    pub max_len: usize,
}

//==================================================================================
// IV. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_structs_have_no_padding() {
        // The wire contract is a packed array of elements; any compiler
        // padding would desynchronize row addressing.
        assert_eq!(std::mem::size_of::<SqlDateStruct>(), 6);
        assert_eq!(std::mem::size_of::<SqlTimestampStruct>(), 16);
        assert_eq!(std::mem::size_of::<SqlNumericStruct>(), 3 + MAX_NUMERIC_LEN);
    }

    #[test]
    fn test_fixed_width_agrees_with_struct_sizes() {
        assert_eq!(SqlDataType::Date.fixed_width(), Some(6));
        assert_eq!(SqlDataType::Timestamp.fixed_width(), Some(16));
        assert_eq!(SqlDataType::Numeric.fixed_width(), Some(19));
        assert_eq!(SqlDataType::Char.fixed_width(), None);
    }
}
