//! This module contains the pure, stateless kernel for fixed-width
//! numeric/logical columns.
//!
//! One `FixedCodec` implementation exists per SQL-type/native-type pair,
//! giving a single generic decode/encode path for the whole family instead
//! of per-type converter functions. The kernel reads wire values with
//! unaligned POD loads, so callers may hand in any byte buffer without
//! alignment obligations. This module is PURE RUST and panic-free for
//! well-formed inputs; buffer shortfalls are reported, not assumed away.

use bytemuck::Pod;
use num_traits::AsPrimitive;

use crate::bridge::format::NULL_DATA;
use crate::error::BridgeError;
use crate::null_handling::sentinel::{
    WIRE_NULL_BIGINT, WIRE_NULL_BIT, WIRE_NULL_DOUBLE_BITS, WIRE_NULL_INTEGER,
    WIRE_NULL_REAL_BITS, WIRE_NULL_SMALLINT, WIRE_NULL_TINYINT,
};
use crate::null_handling::NullPolicy;
use crate::types::{is_na_logical, is_na_real, na_real, NA_INTEGER, NA_LOGICAL};

//==================================================================================
// 1. The Codec Set
//==================================================================================

/// One fixed-width wire type paired with its native element type.
///
/// `wire_is_null` compares against the reserved sentinel (on bits for the
/// floating codecs, where `==` would lie about NaN). `encode` is only ever
/// called for non-null elements; nulls are written as `wire_null()` by
/// `encode_fixed`.
pub(crate) trait FixedCodec {
    type Wire: Pod + Copy;
    type Native: Copy;

    fn decode(wire: Self::Wire) -> Self::Native;
    fn encode(native: Self::Native) -> Self::Wire;
    fn wire_null() -> Self::Wire;
    fn native_null() -> Self::Native;
    fn wire_is_null(wire: Self::Wire) -> bool;
    fn native_is_null(native: Self::Native) -> bool;
}

/// Integer wire types narrowing/widening into the native integer vector.
macro_rules! int_codec {
    ($name:ident, $wire:ty, $wire_null:expr) => {
        pub(crate) struct $name;

        impl FixedCodec for $name {
            type Wire = $wire;
            type Native = i32;

            #[inline]
            fn decode(wire: $wire) -> i32 {
                wire.as_()
            }
            #[inline]
            fn encode(native: i32) -> $wire {
                native.as_()
            }
            #[inline]
            fn wire_null() -> $wire {
                $wire_null
            }
            #[inline]
            fn native_null() -> i32 {
                NA_INTEGER
            }
            #[inline]
            fn wire_is_null(wire: $wire) -> bool {
                wire == $wire_null
            }
            #[inline]
            fn native_is_null(native: i32) -> bool {
                native == NA_INTEGER
            }
        }
    };
}

int_codec!(TinyIntCodec, u8, WIRE_NULL_TINYINT);
int_codec!(SmallIntCodec, i16, WIRE_NULL_SMALLINT);
int_codec!(IntCodec, i32, WIRE_NULL_INTEGER);

/// 64-bit integers exceed the native integer range and widen into the
/// floating vector, as the host runtime represents them.
pub(crate) struct BigIntCodec;

impl FixedCodec for BigIntCodec {
    type Wire = i64;
    type Native = f64;

    #[inline]
    fn decode(wire: i64) -> f64 {
        wire.as_()
    }
    #[inline]
    fn encode(native: f64) -> i64 {
        native.as_()
    }
    #[inline]
    fn wire_null() -> i64 {
        WIRE_NULL_BIGINT
    }
    #[inline]
    fn native_null() -> f64 {
        na_real()
    }
    #[inline]
    fn wire_is_null(wire: i64) -> bool {
        wire == WIRE_NULL_BIGINT
    }
    #[inline]
    fn native_is_null(native: f64) -> bool {
        is_na_real(native)
    }
}

pub(crate) struct RealCodec;

impl FixedCodec for RealCodec {
    type Wire = f32;
    type Native = f64;

    #[inline]
    fn decode(wire: f32) -> f64 {
        wire.as_()
    }
    #[inline]
    fn encode(native: f64) -> f32 {
        native.as_()
    }
    #[inline]
    fn wire_null() -> f32 {
        f32::from_bits(WIRE_NULL_REAL_BITS)
    }
    #[inline]
    fn native_null() -> f64 {
        na_real()
    }
    #[inline]
    fn wire_is_null(wire: f32) -> bool {
        wire.to_bits() == WIRE_NULL_REAL_BITS
    }
    #[inline]
    fn native_is_null(native: f64) -> bool {
        is_na_real(native)
    }
}

pub(crate) struct DoubleCodec;

impl FixedCodec for DoubleCodec {
    type Wire = f64;
    type Native = f64;

    #[inline]
    fn decode(wire: f64) -> f64 {
        wire
    }
    #[inline]
    fn encode(native: f64) -> f64 {
        native
    }
    #[inline]
    fn wire_null() -> f64 {
        f64::from_bits(WIRE_NULL_DOUBLE_BITS)
    }
    #[inline]
    fn native_null() -> f64 {
        na_real()
    }
    #[inline]
    fn wire_is_null(wire: f64) -> bool {
        wire.to_bits() == WIRE_NULL_DOUBLE_BITS
    }
    #[inline]
    fn native_is_null(native: f64) -> bool {
        is_na_real(native)
    }
}

/// Tri-state booleans: 0 is false, the reserved "unknown" byte decodes to
/// the native missing value, and any other non-zero byte is true.
pub(crate) struct LogicalCodec;

impl FixedCodec for LogicalCodec {
    type Wire = u8;
    type Native = i32;

    #[inline]
    fn decode(wire: u8) -> i32 {
        match wire {
            0 => 0,
            WIRE_NULL_BIT => NA_LOGICAL,
            _ => 1,
        }
    }
    #[inline]
    fn encode(native: i32) -> u8 {
        u8::from(native != 0)
    }
    #[inline]
    fn wire_null() -> u8 {
        WIRE_NULL_BIT
    }
    #[inline]
    fn native_null() -> i32 {
        NA_LOGICAL
    }
    #[inline]
    fn wire_is_null(wire: u8) -> bool {
        wire == WIRE_NULL_BIT
    }
    #[inline]
    fn native_is_null(native: i32) -> bool {
        is_na_logical(native)
    }
}

//==================================================================================
// 2. Generic Decode / Encode
//==================================================================================

/// Decodes `rows` fixed-width wire elements into native elements, applying
/// the column's null policy per row.
pub(crate) fn decode_fixed<C: FixedCodec>(
    rows: usize,
    data: &[u8],
    policy: &NullPolicy,
) -> Result<Vec<C::Native>, BridgeError> {
    let width = std::mem::size_of::<C::Wire>();
    let need = rows * width;
    if data.len() < need {
        return Err(BridgeError::BufferMismatch(need, data.len()));
    }

    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let wire: C::Wire = bytemuck::pod_read_unaligned(&data[row * width..(row + 1) * width]);
        let is_null = match policy {
            NullPolicy::Indicator(_) => policy.indicator_marks_null(row),
            NullPolicy::Sentinel => C::wire_is_null(wire),
            NullPolicy::NotNull => false,
        };
        out.push(if is_null {
            C::native_null()
        } else {
            C::decode(wire)
        });
    }
    Ok(out)
}

/// Encodes native elements into a fixed-stride wire buffer plus indicators.
/// Null elements are written as the reserved wire sentinel with a
/// [`NULL_DATA`] indicator; live elements carry their byte width. Returns
/// `(data, indicators, saw_null)`.
pub(crate) fn encode_fixed<C: FixedCodec>(values: &[C::Native]) -> (Vec<u8>, Vec<i64>, bool) {
    let width = std::mem::size_of::<C::Wire>();
    let mut data = Vec::with_capacity(values.len() * width);
    let mut indicators = Vec::with_capacity(values.len());
    let mut saw_null = false;

    for &v in values {
        if C::native_is_null(v) {
            saw_null = true;
            data.extend_from_slice(bytemuck::bytes_of(&C::wire_null()));
            indicators.push(NULL_DATA);
        } else {
            data.extend_from_slice(bytemuck::bytes_of(&C::encode(v)));
            indicators.push(width as i64);
        }
    }
    (data, indicators, saw_null)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
