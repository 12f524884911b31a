//! The process-wide registry of reserved "missing" bit patterns.
//!
//! For the fixed-width numeric/logical family the wire may omit the
//! indicator array entirely and instead reserve one bit pattern inside the
//! value space to mean "this element is missing". The registry is built once
//! on first use and is read-only afterwards, so unsynchronized concurrent
//! lookups from parallel column conversions are safe.
//!
//! Character, binary, decimal and temporal columns never appear here: no
//! pattern can be reserved in their payload space without colliding with
//! legitimate data.

use hashbrown::HashMap;
use std::sync::OnceLock;

use crate::types::{NA_REAL_BITS, SqlDataType};

//==================================================================================
// 1. Reserved Wire Patterns
//==================================================================================

/// Reserved pattern for tinyint columns.
pub const WIRE_NULL_TINYINT: u8 = u8::MAX;
/// Reserved pattern for smallint columns.
pub const WIRE_NULL_SMALLINT: i16 = i16::MIN;
/// Reserved pattern for integer columns.
pub const WIRE_NULL_INTEGER: i32 = i32::MIN;
/// Reserved pattern for bigint columns.
pub const WIRE_NULL_BIGINT: i64 = i64::MIN;
/// Reserved pattern for real (f32) columns: a quiet NaN with payload 1954.
pub const WIRE_NULL_REAL_BITS: u32 = 0x7FC0_07A2;
/// Reserved pattern for double (f64) columns; identical to the host
/// runtime's floating missing value.
pub const WIRE_NULL_DOUBLE_BITS: u64 = NA_REAL_BITS;
/// Reserved "unknown" encoding for bit columns, distinct from false (0) and
/// true (1).
pub const WIRE_NULL_BIT: u8 = 0x02;

//==================================================================================
// 2. The Registry
//==================================================================================

/// A reserved wire pattern, tagged by the wire element width it applies to.
/// Floating patterns are carried as raw bits: NaN payloads must be compared
/// exactly, never through `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireSentinel {
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32Bits(u32),
    F64Bits(u64),
}

static NULL_SENTINELS: OnceLock<HashMap<SqlDataType, WireSentinel>> = OnceLock::new();

fn build_table() -> HashMap<SqlDataType, WireSentinel> {
    let mut m = HashMap::new();
    m.insert(SqlDataType::TinyInt, WireSentinel::U8(WIRE_NULL_TINYINT));
    m.insert(SqlDataType::SmallInt, WireSentinel::I16(WIRE_NULL_SMALLINT));
    m.insert(SqlDataType::Integer, WireSentinel::I32(WIRE_NULL_INTEGER));
    m.insert(SqlDataType::BigInt, WireSentinel::I64(WIRE_NULL_BIGINT));
    m.insert(SqlDataType::Real, WireSentinel::F32Bits(WIRE_NULL_REAL_BITS));
    m.insert(
        SqlDataType::Double,
        WireSentinel::F64Bits(WIRE_NULL_DOUBLE_BITS),
    );
    m.insert(SqlDataType::Bit, WireSentinel::U8(WIRE_NULL_BIT));
    m
}

/// Looks up the reserved missing pattern for a wire type. Returns `None` for
/// every type outside the numeric/logical family.
pub fn null_sentinel(data_type: SqlDataType) -> Option<WireSentinel> {
    NULL_SENTINELS.get_or_init(build_table).get(&data_type).copied()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
