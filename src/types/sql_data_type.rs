//! This module defines the canonical, type-safe representation of the wire
//! (SQL/ODBC C) data types the bridge can convert.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of wire-level column types supported by the bridge.
///
/// This enum replaces raw integer type codes at every internal boundary,
/// enabling exhaustive dispatch and eliminating an entire class of runtime
/// errors. The integer codes themselves follow the ODBC C data type
/// numbering and are only touched at the call boundary via
/// [`SqlDataType::from_code`] and [`SqlDataType::code`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlDataType {
    /// 8-bit unsigned integer (`SQL_C_UTINYINT`).
    TinyInt,
    /// 16-bit signed integer (`SQL_C_SSHORT`).
    SmallInt,
    /// 32-bit signed integer (`SQL_C_SLONG`).
    Integer,
    /// 64-bit signed integer (`SQL_C_SBIGINT`).
    BigInt,
    /// 32-bit IEEE float (`SQL_C_FLOAT`).
    Real,
    /// 64-bit IEEE float (`SQL_C_DOUBLE`).
    Double,
    /// Single-byte boolean with a distinct "unknown" encoding (`SQL_C_BIT`).
    Bit,
    /// Variable-width single-byte (UTF-8) character data (`SQL_C_CHAR`).
    Char,
    /// Variable-width double-byte (UTF-16LE) character data (`SQL_C_WCHAR`).
    WChar,
    /// Variable-width binary data (`SQL_C_BINARY`).
    Binary,
    /// Structured calendar date (`SQL_C_TYPE_DATE`).
    Date,
    /// Structured date + time of day (`SQL_C_TYPE_TIMESTAMP`).
    Timestamp,
    /// Fixed-point decimal transported as a little-endian byte array
    /// (`SQL_C_NUMERIC`).
    Numeric,
}

impl SqlDataType {
    /// Resolves a wire-level type code into a `SqlDataType`.
    pub fn from_code(code: i16) -> Result<Self, BridgeError> {
        match code {
            -28 => Ok(Self::TinyInt),
            -15 => Ok(Self::SmallInt),
            -16 => Ok(Self::Integer),
            -25 => Ok(Self::BigInt),
            7 => Ok(Self::Real),
            8 => Ok(Self::Double),
            -7 => Ok(Self::Bit),
            1 => Ok(Self::Char),
            -8 => Ok(Self::WChar),
            -2 => Ok(Self::Binary),
            91 => Ok(Self::Date),
            93 => Ok(Self::Timestamp),
            2 => Ok(Self::Numeric),
            c => Err(BridgeError::UnsupportedType(format!(
                "Unknown wire type code {}",
                c
            ))),
        }
    }

    /// Returns the wire-level type code for this `SqlDataType`.
    pub fn code(&self) -> i16 {
        match self {
            Self::TinyInt => -28,
            Self::SmallInt => -15,
            Self::Integer => -16,
            Self::BigInt => -25,
            Self::Real => 7,
            Self::Double => 8,
            Self::Bit => -7,
            Self::Char => 1,
            Self::WChar => -8,
            Self::Binary => -2,
            Self::Date => 91,
            Self::Timestamp => 93,
            Self::Numeric => 2,
        }
    }

    /// Resolves a host-runtime class name into the wire type a vector of
    /// that class is marshaled as.
    pub fn from_type_name(name: &str) -> Result<Self, BridgeError> {
        match name {
            "double" | "numeric" => Ok(Self::Double),
            "integer" => Ok(Self::Integer),
            "logical" => Ok(Self::Bit),
            "character" => Ok(Self::Char),
            "raw" => Ok(Self::Binary),
            "Date" => Ok(Self::Date),
            "POSIXct" => Ok(Self::Timestamp),
            n => Err(BridgeError::UnsupportedType(format!(
                "Unknown host type name '{}'",
                n
            ))),
        }
    }

    /// Byte width of one wire element, or `None` for the variable-width
    /// character/binary families.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::TinyInt | Self::Bit => Some(1),
            Self::SmallInt => Some(2),
            Self::Integer | Self::Real => Some(4),
            Self::BigInt | Self::Double => Some(8),
            Self::Date => Some(std::mem::size_of::<crate::bridge::format::SqlDateStruct>()),
            Self::Timestamp => {
                Some(std::mem::size_of::<crate::bridge::format::SqlTimestampStruct>())
            }
            Self::Numeric => Some(std::mem::size_of::<crate::bridge::format::SqlNumericStruct>()),
            Self::Char | Self::WChar | Self::Binary => None,
        }
    }

    /// Returns `true` for the numeric/logical family whose missing values may
    /// be carried in-band by a reserved sentinel when no indicator array is
    /// supplied. Character, binary, decimal and temporal columns always use
    /// the explicit indicator mechanism.
    pub fn supports_sentinel_nulls(&self) -> bool {
        matches!(
            self,
            Self::TinyInt
                | Self::SmallInt
                | Self::Integer
                | Self::BigInt
                | Self::Real
                | Self::Double
                | Self::Bit
        )
    }
}

/// Provides the canonical string representation for a `SqlDataType`.
impl fmt::Display for SqlDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all_types() {
        let all = [
            SqlDataType::TinyInt,
            SqlDataType::SmallInt,
            SqlDataType::Integer,
            SqlDataType::BigInt,
            SqlDataType::Real,
            SqlDataType::Double,
            SqlDataType::Bit,
            SqlDataType::Char,
            SqlDataType::WChar,
            SqlDataType::Binary,
            SqlDataType::Date,
            SqlDataType::Timestamp,
            SqlDataType::Numeric,
        ];
        for dt in all {
            assert_eq!(SqlDataType::from_code(dt.code()).unwrap(), dt);
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        let result = SqlDataType::from_code(42);
        assert!(matches!(result, Err(BridgeError::UnsupportedType(_))));
    }

    #[test]
    fn test_from_type_name() {
        assert_eq!(
            SqlDataType::from_type_name("numeric").unwrap(),
            SqlDataType::Double
        );
        assert_eq!(
            SqlDataType::from_type_name("POSIXct").unwrap(),
            SqlDataType::Timestamp
        );
        assert!(SqlDataType::from_type_name("list").is_err());
    }

    #[test]
    fn test_sentinel_support_excludes_indicator_only_families() {
        for dt in [
            SqlDataType::Char,
            SqlDataType::WChar,
            SqlDataType::Binary,
            SqlDataType::Date,
            SqlDataType::Timestamp,
            SqlDataType::Numeric,
        ] {
            assert!(!dt.supports_sentinel_nulls(), "{} must be indicator-only", dt);
        }
        assert!(SqlDataType::Integer.supports_sentinel_nulls());
        assert!(SqlDataType::Bit.supports_sentinel_nulls());
    }
}
