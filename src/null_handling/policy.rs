//! Per-column selection between the two null conventions.
//!
//! A column's nulls come either from the explicit indicator array or from the
//! reserved in-band sentinel, never both. The choice is made once per
//! conversion call, here, instead of being re-derived inside every converter.

use crate::bridge::format::ColumnMeta;
use crate::error::BridgeError;
use crate::null_handling::sentinel::null_sentinel;

/// The nullability strategy for one column conversion.
#[derive(Debug, Clone, Copy)]
pub enum NullPolicy<'a> {
    /// Explicit per-row indicators: a negative entry marks the row null.
    Indicator(&'a [i64]),
    /// No indicators supplied; the wire value itself carries the reserved
    /// missing pattern. Only valid for the numeric/logical family.
    Sentinel,
    /// The column cannot contain nulls.
    NotNull,
}

impl<'a> NullPolicy<'a> {
    /// Selects the policy for a column, validating the indicator array
    /// length against the declared row count.
    ///
    /// Nullability is gated by the caller's declaration: a non-nullable
    /// column skips null probing entirely, even if indicators are supplied.
    /// A nullable column without indicators falls back to the reserved
    /// sentinel where the type family has one; the indicator-only families
    /// (character, binary, decimal, temporal) then carry no nulls.
    pub fn for_column(
        meta: &ColumnMeta,
        indicators: Option<&'a [i64]>,
        rows: usize,
    ) -> Result<Self, BridgeError> {
        if let Some(ind) = indicators {
            if ind.len() < rows {
                return Err(BridgeError::IndicatorMismatch(rows, ind.len()));
            }
        }
        if !meta.nullable {
            return Ok(Self::NotNull);
        }
        match indicators {
            Some(ind) => Ok(Self::Indicator(ind)),
            None if null_sentinel(meta.data_type).is_some() => Ok(Self::Sentinel),
            None => Ok(Self::NotNull),
        }
    }

    /// Whether the indicator (if this policy carries one) marks `row` null.
    /// Sentinel probing is the fixed-width codec's job; this only answers
    /// for the indicator strategy.
    #[inline]
    pub fn indicator_marks_null(&self, row: usize) -> bool {
        matches!(self, Self::Indicator(ind) if ind[row] < 0)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlDataType;

    #[test]
    fn test_indicators_win_over_sentinel_when_present() {
        let meta = ColumnMeta::new(SqlDataType::Integer, true);
        let ind = vec![4i64, -1, 4];
        let policy = NullPolicy::for_column(&meta, Some(&ind), 3).unwrap();
        assert!(matches!(policy, NullPolicy::Indicator(_)));
        assert!(policy.indicator_marks_null(1));
        assert!(!policy.indicator_marks_null(0));
    }

    #[test]
    fn test_nullable_fixed_column_without_indicators_uses_sentinel() {
        let meta = ColumnMeta::new(SqlDataType::Double, true);
        let policy = NullPolicy::for_column(&meta, None, 10).unwrap();
        assert!(matches!(policy, NullPolicy::Sentinel));
    }

    #[test]
    fn test_indicator_only_family_without_indicators_has_no_nulls() {
        let meta = ColumnMeta::decimal(18, 4, true);
        let policy = NullPolicy::for_column(&meta, None, 5).unwrap();
        assert!(matches!(policy, NullPolicy::NotNull));
    }

    #[test]
    fn test_not_nullable_column_ignores_indicators() {
        let meta = ColumnMeta::new(SqlDataType::Integer, false);
        let ind = vec![-1i64; 4];
        let policy = NullPolicy::for_column(&meta, Some(&ind), 4).unwrap();
        assert!(matches!(policy, NullPolicy::NotNull));
    }

    #[test]
    fn test_short_indicator_array_is_rejected() {
        let meta = ColumnMeta::new(SqlDataType::Integer, true);
        let ind = vec![4i64, 4];
        let result = NullPolicy::for_column(&meta, Some(&ind), 3);
        assert!(matches!(result, Err(BridgeError::IndicatorMismatch(3, 2))));
    }
}
