//! This module defines the core, strongly-typed data representations used
//! throughout the typebridge conversion layer.
//!
//! It includes the canonical `SqlDataType` enum describing the closed set of
//! supported wire types, and the `NativeVector` enum modeling the host
//! runtime's tagged, nullable, homogeneous vector values.

pub mod native_vector;
pub mod sql_data_type;

// Re-export the main types for easier access.
pub use native_vector::{
    is_na_logical, is_na_real, na_real, NativeVector, NA_INTEGER, NA_LOGICAL, NA_REAL_BITS,
};
pub use sql_data_type::SqlDataType;
