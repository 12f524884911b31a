//! This file is the root of the `typebridge` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`bridge`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the public conversion API and its supporting types.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;

mod error;
mod kernels;
mod null_handling;
mod types;

//==================================================================================
// 2. Public API
//==================================================================================
pub use bridge::format::{
    ColumnMeta, EncodedColumn, SqlDateStruct, SqlNumericStruct, SqlTimestampStruct,
    MAX_NUMERIC_LEN, NULL_DATA,
};
pub use bridge::{decode_column, encode_column};
pub use error::BridgeError;
pub use null_handling::{null_sentinel, NullPolicy, WireSentinel};
pub use types::{NativeVector, SqlDataType, NA_INTEGER, NA_LOGICAL, NA_REAL_BITS};
