//! Pure, stateless conversion kernels, one module per wire type family.
//!
//! Kernels know nothing about dispatch or metadata: they receive a row count,
//! a byte buffer, and a null policy, and produce plain element sequences (or
//! the reverse). The `bridge` module is the only caller.

pub(crate) mod decimal;
pub(crate) mod fixed;
pub(crate) mod raw;
pub(crate) mod temporal;
pub(crate) mod text;
