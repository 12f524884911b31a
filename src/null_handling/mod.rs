//! Null-handling strategies for the bridge.
//!
//! Two distinct conventions coexist on the wire: the numeric/logical family
//! may carry missing values in-band as a reserved bit pattern (`sentinel`),
//! while every other family marks them out-of-band in the indicator array
//! (`policy` selects between the two per column).

pub mod policy;
pub mod sentinel;

pub use policy::NullPolicy;
pub use sentinel::{null_sentinel, WireSentinel};
