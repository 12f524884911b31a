// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the typebridge library. It is
// the authoritative boundary between the wire world (raw column buffers and
// indicator arrays handed over by the database transport) and the native
// world (the host runtime's tagged vectors).
//
// Data Flow (Inbound):
//
//   1. [Transport Layer]            -> hands over (ColumnMeta, rows, &[u8], Option<&[i64]>)
//         |
//   2. [inbound::decode_column]     -> a. Selects the NullPolicy for the column
//         |                            b. Dispatches by SqlDataType to a pure kernel
//         |
//   3. [kernels::*]                 -> Return plain element sequences
//         |
//   4. [inbound::decode_column]     -> Tags them as the matching NativeVector variant
//
// Data Flow (Outbound):
//
//   1. [Host Runtime]               -> hands over (&NativeVector, ColumnMeta, max element width)
//         |
//   2. [outbound::encode_column]    -> Dispatches by (SqlDataType, variant) to a pure kernel
//         |
//   3. [kernels::*]                 -> Return (raw buffer, indicator array, null/width facts)
//         |
//   4. [outbound::encode_column]    -> Assembles the EncodedColumn for the transport layer
//
// Every conversion is synchronous and stateless; buffers stay caller-owned
// and are never retained past the call.
// ====================================================================================
pub mod format;
pub(crate) mod inbound;
pub(crate) mod outbound;

// --- The Stateless Conversion API ---
pub use inbound::decode_column;
pub use outbound::encode_column;
