//! JSON-RPC value conversion helpers.

pub mod conversion;

pub use conversion::{encode_bytes, parse_bytes, parse_quantity, u256_to_u64};
