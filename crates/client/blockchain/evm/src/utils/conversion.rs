//! Conversions between JSON-RPC hex encodings and Rust values.

use alloy_primitives::U256;
use serde_json::Value;

/// `0x`-prefixed hex for call data.
pub fn encode_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode `0x`-prefixed hex data (`eth_call` results).
pub fn parse_bytes(value: &Value) -> Result<Vec<u8>, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("expected hex string, got {}", value))?;
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    hex::decode(digits).map_err(|e| format!("invalid hex data {:?}: {}", raw, e))
}

/// Decode a hex quantity (`"0x1a"`) such as a block number or receipt status.
pub fn parse_quantity(value: &Value) -> Result<u64, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("expected hex quantity, got {}", value))?;
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| format!("quantity {:?} is missing 0x prefix", raw))?;
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid quantity {:?}: {}", raw, e))
}

/// Narrow a contract `uint256` to `u64`.
pub fn u256_to_u64(value: U256) -> Result<u64, String> {
    let limbs = value.as_limbs();
    if limbs[1..].iter().any(|&limb| limb != 0) {
        return Err(format!("value {} does not fit in u64", value));
    }
    Ok(limbs[0])
}
