//! Common types for wallet and contract interactions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use alloy_primitives::{Address, B256 as TxHash};

/// Chain identifier.
///
/// Wallets report chain ids as `0x`-prefixed hex (`"0x45a"`) while deployment
/// files key them by decimal string (`"1114"`). Both forms parse into the same
/// value; `Display` and serde always use the decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Hex form expected by `wallet_switchEthereumChain` / `wallet_addEthereumChain`.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid chain id: {0:?}")]
pub struct InvalidChainId(pub String);

impl FromStr for ChainId {
    type Err = InvalidChainId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };
        parsed
            .map(Self)
            .map_err(|_| InvalidChainId(s.to_string()))
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Native currency metadata for `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Everything a wallet needs to add a network it does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    pub block_explorer_urls: Vec<String>,
}

/// Notifications emitted by the wallet outside of any request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The wallet moved to another network.
    ChainChanged(ChainId),

    /// The set of exposed accounts changed (empty when the user disconnected).
    AccountsChanged(Vec<Address>),
}

/// Confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Transaction hash
    pub transaction_hash: TxHash,

    /// Block the transaction was included in
    pub block_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_accepts_decimal_and_hex() {
        assert_eq!("1114".parse::<ChainId>().unwrap(), ChainId::new(1114));
        assert_eq!("0x45a".parse::<ChainId>().unwrap(), ChainId::new(1114));
        assert_eq!("0x45A".parse::<ChainId>().unwrap(), ChainId::new(1114));
        assert!("core".parse::<ChainId>().is_err());
        assert!("".parse::<ChainId>().is_err());
    }

    #[test]
    fn chain_id_formats() {
        let id = ChainId::new(1114);
        assert_eq!(id.to_string(), "1114");
        assert_eq!(id.to_hex(), "0x45a");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1114\"");
        let back: ChainId = serde_json::from_str("\"0x45a\"").unwrap();
        assert_eq!(back, id);
    }
}
