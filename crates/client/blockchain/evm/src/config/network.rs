//! EVM network configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use client_blockchain_core::{ChainId, NativeCurrency, NetworkDescriptor};

/// Networks the client knows how to ask a wallet to switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvmNetwork {
    /// Core blockchain testnet (chain 1114)
    CoreTestnet,
    /// Local development node (chain 31337)
    Local,
}

impl EvmNetwork {
    pub fn chain_id(&self) -> ChainId {
        match self {
            EvmNetwork::CoreTestnet => ChainId::new(1114),
            EvmNetwork::Local => ChainId::new(31337),
        }
    }

    pub fn default_rpc_url(&self) -> &str {
        match self {
            EvmNetwork::CoreTestnet => "https://rpc.test2.btcs.network/",
            EvmNetwork::Local => "http://127.0.0.1:8545",
        }
    }

    /// Parameters for `wallet_addEthereumChain`.
    pub fn descriptor(&self) -> NetworkDescriptor {
        match self {
            EvmNetwork::CoreTestnet => NetworkDescriptor {
                chain_id: self.chain_id(),
                chain_name: "Core Testnet".to_string(),
                rpc_urls: vec![self.default_rpc_url().to_string()],
                native_currency: NativeCurrency {
                    name: "TCore2".to_string(),
                    symbol: "TCORE2".to_string(),
                    decimals: 18,
                },
                block_explorer_urls: vec!["https://scan.test2.btcs.network/".to_string()],
            },
            EvmNetwork::Local => NetworkDescriptor {
                chain_id: self.chain_id(),
                chain_name: "Localhost".to_string(),
                rpc_urls: vec![self.default_rpc_url().to_string()],
                native_currency: NativeCurrency {
                    name: "Ether".to_string(),
                    symbol: "ETH".to_string(),
                    decimals: 18,
                },
                block_explorer_urls: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EvmNetwork::CoreTestnet => "core-testnet",
            EvmNetwork::Local => "local",
        }
    }
}

/// EVM-specific configuration.
#[derive(Debug, Clone)]
pub struct EvmConfig {
    /// Network the wallet is asked to switch to when unsupported
    pub network: EvmNetwork,

    /// Custom RPC endpoint URL (overrides network default)
    pub rpc_url: Option<String>,

    /// Deployment file overriding the built-in chain mapping
    pub deployments_path: Option<PathBuf>,

    /// Delay between receipt polls while a transaction is pending
    pub receipt_poll_interval: Duration,
}

impl EvmConfig {
    /// Create a new configuration targeting `network`.
    pub fn new(network: EvmNetwork) -> Self {
        Self {
            network,
            rpc_url: None,
            deployments_path: None,
            receipt_poll_interval: Duration::from_millis(1000),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUESS_NETWORK` - Network name (core-testnet, local) (default: local)
    /// - `GUESS_RPC_URL` - Custom RPC endpoint URL
    /// - `GUESS_DEPLOYMENTS` - Path to a deployment JSON file
    /// - `GUESS_RECEIPT_POLL_MS` - Receipt polling interval in ms (default: 1000)
    pub fn from_env() -> Result<Self, String> {
        let network = match env::var("GUESS_NETWORK")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "core-testnet" | "core" | "testnet" => EvmNetwork::CoreTestnet,
            "local" | "localhost" => EvmNetwork::Local,
            other => {
                return Err(format!(
                    "Invalid GUESS_NETWORK: {}. Must be core-testnet or local",
                    other
                ));
            }
        };

        let mut config = Self::new(network);
        config.rpc_url = env::var("GUESS_RPC_URL").ok();
        config.deployments_path = env::var("GUESS_DEPLOYMENTS").ok().map(PathBuf::from);

        if let Some(ms) = env::var("GUESS_RECEIPT_POLL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.receipt_poll_interval = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Set custom RPC URL.
    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = Some(url);
        self
    }

    /// Get the RPC URL (custom or default for network).
    pub fn get_rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = self.get_rpc_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("Invalid RPC URL format: {}", url));
        }

        if self.receipt_poll_interval.is_zero() {
            return Err("Receipt poll interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for EvmConfig {
    fn default() -> Self {
        Self::new(EvmNetwork::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_testnet_descriptor() {
        let descriptor = EvmNetwork::CoreTestnet.descriptor();
        assert_eq!(descriptor.chain_id.to_hex(), "0x45a");
        assert_eq!(descriptor.native_currency.symbol, "TCORE2");
        assert_eq!(
            descriptor.block_explorer_urls,
            vec!["https://scan.test2.btcs.network/".to_string()]
        );
    }

    #[test]
    fn rpc_url_override_and_validation() {
        let config = EvmConfig::default();
        assert_eq!(config.get_rpc_url(), "http://127.0.0.1:8545");
        assert!(config.validate().is_ok());

        let config = config.with_rpc_url("ws://node".to_string());
        assert!(config.validate().is_err());

        let mut config = EvmConfig::new(EvmNetwork::CoreTestnet);
        config.receipt_poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
