//! [`WalletProvider`] over an EIP-1193 transport.

use std::sync::Arc;

use async_trait::async_trait;
use client_blockchain_core::{
    Address, ChainId, NativeCurrency, NetworkDescriptor, WalletError, WalletEvent, WalletProvider,
};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;

use crate::transport::Eip1193Transport;

/// Wallet adapter relaying to an injected EIP-1193 provider.
pub struct Eip1193Wallet<T: ?Sized> {
    transport: Arc<T>,
}

/// `wallet_addEthereumChain` parameter object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddEthereumChainParameter<'a> {
    chain_id: String,
    chain_name: &'a str,
    rpc_urls: &'a [String],
    native_currency: &'a NativeCurrency,
    block_explorer_urls: &'a [String],
}

impl<T: Eip1193Transport + ?Sized> Eip1193Wallet<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    async fn request(
        &self,
        method: &str,
        params: Value,
        requested_chain: Option<ChainId>,
    ) -> Result<Value, WalletError> {
        if !self.transport.is_available() {
            return Err(WalletError::Unavailable);
        }
        self.transport
            .request(method, params)
            .await
            .map_err(|e| e.into_wallet_error(requested_chain))
    }
}

#[async_trait]
impl<T: Eip1193Transport + ?Sized> WalletProvider for Eip1193Wallet<T> {
    fn is_available(&self) -> bool {
        self.transport.is_available()
    }

    async fn current_network(&self) -> Result<ChainId, WalletError> {
        let result = self.request("eth_chainId", json!([]), None).await?;
        let raw = result
            .as_str()
            .ok_or_else(|| WalletError::InvalidResponse(format!("eth_chainId: {}", result)))?;
        raw.parse()
            .map_err(|e: client_blockchain_core::InvalidChainId| {
                WalletError::InvalidResponse(e.to_string())
            })
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let result = self.request("eth_requestAccounts", json!([]), None).await?;
        let items = result.as_array().ok_or_else(|| {
            WalletError::InvalidResponse("eth_requestAccounts result must be array".to_string())
        })?;

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .and_then(|s| s.parse::<Address>().ok())
                    .ok_or_else(|| {
                        WalletError::InvalidResponse(format!(
                            "eth_requestAccounts item is not an address: {}",
                            item
                        ))
                    })
            })
            .collect()
    }

    async fn switch_network(&self, chain_id: ChainId) -> Result<(), WalletError> {
        self.request(
            "wallet_switchEthereumChain",
            json!([{ "chainId": chain_id.to_hex() }]),
            Some(chain_id),
        )
        .await?;
        Ok(())
    }

    async fn add_network(&self, descriptor: &NetworkDescriptor) -> Result<(), WalletError> {
        let parameter = AddEthereumChainParameter {
            chain_id: descriptor.chain_id.to_hex(),
            chain_name: &descriptor.chain_name,
            rpc_urls: &descriptor.rpc_urls,
            native_currency: &descriptor.native_currency,
            block_explorer_urls: &descriptor.block_explorer_urls,
        };
        self.request(
            "wallet_addEthereumChain",
            json!([parameter]),
            Some(descriptor.chain_id),
        )
        .await?;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.transport.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmNetwork;
    use crate::core::ProviderError;
    use crate::transport::scripted::ScriptedTransport;

    fn wallet() -> (Arc<ScriptedTransport>, Eip1193Wallet<ScriptedTransport>) {
        let transport = Arc::new(ScriptedTransport::new());
        (transport.clone(), Eip1193Wallet::new(transport))
    }

    #[tokio::test]
    async fn reads_hex_chain_id() {
        let (transport, wallet) = wallet();
        transport.respond("eth_chainId", Ok(json!("0x45a")));

        assert_eq!(wallet.current_network().await.unwrap(), ChainId::new(1114));
    }

    #[tokio::test]
    async fn parses_accounts() {
        let (transport, wallet) = wallet();
        transport.respond(
            "eth_requestAccounts",
            Ok(json!(["0x1111111111111111111111111111111111111111"])),
        );

        let accounts = wallet.request_accounts().await.unwrap();
        assert_eq!(accounts, vec![Address::repeat_byte(0x11)]);
    }

    #[tokio::test]
    async fn account_rejection_is_recoverable() {
        let (transport, wallet) = wallet();
        transport.respond(
            "eth_requestAccounts",
            Err(ProviderError::rpc(4001, "User rejected the request.")),
        );

        assert_eq!(
            wallet.request_accounts().await.unwrap_err(),
            WalletError::UserRejected
        );
    }

    #[tokio::test]
    async fn switch_reports_unknown_chain() {
        let (transport, wallet) = wallet();
        transport.respond(
            "wallet_switchEthereumChain",
            Err(ProviderError::rpc(4902, "Unrecognized chain ID")),
        );

        let err = wallet.switch_network(ChainId::new(1114)).await.unwrap_err();
        assert_eq!(err, WalletError::UnknownChain(ChainId::new(1114)));

        let calls = transport.calls();
        assert_eq!(calls[0].1, json!([{ "chainId": "0x45a" }]));
    }

    #[tokio::test]
    async fn add_network_sends_descriptor() {
        let (transport, wallet) = wallet();
        transport.respond("wallet_addEthereumChain", Ok(Value::Null));

        wallet
            .add_network(&EvmNetwork::CoreTestnet.descriptor())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, "wallet_addEthereumChain");
        assert_eq!(
            calls[0].1,
            json!([{
                "chainId": "0x45a",
                "chainName": "Core Testnet",
                "rpcUrls": ["https://rpc.test2.btcs.network/"],
                "nativeCurrency": { "name": "TCore2", "symbol": "TCORE2", "decimals": 18 },
                "blockExplorerUrls": ["https://scan.test2.btcs.network/"],
            }])
        );
    }
}
