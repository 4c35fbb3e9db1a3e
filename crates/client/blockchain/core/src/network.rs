//! Supported-network resolution and the switch/add flow.

use std::sync::Arc;

use crate::config::{ChainConfig, ChainConfigEntry};
use crate::traits::{WalletError, WalletProvider};
use crate::types::{ChainId, NetworkDescriptor};

/// Network the wallet reported, and whether the game is deployed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkContext {
    pub chain_id: ChainId,
    pub supported: bool,
}

/// Network flow errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Failed to resolve current network: {0}")]
    ResolveFailed(WalletError),

    #[error("Network switch failed: {0}")]
    SwitchFailed(WalletError),
}

/// Resolves the wallet's network against [`ChainConfig`].
pub struct NetworkValidator<W: ?Sized> {
    wallet: Arc<W>,
    chains: Arc<ChainConfig>,
}

impl<W: WalletProvider + ?Sized> NetworkValidator<W> {
    pub fn new(wallet: Arc<W>, chains: Arc<ChainConfig>) -> Self {
        Self { wallet, chains }
    }

    /// Ask the wallet for its chain and look it up.
    pub async fn resolve(&self) -> Result<NetworkContext, NetworkError> {
        let chain_id = self
            .wallet
            .current_network()
            .await
            .map_err(NetworkError::ResolveFailed)?;

        let supported = self.chains.contains(chain_id);
        if supported {
            tracing::debug!("Chain {} is supported", chain_id);
        } else {
            tracing::warn!(
                "Chain {} not found in config. Available chain IDs: {:?}",
                chain_id,
                self.chains.chain_ids().collect::<Vec<_>>()
            );
        }

        Ok(NetworkContext {
            chain_id,
            supported,
        })
    }

    /// Deployment for a supported context; `None` when unsupported.
    pub fn entry_for(&self, context: &NetworkContext) -> Option<&ChainConfigEntry> {
        if !context.supported {
            return None;
        }
        self.chains.lookup(context.chain_id).ok()
    }

    /// Switch the wallet to `target`, adding `descriptor` if the wallet does
    /// not know the chain. No retries.
    pub async fn switch_or_add(
        &self,
        target: ChainId,
        descriptor: &NetworkDescriptor,
    ) -> Result<(), NetworkError> {
        match self.wallet.switch_network(target).await {
            Ok(()) => {
                tracing::info!("Switched wallet to chain {}", target);
                Ok(())
            }
            Err(WalletError::UnknownChain(_)) => {
                tracing::info!(
                    "Chain {} unknown to wallet, adding {}",
                    target,
                    descriptor.chain_name
                );
                self.wallet
                    .add_network(descriptor)
                    .await
                    .map_err(NetworkError::SwitchFailed)
            }
            Err(e) => Err(NetworkError::SwitchFailed(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockWallet, core_testnet_descriptor};
    use crate::types::Address;

    fn chains() -> Arc<ChainConfig> {
        let address: Address = "0xabc0000000000000000000000000000000000001".parse().unwrap();
        Arc::new(
            ChainConfig::new()
                .with_entry(ChainId::new(1114), address)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn configured_chain_is_supported() {
        let wallet = Arc::new(MockWallet::on_chain(ChainId::new(1114)));
        let validator = NetworkValidator::new(wallet, chains());

        let context = validator.resolve().await.unwrap();
        assert!(context.supported);
        assert_eq!(context.chain_id, ChainId::new(1114));

        let entry = validator.entry_for(&context).unwrap();
        assert_eq!(
            entry.contract_address,
            "0xabc0000000000000000000000000000000000001"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[tokio::test]
    async fn absent_chain_is_unsupported() {
        let wallet = Arc::new(MockWallet::on_chain(ChainId::new(9999)));
        let validator = NetworkValidator::new(wallet, chains());

        let context = validator.resolve().await.unwrap();
        assert!(!context.supported);
        assert!(validator.entry_for(&context).is_none());
    }

    #[tokio::test]
    async fn switch_to_known_chain() {
        let wallet = Arc::new(MockWallet::on_chain(ChainId::new(9999)));
        wallet.add_known_chain(ChainId::new(1114));
        let validator = NetworkValidator::new(wallet.clone(), chains());

        validator
            .switch_or_add(ChainId::new(1114), &core_testnet_descriptor())
            .await
            .unwrap();

        assert_eq!(wallet.chain(), ChainId::new(1114));
        assert!(wallet.added_networks().is_empty());
    }

    #[tokio::test]
    async fn unknown_chain_falls_back_to_add() {
        let wallet = Arc::new(MockWallet::on_chain(ChainId::new(9999)));
        let validator = NetworkValidator::new(wallet.clone(), chains());

        validator
            .switch_or_add(ChainId::new(1114), &core_testnet_descriptor())
            .await
            .unwrap();

        assert_eq!(wallet.added_networks(), vec![ChainId::new(1114)]);
        assert_eq!(wallet.chain(), ChainId::new(1114));
    }

    #[tokio::test]
    async fn other_switch_failures_are_surfaced() {
        let wallet = Arc::new(MockWallet::on_chain(ChainId::new(9999)));
        wallet.fail_switch_with(WalletError::UserRejected);
        let validator = NetworkValidator::new(wallet.clone(), chains());

        let err = validator
            .switch_or_add(ChainId::new(1114), &core_testnet_descriptor())
            .await
            .unwrap_err();

        assert_eq!(err, NetworkError::SwitchFailed(WalletError::UserRejected));
        assert!(wallet.added_networks().is_empty());
        assert_eq!(wallet.chain(), ChainId::new(9999));
    }
}
