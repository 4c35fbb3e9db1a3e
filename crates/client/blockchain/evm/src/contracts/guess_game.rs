//! GuessGame contract integration.
//!
//! ## Solidity Interface Reference
//!
//! ```solidity
//! contract GuessGame {
//!     uint256 public secret;
//!     function getAttempts(address player) external view returns (uint256);
//!     function makeGuess(uint256 guess) external;
//!     function resetGame() external;
//! }
//! ```
//!
//! `secret` is public storage, so anyone can read the answer. The client
//! relies on exactly that read to judge each guess; the weakness belongs to
//! the game contract and is deliberately left as-is here.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;
use alloy_sol_types::{SolCall, sol};
use async_trait::async_trait;
use client_blockchain_core::{
    Address, ChainConfigEntry, ChainId, ContractError, ContractGateway, GatewayFactory,
    TransactionReceipt, TxHash,
};
use serde_json::{Value, json};

use crate::transport::Eip1193Transport;
use crate::utils::{encode_bytes, parse_bytes, parse_quantity, u256_to_u64};

sol! {
    /// On-chain guess-the-number game.
    interface IGuessGame {
        function secret() external view returns (uint256);
        function getAttempts(address player) external view returns (uint256);
        function makeGuess(uint256 guess) external;
        function resetGame() external;
    }
}

// ============================================================================
// GuessGameContract - one deployment on one chain
// ============================================================================

/// Binding of the GuessGame ABI to a deployed address on one chain.
///
/// Reads go through `eth_call`; writes go through `eth_sendTransaction` and
/// then poll `eth_getTransactionReceipt` until the transaction is mined.
/// There is no timeout: a pending transaction is awaited until the node
/// reports a receipt or an error.
pub struct GuessGameContract<T: ?Sized> {
    transport: Arc<T>,
    address: Address,
    chain_id: ChainId,
    poll_interval: Duration,
}

impl<T: Eip1193Transport + ?Sized> GuessGameContract<T> {
    pub fn new(
        transport: Arc<T>,
        address: Address,
        chain_id: ChainId,
        poll_interval: Duration,
    ) -> Self {
        Self {
            transport,
            address,
            chain_id,
            poll_interval,
        }
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, ContractError> {
        let params = json!([
            { "to": self.address, "data": encode_bytes(&call.abi_encode()) },
            "latest",
        ]);
        let result = self
            .transport
            .request("eth_call", params)
            .await
            .map_err(|e| e.into_read_error())?;

        let data = parse_bytes(&result).map_err(ContractError::ReadFailure)?;
        C::abi_decode_returns(&data, true).map_err(|e| ContractError::ReadFailure(e.to_string()))
    }

    async fn send<C: SolCall>(
        &self,
        from: Address,
        call: C,
    ) -> Result<TransactionReceipt, ContractError> {
        let params = json!([{
            "from": from,
            "to": self.address,
            "data": encode_bytes(&call.abi_encode()),
        }]);
        let result = self
            .transport
            .request("eth_sendTransaction", params)
            .await
            .map_err(|e| e.into_write_error())?;

        let hash = result
            .as_str()
            .and_then(|s| s.parse::<TxHash>().ok())
            .ok_or_else(|| {
                ContractError::NetworkError(format!("invalid transaction hash: {}", result))
            })?;

        tracing::info!("Transaction {} submitted, awaiting confirmation", hash);
        self.wait_for_receipt(hash).await
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TransactionReceipt, ContractError> {
        loop {
            let receipt = self
                .transport
                .request("eth_getTransactionReceipt", json!([hash]))
                .await
                .map_err(|e| ContractError::NetworkError(e.to_string()))?;

            if receipt.is_null() {
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            return parse_receipt(hash, &receipt);
        }
    }
}

fn parse_receipt(hash: TxHash, receipt: &Value) -> Result<TransactionReceipt, ContractError> {
    let status = parse_quantity(&receipt["status"]).map_err(ContractError::NetworkError)?;
    let block_number =
        parse_quantity(&receipt["blockNumber"]).map_err(ContractError::NetworkError)?;

    if status == 0 {
        tracing::warn!("Transaction {} reverted in block {}", hash, block_number);
        return Err(ContractError::TransactionReverted(format!(
            "transaction {} reverted",
            hash
        )));
    }

    tracing::info!("Transaction {} confirmed in block {}", hash, block_number);
    Ok(TransactionReceipt {
        transaction_hash: hash,
        block_number,
    })
}

fn narrow(value: U256) -> Result<u64, ContractError> {
    u256_to_u64(value).map_err(ContractError::ReadFailure)
}

#[async_trait]
impl<T: Eip1193Transport + ?Sized> ContractGateway for GuessGameContract<T> {
    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    async fn read_secret(&self) -> Result<u64, ContractError> {
        let value = self.call(IGuessGame::secretCall {}).await?._0;
        narrow(value)
    }

    async fn read_attempts(&self, account: Address) -> Result<u64, ContractError> {
        let value = self
            .call(IGuessGame::getAttemptsCall { player: account })
            .await?
            ._0;
        narrow(value)
    }

    async fn submit_guess(
        &self,
        account: Address,
        value: u64,
    ) -> Result<TransactionReceipt, ContractError> {
        self.send(
            account,
            IGuessGame::makeGuessCall {
                guess: U256::from(value),
            },
        )
        .await
    }

    async fn reset_game(&self, account: Address) -> Result<TransactionReceipt, ContractError> {
        self.send(account, IGuessGame::resetGameCall {}).await
    }
}

// ============================================================================
// EvmGatewayFactory
// ============================================================================

/// Builds a [`GuessGameContract`] for each resolved chain entry, sharing one transport.
pub struct EvmGatewayFactory<T: ?Sized> {
    transport: Arc<T>,
    poll_interval: Duration,
}

impl<T: Eip1193Transport + ?Sized> EvmGatewayFactory<T> {
    pub fn new(transport: Arc<T>, poll_interval: Duration) -> Self {
        Self {
            transport,
            poll_interval,
        }
    }
}

impl<T: Eip1193Transport + ?Sized + 'static> GatewayFactory for EvmGatewayFactory<T> {
    type Gateway = GuessGameContract<T>;

    fn bind(&self, entry: &ChainConfigEntry) -> GuessGameContract<T> {
        tracing::debug!(
            "Binding GuessGame at {} on chain {}",
            entry.contract_address,
            entry.chain_id
        );
        GuessGameContract::new(
            self.transport.clone(),
            entry.contract_address,
            entry.chain_id,
            self.poll_interval,
        )
    }
}
