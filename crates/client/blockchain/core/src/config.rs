//! Static chain id → deployment mapping.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{Address, ChainId, InvalidChainId};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Chain {0} is not configured")]
    NotFound(ChainId),

    #[error("Chain {0} is configured more than once")]
    DuplicateChain(ChainId),

    #[error(transparent)]
    InvalidChainId(#[from] InvalidChainId),

    #[error("Malformed deployment data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deployment of the game contract on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfigEntry {
    pub chain_id: ChainId,
    pub contract_address: Address,
}

/// Immutable mapping from chain id to the game contract deployed there.
///
/// A chain missing from the mapping is, by definition, unsupported.
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    entries: BTreeMap<ChainId, ChainConfigEntry>,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, rejecting a second entry for the same chain.
    pub fn with_entry(
        mut self,
        chain_id: ChainId,
        contract_address: Address,
    ) -> Result<Self, ConfigError> {
        if self.entries.contains_key(&chain_id) {
            return Err(ConfigError::DuplicateChain(chain_id));
        }
        self.entries.insert(
            chain_id,
            ChainConfigEntry {
                chain_id,
                contract_address,
            },
        );
        Ok(self)
    }

    /// Parse the deployment file layout:
    ///
    /// ```json
    /// { "1114": { "guessGame": { "address": "0x…" } } }
    /// ```
    ///
    /// Keys may be decimal or `0x` hex; two keys naming the same chain are an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let records: BTreeMap<String, DeploymentRecord> = serde_json::from_str(json)?;

        records.into_iter().try_fold(Self::new(), |config, (key, record)| {
            let chain_id = key.parse::<ChainId>()?;
            config.with_entry(chain_id, record.guess_game.address)
        })
    }

    pub fn lookup(&self, chain_id: ChainId) -> Result<&ChainConfigEntry, ConfigError> {
        self.entries
            .get(&chain_id)
            .ok_or(ConfigError::NotFound(chain_id))
    }

    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.entries.contains_key(&chain_id)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct DeploymentRecord {
    #[serde(rename = "guessGame")]
    guess_game: ContractRecord,
}

#[derive(Deserialize)]
struct ContractRecord {
    address: Address,
}
