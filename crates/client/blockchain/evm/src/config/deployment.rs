//! Deployment information loading.
//!
//! The chain mapping ships embedded in the binary (`deployments.json`). A file
//! pointed to by `GUESS_DEPLOYMENTS` replaces it entirely; there is no merging.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use client_blockchain_core::ChainConfig;

const BUILTIN_DEPLOYMENTS: &str = include_str!("../../deployments.json");

/// Chain mapping compiled into the binary.
pub fn builtin_chain_config() -> Result<ChainConfig> {
    ChainConfig::from_json(BUILTIN_DEPLOYMENTS).context("Built-in deployments are malformed")
}

/// Load the chain mapping from `path`, or the built-in one when `None`.
pub fn load_chain_config(path: Option<&Path>) -> Result<ChainConfig> {
    let Some(path) = path else {
        return builtin_chain_config();
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deployments from {}", path.display()))?;

    ChainConfig::from_json(&json)
        .with_context(|| format!("Invalid deployments in {}", path.display()))
}
