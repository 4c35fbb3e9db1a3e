//! Guess-the-number client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Wallet (EIP-1193 over JSON-RPC) and the chain deployment mapping
//! 2. GameController (session state machine)
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! # Examples
//!
//! ```bash
//! # Against a local development node with the game deployed
//! GUESS_NETWORK=local cargo run -p guess-client
//!
//! # Core Testnet, with a deployment file carrying the contract address
//! GUESS_NETWORK=core-testnet GUESS_DEPLOYMENTS=deployments.json cargo run -p guess-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    #[cfg(all(feature = "frontend-cli", feature = "blockchain-evm"))]
    {
        run_cli().await?;
    }

    #[cfg(not(all(feature = "frontend-cli", feature = "blockchain-evm")))]
    {
        compile_error!("The binary needs the frontend-cli and blockchain-evm features");
    }

    Ok(())
}

/// Run the CLI frontend against an EVM wallet.
#[cfg(all(feature = "frontend-cli", feature = "blockchain-evm"))]
async fn run_cli() -> Result<()> {
    use std::sync::Arc;

    use client_blockchain_evm::{
        Eip1193Wallet, EvmConfig, EvmGatewayFactory, HttpTransport, load_chain_config,
    };
    use client_frontend_cli::{CliConfig, CliFrontend, GameConfig, logging};
    use client_frontend_core::GameController;
    use guess_client::Client;

    // 1. Load configuration from environment
    let cli_config = CliConfig::from_env();
    let game_config = GameConfig::from_env();
    let evm_config = EvmConfig::from_env().map_err(anyhow::Error::msg)?;
    evm_config.validate().map_err(anyhow::Error::msg)?;

    // 2. Setup logging
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting guess client");
    tracing::info!("Target network: {}", evm_config.network.name());
    tracing::info!("RPC endpoint: {}", evm_config.get_rpc_url());

    // 3. Wallet and deployments
    let chains = load_chain_config(evm_config.deployments_path.as_deref())?;
    tracing::info!(
        "Game deployed on chains: {:?}",
        chains.chain_ids().collect::<Vec<_>>()
    );
    if !chains.contains(evm_config.network.chain_id()) {
        tracing::warn!(
            "No deployment for target network {} ({}); switching there will not enable play",
            evm_config.network.name(),
            evm_config.network.chain_id()
        );
    }

    let transport = Arc::new(HttpTransport::new(evm_config.get_rpc_url()));
    let wallet = Arc::new(Eip1193Wallet::new(transport.clone()));
    let gateways = EvmGatewayFactory::new(transport, evm_config.receipt_poll_interval);

    // 4. Controller and frontend
    let controller = GameController::new(
        wallet,
        Arc::new(chains),
        gateways,
        evm_config.network.descriptor(),
        game_config,
    );
    let frontend = CliFrontend::stdio(cli_config);

    // 5. Build and run
    let client = Client::builder()
        .controller(controller)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
