//! Top-level client wiring the game controller to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameController (session state, wallet and contract calls)
//!   │     ├─→ WalletProvider (EIP-1193 wallet)
//!   │     └─→ GatewayFactory (binds the contract for the current chain)
//!   └─→ Frontend (input and rendering - CLI, GUI, etc.)
//! ```
//!
//! The client owns the event loop: it waits on either the next player intent
//! or the next wallet notification, applies it to the controller, then hands
//! the new view to the frontend.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_blockchain_core::{GatewayFactory, WalletProvider};
use client_frontend_core::{GameController, UserIntent};
use tokio::sync::broadcast::error::RecvError;

/// Top-level client container.
pub struct Client<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    controller: GameController<W, F>,
    frontend: Box<dyn Frontend>,
}

impl<W, F> Client<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder<W, F> {
        ClientBuilder::new()
    }

    pub fn controller(&self) -> &GameController<W, F> {
        &self.controller
    }

    /// Run until the player quits or input ends.
    ///
    /// Failed operations are reported to the frontend and never end the loop;
    /// the controller has already moved to a state the player can retry from.
    pub async fn run(mut self) -> Result<GameController<W, F>> {
        let mut events = self.controller.subscribe();
        let mut events_open = true;

        if let Err(e) = self.controller.initialize().await {
            tracing::warn!("Initialization failed: {}", e);
            self.frontend.report(&e);
        }
        self.frontend.render(&self.controller.view());

        loop {
            tokio::select! {
                // Wallet notifications go before any queued input.
                biased;

                event = events.recv(), if events_open => {
                    let result = match event {
                        Ok(event) => self.controller.handle_wallet_event(event).await,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Missed {} wallet events, reinitializing", skipped);
                            self.controller.initialize().await
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("Wallet event stream closed");
                            events_open = false;
                            Ok(())
                        }
                    };
                    if let Err(e) = result {
                        self.frontend.report(&e);
                    }
                }
                intent = self.frontend.next_intent() => {
                    let Some(intent) = intent else {
                        tracing::info!("Frontend input exhausted");
                        break;
                    };
                    if intent == UserIntent::Quit {
                        tracing::info!("Player quit");
                        break;
                    }
                    tracing::debug!("Applying {:?}", intent);
                    if let Err(e) = self.controller.apply(intent).await {
                        self.frontend.report(&e);
                    }
                }
            }
            self.frontend.render(&self.controller.view());
        }

        Ok(self.controller)
    }
}
