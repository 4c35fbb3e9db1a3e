//! Client builder with dependency injection pattern.

use client_blockchain_core::{GatewayFactory, WalletProvider};
use client_frontend_core::GameController;

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Builder for constructing a [`Client`] with proper validation.
///
/// Both the controller and the frontend are required; `build` fails fast when
/// either is missing.
pub struct ClientBuilder<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    controller: Option<GameController<W, F>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl<W, F> Default for ClientBuilder<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    fn default() -> Self {
        Self {
            controller: None,
            frontend: None,
        }
    }
}

impl<W, F> ClientBuilder<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game controller (required).
    pub fn controller(mut self, controller: GameController<W, F>) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller or the frontend is not set.
    pub fn build(self) -> Result<Client<W, F>> {
        let controller = self
            .controller
            .context("Controller is required. Use .controller() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            controller,
            frontend,
        })
    }
}
