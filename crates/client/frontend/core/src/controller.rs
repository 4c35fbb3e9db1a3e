//! Game session state machine.
//!
//! [`GameController`] owns the wallet session, the resolved network, the bound
//! contract gateway and the game data read back from it. Frontends drive it
//! through [`GameController::apply`] and render [`GameController::view`].
//!
//! Operations run one at a time: every entry point takes `&mut self`, and a
//! controller resting in a transient phase refuses new work with
//! [`GameError::Busy`].

use std::sync::Arc;

use client_blockchain_core::{
    Address, ChainConfig, ContractError, ContractGateway, GatewayFactory, NetworkContext,
    NetworkDescriptor, NetworkError, NetworkValidator, WalletError, WalletEvent, WalletProvider,
};
use tokio::sync::broadcast;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::frontend::UserIntent;
use crate::message::{MessageLevel, MessageLog, texts};
use crate::outcome::GuessOutcome;
use crate::state::{GameSession, Phase, WalletSession};
use crate::view_model::{GameView, short_address};

pub struct GameController<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    wallet: Arc<W>,
    validator: NetworkValidator<W>,
    gateways: F,
    target_network: NetworkDescriptor,
    config: GameConfig,

    phase: Phase,
    wallet_session: Option<WalletSession>,
    network: Option<NetworkContext>,
    gateway: Option<F::Gateway>,
    game: Option<GameSession>,
    messages: MessageLog,
}

impl<W, F> GameController<W, F>
where
    W: WalletProvider + ?Sized,
    F: GatewayFactory,
{
    /// `target_network` is where players on an unsupported chain are sent.
    pub fn new(
        wallet: Arc<W>,
        chains: Arc<ChainConfig>,
        gateways: F,
        target_network: NetworkDescriptor,
        config: GameConfig,
    ) -> Self {
        let mut messages = MessageLog::new(config.messages.capacity);
        messages.push(texts::CONNECT_PROMPT, MessageLevel::Info);

        Self {
            validator: NetworkValidator::new(Arc::clone(&wallet), chains),
            wallet,
            gateways,
            target_network,
            config,
            phase: Phase::Disconnected,
            wallet_session: None,
            network: None,
            gateway: None,
            game: None,
            messages,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn wallet_session(&self) -> Option<&WalletSession> {
        self.wallet_session.as_ref()
    }

    pub fn network(&self) -> Option<&NetworkContext> {
        self.network.as_ref()
    }

    pub fn gateway(&self) -> Option<&F::Gateway> {
        self.gateway.as_ref()
    }

    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// Current player-facing message.
    pub fn message(&self) -> &str {
        self.messages
            .latest()
            .map(|entry| entry.text.as_str())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Wallet notifications to feed back into [`Self::handle_wallet_event`].
    pub fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.wallet.subscribe()
    }

    pub fn view(&self) -> GameView {
        let account = self.wallet_session.map(|session| session.account);
        let connected = account.is_some();
        let idle = self.phase == Phase::Idle;

        GameView {
            phase: self.phase,
            connected,
            account,
            account_label: account.as_ref().map(short_address),
            chain_id: self.network.map(|network| network.chain_id),
            supported: self.network.map(|network| network.supported),
            target_network: self.target_network.chain_name.clone(),
            attempts: self.game.as_ref().map(|game| game.attempts),
            pending_guess: self
                .game
                .as_ref()
                .map(|game| game.pending_guess.clone())
                .unwrap_or_default(),
            message: self.message().to_string(),
            message_seq: self.messages.latest().map(|entry| entry.seq).unwrap_or_default(),
            guess_min: self.config.guess_min,
            guess_max: self.config.guess_max,
            can_connect: (!connected && !self.phase.is_busy()) || self.phase == Phase::LoadFailed,
            can_switch: connected && self.phase == Phase::Unsupported,
            can_guess: idle,
            can_reset: idle,
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Dispatch a frontend intent. `Quit` is the caller's business and is a
    /// no-op here.
    pub async fn apply(&mut self, intent: UserIntent) -> Result<(), GameError> {
        match intent {
            UserIntent::Connect => self.connect_wallet().await,
            UserIntent::SwitchNetwork => self.switch_network().await,
            UserIntent::SetGuess(text) => self.set_guess(text),
            UserIntent::SubmitGuess => self.submit_guess().await.map(|_| ()),
            UserIntent::Reset => self.reset_game().await,
            UserIntent::Quit => Ok(()),
        }
    }

    /// Startup: detect the provider and resolve its network without asking
    /// for accounts.
    pub async fn initialize(&mut self) -> Result<(), GameError> {
        self.clear_session();

        if !self.wallet.is_available() {
            tracing::warn!("No wallet provider detected");
            self.say(MessageLevel::Error, texts::INSTALL_WALLET);
            return Err(GameError::ProviderUnavailable);
        }

        let context = match self.validator.resolve().await {
            Ok(context) => context,
            Err(err) => {
                tracing::error!("Failed to resolve network on startup: {}", err);
                self.say(MessageLevel::Error, texts::NETWORK_UNREADABLE);
                return Err(network_failure(err));
            }
        };
        self.network = Some(context);

        match self.validator.entry_for(&context).cloned() {
            Some(entry) => {
                tracing::info!(
                    "Game contract {} on chain {}",
                    entry.contract_address,
                    entry.chain_id
                );
                self.gateway = Some(self.gateways.bind(&entry));
                self.say(MessageLevel::Info, texts::CONNECT_PROMPT);
            }
            None => {
                let text = texts::unsupported_network(&self.target_network.chain_name);
                self.say(MessageLevel::Warning, text);
            }
        }

        Ok(())
    }

    /// Ask the wallet for accounts, then load the game for the first one.
    ///
    /// Calling this while already connected is a no-op, except after a failed
    /// load where it retries reading the network and game.
    pub async fn connect_wallet(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Disconnected => {}
            Phase::LoadFailed => return self.load_network().await,
            Phase::Connecting | Phase::NetworkCheck | Phase::Submitting | Phase::Resetting => {
                return Err(GameError::Busy(self.phase));
            }
            Phase::Idle | Phase::Unsupported => return Ok(()),
        }

        if !self.wallet.is_available() {
            self.say(MessageLevel::Error, texts::INSTALL_WALLET);
            return Err(GameError::ProviderUnavailable);
        }

        self.phase = Phase::Connecting;
        let accounts = match self.wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                self.phase = Phase::Disconnected;
                return Err(self.connect_failure(err));
            }
        };

        let Some(account) = accounts.first().copied() else {
            self.phase = Phase::Disconnected;
            self.say(MessageLevel::Warning, texts::NO_ACCOUNTS);
            return Err(GameError::Wallet(WalletError::InvalidResponse(
                "wallet returned no accounts".to_string(),
            )));
        };

        tracing::info!("Wallet connected: {}", account);
        self.wallet_session = Some(WalletSession { account });
        self.load_network().await
    }

    /// Move the wallet to the target network (adding it if unknown), then
    /// load the game there.
    pub async fn switch_network(&mut self) -> Result<(), GameError> {
        if self.wallet_session.is_none() {
            return Err(GameError::NotConnected);
        }
        if self.phase != Phase::Unsupported {
            return Err(if self.phase.is_busy() {
                GameError::Busy(self.phase)
            } else {
                GameError::NotReady(self.phase)
            });
        }

        let target = self.target_network.chain_id;
        tracing::info!("Switching wallet to {} ({})", self.target_network.chain_name, target);

        if let Err(err) = self
            .validator
            .switch_or_add(target, &self.target_network)
            .await
        {
            tracing::error!("Network switch failed: {}", err);
            let text = texts::switch_failed(&self.target_network.chain_name);
            self.say(MessageLevel::Error, text);
            return Err(match err {
                NetworkError::SwitchFailed(inner) | NetworkError::ResolveFailed(inner) => {
                    GameError::NetworkSwitchFailed(inner)
                }
            });
        }

        self.load_network().await
    }

    /// Replace the pending guess text. Validation happens on submit.
    pub fn set_guess(&mut self, text: impl Into<String>) -> Result<(), GameError> {
        match self.game.as_mut() {
            Some(game) => {
                game.pending_guess = text.into();
                Ok(())
            }
            None if self.wallet_session.is_none() => Err(GameError::NotConnected),
            None => Err(GameError::NotReady(self.phase)),
        }
    }

    /// Send the pending guess, wait for confirmation, then re-read attempts
    /// and target and compare.
    pub async fn submit_guess(&mut self) -> Result<GuessOutcome, GameError> {
        let account = self.ready_account()?;

        let raw = self
            .game
            .as_ref()
            .map(|game| game.pending_guess.trim().to_string())
            .unwrap_or_default();
        let guess = match raw.parse::<u64>() {
            Ok(guess) => guess,
            Err(_) => {
                tracing::debug!("Rejected non-numeric guess {:?}", raw);
                self.say_guess_failed();
                return Err(GameError::InvalidGuess(raw));
            }
        };

        let Some(gateway) = self.gateway.as_ref() else {
            return Err(GameError::NotReady(self.phase));
        };

        self.phase = Phase::Submitting;
        tracing::info!("Submitting guess {} from {}", guess, account);
        let result = guess_then_read(gateway, account, guess).await;
        self.phase = Phase::Idle;

        match result {
            Ok((attempts, target)) => {
                if let Some(game) = self.game.as_mut() {
                    game.attempts = attempts;
                    game.target = target;
                    game.pending_guess.clear();
                }
                let outcome = GuessOutcome::evaluate(guess, target, attempts);
                tracing::info!("Guess {} -> {:?}", guess, outcome);
                let level = if outcome.is_win() {
                    MessageLevel::Success
                } else {
                    MessageLevel::Info
                };
                self.say(level, outcome.message());
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!("Guess {} failed: {}", guess, err);
                self.say_guess_failed();
                Err(err.into())
            }
        }
    }

    /// Restart the game on-chain, then re-read attempts and target.
    pub async fn reset_game(&mut self) -> Result<(), GameError> {
        let account = self.ready_account()?;
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(GameError::NotReady(self.phase));
        };

        self.phase = Phase::Resetting;
        tracing::info!("Resetting game for {}", account);
        let result = reset_then_read(gateway, account).await;
        self.phase = Phase::Idle;

        match result {
            Ok((attempts, target)) => {
                if let Some(game) = self.game.as_mut() {
                    game.attempts = attempts;
                    game.target = target;
                    game.pending_guess.clear();
                }
                let prompt = texts::guess_prompt(self.config.guess_min, self.config.guess_max);
                self.say(MessageLevel::Info, prompt);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Reset failed: {}", err);
                self.say(MessageLevel::Error, texts::RESET_FAILED);
                Err(err.into())
            }
        }
    }

    /// Any wallet notification throws the whole session away and starts over.
    pub async fn handle_wallet_event(&mut self, event: WalletEvent) -> Result<(), GameError> {
        tracing::info!("Wallet event {:?} in phase {}, reinitializing", event, self.phase);
        self.initialize().await
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn say(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(text, level);
    }

    fn say_guess_failed(&mut self) {
        let text = texts::guess_failed(self.config.guess_min, self.config.guess_max);
        self.say(MessageLevel::Error, text);
    }

    fn clear_session(&mut self) {
        self.phase = Phase::Disconnected;
        self.wallet_session = None;
        self.network = None;
        self.gateway = None;
        self.game = None;
    }

    /// Account of a session that may send transactions right now.
    fn ready_account(&self) -> Result<Address, GameError> {
        let Some(session) = self.wallet_session else {
            return Err(GameError::NotConnected);
        };
        match self.phase {
            Phase::Idle => {}
            Phase::Unsupported => {
                let chain = self
                    .network
                    .map(|network| network.chain_id)
                    .unwrap_or(self.target_network.chain_id);
                return Err(GameError::UnsupportedNetwork(chain));
            }
            phase if phase.is_busy() => return Err(GameError::Busy(phase)),
            phase => return Err(GameError::NotReady(phase)),
        }

        // The gateway must belong to the network the wallet is on.
        match (&self.gateway, self.network) {
            (Some(gateway), Some(network)) if gateway.chain_id() == network.chain_id => {
                Ok(session.account)
            }
            _ => {
                tracing::error!("Gateway does not match the resolved network");
                Err(GameError::NotReady(self.phase))
            }
        }
    }

    fn connect_failure(&mut self, err: WalletError) -> GameError {
        tracing::warn!("Account request failed: {}", err);
        match err {
            WalletError::UserRejected => {
                self.say(MessageLevel::Warning, texts::CONNECT_REJECTED);
                GameError::UserRejected
            }
            WalletError::Unavailable => {
                self.say(MessageLevel::Error, texts::INSTALL_WALLET);
                GameError::ProviderUnavailable
            }
            other => {
                self.say(MessageLevel::Error, texts::connect_failed(&other.to_string()));
                GameError::Wallet(other)
            }
        }
    }

    /// Resolve the network, bind the gateway and read the game. Nothing from a
    /// previous network survives, and game state is only installed once every
    /// read has succeeded.
    async fn load_network(&mut self) -> Result<(), GameError> {
        let Some(account) = self.wallet_session.map(|session| session.account) else {
            return Err(GameError::NotConnected);
        };

        self.phase = Phase::NetworkCheck;
        self.network = None;
        self.gateway = None;
        self.game = None;

        let context = match self.validator.resolve().await {
            Ok(context) => context,
            Err(err) => {
                tracing::error!("Failed to resolve network: {}", err);
                self.phase = Phase::LoadFailed;
                self.say(MessageLevel::Error, texts::NETWORK_UNREADABLE);
                return Err(network_failure(err));
            }
        };
        self.network = Some(context);

        let Some(entry) = self.validator.entry_for(&context).cloned() else {
            self.phase = Phase::Unsupported;
            let text = texts::unsupported_network(&self.target_network.chain_name);
            self.say(MessageLevel::Warning, text);
            return Ok(());
        };

        let gateway = self.gateways.bind(&entry);
        match read_game(&gateway, account).await {
            Ok((attempts, target)) => {
                tracing::info!(
                    "Loaded game on chain {}: {} attempts so far",
                    context.chain_id,
                    attempts
                );
                self.gateway = Some(gateway);
                self.game = Some(GameSession::new(target, attempts));
                self.phase = Phase::Idle;
                let prompt = texts::guess_prompt(self.config.guess_min, self.config.guess_max);
                self.say(MessageLevel::Info, prompt);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to load game state: {}", err);
                self.phase = Phase::LoadFailed;
                self.say(MessageLevel::Error, texts::LOAD_FAILED);
                Err(err.into())
            }
        }
    }
}

fn network_failure(err: NetworkError) -> GameError {
    match err {
        NetworkError::ResolveFailed(inner) | NetworkError::SwitchFailed(inner) => inner.into(),
    }
}

/// `(attempts, target)` for `account`.
async fn read_game<G: ContractGateway + ?Sized>(
    gateway: &G,
    account: Address,
) -> Result<(u64, u64), ContractError> {
    let attempts = gateway.read_attempts(account).await?;
    let target = gateway.read_secret().await?;
    Ok((attempts, target))
}

async fn guess_then_read<G: ContractGateway + ?Sized>(
    gateway: &G,
    account: Address,
    guess: u64,
) -> Result<(u64, u64), ContractError> {
    let receipt = gateway.submit_guess(account, guess).await?;
    tracing::debug!(
        "Guess confirmed in block {} ({})",
        receipt.block_number,
        receipt.transaction_hash
    );
    read_game(gateway, account).await
}

async fn reset_then_read<G: ContractGateway + ?Sized>(
    gateway: &G,
    account: Address,
) -> Result<(u64, u64), ContractError> {
    let receipt = gateway.reset_game(account).await?;
    tracing::debug!(
        "Reset confirmed in block {} ({})",
        receipt.block_number,
        receipt.transaction_hash
    );
    read_game(gateway, account).await
}
