//! In-memory wallet and contract doubles for testing.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::config::ChainConfigEntry;
use crate::traits::{ContractError, ContractGateway, GatewayFactory, WalletError, WalletProvider};
use crate::types::{
    Address, ChainId, NativeCurrency, NetworkDescriptor, TransactionReceipt, TxHash, WalletEvent,
};

/// Account exposed by [`MockWallet`] unless configured otherwise.
pub const DEFAULT_ACCOUNT: Address = Address::repeat_byte(0x11);

/// Core Testnet descriptor, as used by the add-network fallback.
pub fn core_testnet_descriptor() -> NetworkDescriptor {
    NetworkDescriptor {
        chain_id: ChainId::new(1114),
        chain_name: "Core Testnet".to_string(),
        rpc_urls: vec!["https://rpc.test2.btcs.network/".to_string()],
        native_currency: NativeCurrency {
            name: "TCore2".to_string(),
            symbol: "TCORE2".to_string(),
            decimals: 18,
        },
        block_explorer_urls: vec!["https://scan.test2.btcs.network/".to_string()],
    }
}

// ============================================================================
// Wallet
// ============================================================================

struct WalletState {
    available: bool,
    chain: ChainId,
    accounts: Vec<Address>,
    known_chains: HashSet<ChainId>,
    reject_accounts: bool,
    network_error: Option<WalletError>,
    switch_error: Option<WalletError>,
    add_error: Option<WalletError>,
    added: Vec<ChainId>,
    account_requests: usize,
}

/// Scriptable wallet.
///
/// Network switches and account changes emit the same notifications a
/// browser wallet would.
#[derive(Clone)]
pub struct MockWallet {
    state: Arc<Mutex<WalletState>>,
    events: broadcast::Sender<WalletEvent>,
}

impl MockWallet {
    pub fn on_chain(chain: ChainId) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            state: Arc::new(Mutex::new(WalletState {
                available: true,
                chain,
                accounts: vec![DEFAULT_ACCOUNT],
                known_chains: HashSet::from([chain]),
                reject_accounts: false,
                network_error: None,
                switch_error: None,
                add_error: None,
                added: Vec::new(),
                account_requests: 0,
            })),
            events,
        }
    }

    /// A host environment with no wallet injected.
    pub fn unavailable() -> Self {
        let wallet = Self::on_chain(ChainId::new(1));
        wallet.state().available = false;
        wallet
    }

    fn state(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().expect("mock wallet lock poisoned")
    }

    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        self.state().accounts = accounts;
        self
    }

    pub fn reject_account_requests(&self, reject: bool) {
        self.state().reject_accounts = reject;
    }

    pub fn add_known_chain(&self, chain: ChainId) {
        self.state().known_chains.insert(chain);
    }

    pub fn fail_network_with(&self, error: Option<WalletError>) {
        self.state().network_error = error;
    }

    pub fn fail_switch_with(&self, error: WalletError) {
        self.state().switch_error = Some(error);
    }

    pub fn fail_add_with(&self, error: WalletError) {
        self.state().add_error = Some(error);
    }

    pub fn chain(&self) -> ChainId {
        self.state().chain
    }

    pub fn added_networks(&self) -> Vec<ChainId> {
        self.state().added.clone()
    }

    pub fn account_requests(&self) -> usize {
        self.state().account_requests
    }

    /// Move to `chain` as if the user switched in the wallet UI.
    pub fn set_chain(&self, chain: ChainId) {
        {
            let mut state = self.state();
            state.chain = chain;
            state.known_chains.insert(chain);
        }
        let _ = self.events.send(WalletEvent::ChainChanged(chain));
    }

    /// Replace the exposed accounts as if the user switched accounts.
    pub fn set_accounts(&self, accounts: Vec<Address>) {
        self.state().accounts = accounts.clone();
        let _ = self.events.send(WalletEvent::AccountsChanged(accounts));
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn is_available(&self) -> bool {
        self.state().available
    }

    async fn current_network(&self) -> Result<ChainId, WalletError> {
        let state = self.state();
        if !state.available {
            return Err(WalletError::Unavailable);
        }
        match &state.network_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.chain),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut state = self.state();
        if !state.available {
            return Err(WalletError::Unavailable);
        }
        state.account_requests += 1;
        if state.reject_accounts {
            return Err(WalletError::UserRejected);
        }
        Ok(state.accounts.clone())
    }

    async fn switch_network(&self, chain_id: ChainId) -> Result<(), WalletError> {
        {
            let state = self.state();
            if let Some(error) = &state.switch_error {
                return Err(error.clone());
            }
            if !state.known_chains.contains(&chain_id) {
                return Err(WalletError::UnknownChain(chain_id));
            }
        }
        self.set_chain(chain_id);
        Ok(())
    }

    async fn add_network(&self, descriptor: &NetworkDescriptor) -> Result<(), WalletError> {
        {
            let mut state = self.state();
            if let Some(error) = &state.add_error {
                return Err(error.clone());
            }
            state.added.push(descriptor.chain_id);
        }
        // Wallets switch to a freshly added network right away.
        self.set_chain(descriptor.chain_id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}

// ============================================================================
// Contract
// ============================================================================

struct GameLedger {
    secret: u64,
    range: (u64, u64),
    attempts: HashMap<Address, u64>,
    next_secrets: VecDeque<u64>,
    write_failure: Option<ContractError>,
    read_failure: Option<ContractError>,
    reads: usize,
    writes: usize,
    block: u64,
}

/// In-memory guess-game contract state shared by every gateway bound to it.
///
/// Guesses outside `1..=100` revert; a reset zeroes the caller's attempts and
/// draws the next queued secret (or keeps the current one if none is queued).
#[derive(Clone)]
pub struct MockGuessGame {
    ledger: Arc<Mutex<GameLedger>>,
}

impl MockGuessGame {
    pub fn new(secret: u64) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(GameLedger {
                secret,
                range: (1, 100),
                attempts: HashMap::new(),
                next_secrets: VecDeque::new(),
                write_failure: None,
                read_failure: None,
                reads: 0,
                writes: 0,
                block: 0,
            })),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, GameLedger> {
        self.ledger.lock().expect("mock game lock poisoned")
    }

    pub fn secret(&self) -> u64 {
        self.ledger().secret
    }

    pub fn set_secret(&self, secret: u64) {
        self.ledger().secret = secret;
    }

    /// Secret drawn by the next reset.
    pub fn queue_secret(&self, secret: u64) {
        self.ledger().next_secrets.push_back(secret);
    }

    pub fn attempts_of(&self, account: Address) -> u64 {
        self.ledger().attempts.get(&account).copied().unwrap_or(0)
    }

    /// Fail the next write with `error` (before any state change).
    pub fn fail_next_write(&self, error: ContractError) {
        self.ledger().write_failure = Some(error);
    }

    /// Fail the next read with `error`.
    pub fn fail_next_read(&self, error: ContractError) {
        self.ledger().read_failure = Some(error);
    }

    /// Number of read calls served so far.
    pub fn reads(&self) -> usize {
        self.ledger().reads
    }

    /// Number of confirmed writes so far.
    pub fn writes(&self) -> usize {
        self.ledger().writes
    }

    fn read<T>(&self, f: impl FnOnce(&GameLedger) -> T) -> Result<T, ContractError> {
        let mut ledger = self.ledger();
        if let Some(error) = ledger.read_failure.take() {
            return Err(error);
        }
        ledger.reads += 1;
        Ok(f(&ledger))
    }

    fn write(
        &self,
        f: impl FnOnce(&mut GameLedger) -> Result<(), ContractError>,
    ) -> Result<TransactionReceipt, ContractError> {
        let mut ledger = self.ledger();
        if let Some(error) = ledger.write_failure.take() {
            return Err(error);
        }
        f(&mut ledger)?;
        ledger.writes += 1;
        ledger.block += 1;
        Ok(TransactionReceipt {
            transaction_hash: TxHash::with_last_byte(ledger.writes as u8),
            block_number: ledger.block,
        })
    }
}

/// [`ContractGateway`] over a [`MockGuessGame`].
#[derive(Clone)]
pub struct MockGateway {
    game: MockGuessGame,
    address: Address,
    chain_id: ChainId,
}

#[async_trait]
impl ContractGateway for MockGateway {
    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    async fn read_secret(&self) -> Result<u64, ContractError> {
        self.game.read(|ledger| ledger.secret)
    }

    async fn read_attempts(&self, account: Address) -> Result<u64, ContractError> {
        self.game
            .read(|ledger| ledger.attempts.get(&account).copied().unwrap_or(0))
    }

    async fn submit_guess(
        &self,
        account: Address,
        value: u64,
    ) -> Result<TransactionReceipt, ContractError> {
        self.game.write(|ledger| {
            let (min, max) = ledger.range;
            if value < min || value > max {
                return Err(ContractError::TransactionReverted(format!(
                    "Guess must be between {} and {}",
                    min, max
                )));
            }
            *ledger.attempts.entry(account).or_insert(0) += 1;
            Ok(())
        })
    }

    async fn reset_game(&self, account: Address) -> Result<TransactionReceipt, ContractError> {
        self.game.write(|ledger| {
            ledger.attempts.insert(account, 0);
            if let Some(next) = ledger.next_secrets.pop_front() {
                ledger.secret = next;
            }
            Ok(())
        })
    }
}

/// Factory handing out [`MockGateway`]s and recording every binding.
#[derive(Clone)]
pub struct MockGatewayFactory {
    game: MockGuessGame,
    bound: Arc<Mutex<Vec<ChainConfigEntry>>>,
}

impl MockGatewayFactory {
    pub fn new(game: MockGuessGame) -> Self {
        Self {
            game,
            bound: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn bound(&self) -> Vec<ChainConfigEntry> {
        self.bound.lock().expect("mock factory lock poisoned").clone()
    }
}

impl GatewayFactory for MockGatewayFactory {
    type Gateway = MockGateway;

    fn bind(&self, entry: &ChainConfigEntry) -> MockGateway {
        self.bound
            .lock()
            .expect("mock factory lock poisoned")
            .push(entry.clone());
        MockGateway {
            game: self.game.clone(),
            address: entry.contract_address,
            chain_id: entry.chain_id,
        }
    }
}
