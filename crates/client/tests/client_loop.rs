use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_blockchain_core::mock::core_testnet_descriptor;
use client_blockchain_core::{
    Address, ChainConfig, ChainId, MockGatewayFactory, MockGuessGame, MockWallet,
};
use client_frontend_core::{
    Frontend, GameConfig, GameController, GameError, GameView, Phase, UserIntent,
};
use guess_client::Client;

const CORE_TESTNET: ChainId = ChainId::new(1114);

#[derive(Default, Clone)]
struct Recorded {
    views: Arc<Mutex<Vec<GameView>>>,
    errors: Arc<Mutex<Vec<GameError>>>,
}

struct ScriptedFrontend {
    intents: VecDeque<UserIntent>,
    recorded: Recorded,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn next_intent(&mut self) -> Option<UserIntent> {
        tokio::task::yield_now().await;
        self.intents.pop_front()
    }

    fn render(&mut self, view: &GameView) {
        self.recorded.views.lock().unwrap().push(view.clone());
    }

    fn report(&mut self, error: &GameError) {
        self.recorded.errors.lock().unwrap().push(error.clone());
    }
}

fn client(
    wallet: MockWallet,
    game: MockGuessGame,
    intents: Vec<UserIntent>,
) -> (Client<MockWallet, MockGatewayFactory>, Recorded) {
    let chains = ChainConfig::new()
        .with_entry(CORE_TESTNET, Address::repeat_byte(0xab))
        .unwrap();
    let controller = GameController::new(
        Arc::new(wallet),
        Arc::new(chains),
        MockGatewayFactory::new(game),
        core_testnet_descriptor(),
        GameConfig::default(),
    );
    let recorded = Recorded::default();
    let frontend = ScriptedFrontend {
        intents: intents.into(),
        recorded: recorded.clone(),
    };
    let client = Client::builder()
        .controller(controller)
        .frontend(frontend)
        .build()
        .unwrap();
    (client, recorded)
}

#[tokio::test]
async fn plays_a_round_until_input_ends() {
    let game = MockGuessGame::new(42);
    let (client, recorded) = client(
        MockWallet::on_chain(CORE_TESTNET),
        game.clone(),
        vec![
            UserIntent::Connect,
            UserIntent::SetGuess("41".to_string()),
            UserIntent::SubmitGuess,
            UserIntent::SetGuess("42".to_string()),
            UserIntent::SubmitGuess,
        ],
    );

    let controller = client.run().await.unwrap();

    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(
        controller.message(),
        "Congratulations! You guessed the number in 2 attempts!"
    );
    // Initial frame plus one per intent.
    assert_eq!(recorded.views.lock().unwrap().len(), 6);
    assert!(recorded.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn quit_stops_before_remaining_input() {
    let game = MockGuessGame::new(42);
    let (client, _) = client(
        MockWallet::on_chain(CORE_TESTNET),
        game.clone(),
        vec![UserIntent::Connect, UserIntent::Quit, UserIntent::Reset],
    );

    let controller = client.run().await.unwrap();

    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(game.writes(), 0);
}

#[tokio::test]
async fn network_switch_event_reinitializes_the_session() {
    let wallet = MockWallet::on_chain(ChainId::new(9999));
    let game = MockGuessGame::new(7);
    let (client, recorded) = client(
        wallet.clone(),
        game,
        vec![
            UserIntent::Connect,
            UserIntent::SwitchNetwork,
            // The wallet's chainChanged notification drops the session, so the
            // player connects again.
            UserIntent::Connect,
            UserIntent::SetGuess("7".to_string()),
            UserIntent::SubmitGuess,
        ],
    );

    let controller = client.run().await.unwrap();

    assert_eq!(wallet.added_networks(), vec![CORE_TESTNET]);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.game().unwrap().attempts, 1);

    let views = recorded.views.lock().unwrap();
    assert!(views.iter().any(|view| view.phase == Phase::Unsupported));
    assert!(
        views
            .iter()
            .any(|view| view.phase == Phase::Disconnected && view.supported == Some(true))
    );
}

#[tokio::test]
async fn failures_are_reported_and_the_loop_continues() {
    let (client, recorded) = client(
        MockWallet::on_chain(CORE_TESTNET),
        MockGuessGame::new(42),
        vec![
            UserIntent::SubmitGuess,
            UserIntent::Connect,
            UserIntent::SetGuess("abc".to_string()),
            UserIntent::SubmitGuess,
        ],
    );

    let controller = client.run().await.unwrap();

    assert_eq!(
        *recorded.errors.lock().unwrap(),
        vec![
            GameError::NotConnected,
            GameError::InvalidGuess("abc".to_string())
        ]
    );
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn builder_requires_a_frontend() {
    let controller: GameController<MockWallet, MockGatewayFactory> = GameController::new(
        Arc::new(MockWallet::on_chain(CORE_TESTNET)),
        Arc::new(ChainConfig::new()),
        MockGatewayFactory::new(MockGuessGame::new(1)),
        core_testnet_descriptor(),
        GameConfig::default(),
    );

    let result = Client::builder().controller(controller).build();

    assert!(result.is_err());
}
