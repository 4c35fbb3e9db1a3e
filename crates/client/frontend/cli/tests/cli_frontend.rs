use client_blockchain_core::ChainId;
use client_frontend_cli::{CliConfig, CliFrontend};
use client_frontend_core::{Frontend, GameError, GameView, Phase, UserIntent};

fn view(phase: Phase, message: &str, seq: u64) -> GameView {
    let idle = phase == Phase::Idle;
    GameView {
        phase,
        connected: idle,
        account: None,
        account_label: idle.then(|| "0x1111...1111".to_string()),
        chain_id: Some(ChainId::new(1114)),
        supported: Some(true),
        target_network: "Core Testnet".to_string(),
        attempts: idle.then_some(0),
        pending_guess: String::new(),
        message: message.to_string(),
        message_seq: seq,
        guess_min: 1,
        guess_max: 100,
        can_connect: !idle,
        can_switch: false,
        can_guess: idle,
        can_reset: idle,
    }
}

fn frontend(input: &'static str) -> CliFrontend<&'static [u8], Vec<u8>> {
    CliFrontend::new(input.as_bytes(), Vec::new(), CliConfig::default())
}

fn output(frontend: CliFrontend<&'static [u8], Vec<u8>>) -> String {
    String::from_utf8(frontend.into_output()).unwrap()
}

#[tokio::test]
async fn decodes_lines_into_intents() {
    let mut cli = frontend("connect\n\nguess 42\nbogus\n7\nreset\nquit\n");

    let mut intents = Vec::new();
    while let Some(intent) = cli.next_intent().await {
        intents.push(intent);
    }

    assert_eq!(
        intents,
        vec![
            UserIntent::Connect,
            UserIntent::SetGuess("42".to_string()),
            UserIntent::SubmitGuess,
            UserIntent::SetGuess("7".to_string()),
            UserIntent::SubmitGuess,
            UserIntent::Reset,
            UserIntent::Quit,
        ]
    );
    assert!(output(cli).contains("Unknown command: bogus"));
}

#[tokio::test]
async fn failed_step_drops_the_queued_submit() {
    let mut cli = frontend("guess 5\nreset\n");

    assert_eq!(
        cli.next_intent().await,
        Some(UserIntent::SetGuess("5".to_string()))
    );
    cli.report(&GameError::NotConnected);
    assert_eq!(cli.next_intent().await, Some(UserIntent::Reset));
    assert_eq!(cli.next_intent().await, None);
}

#[tokio::test]
async fn help_is_printed_inline() {
    let mut cli = frontend("help\nquit\n");

    assert_eq!(cli.next_intent().await, Some(UserIntent::Quit));
    assert!(output(cli).contains("guess <n> | <n>"));
}

#[test]
fn render_prints_only_changes() {
    let mut cli = frontend("");

    cli.render(&view(Phase::Disconnected, "Connect your wallet to play!", 0));
    cli.render(&view(Phase::Disconnected, "Connect your wallet to play!", 0));
    cli.render(&view(Phase::Idle, "Too low! Try a higher number.", 1));
    cli.render(&view(Phase::Idle, "Too low! Try a higher number.", 2));

    let text = output(cli);
    assert_eq!(text.matches("> Connect your wallet to play!").count(), 1);
    // Same text, new log entry: printed again.
    assert_eq!(text.matches("> Too low! Try a higher number.").count(), 2);
    assert!(text.contains("[Idle] 0x1111...1111 on chain 1114 | attempts: 0"));
    assert!(text.contains("Available: guess <n>, reset, quit"));
}

#[test]
fn failed_load_offers_a_retry() {
    let mut cli = frontend("");
    let mut failed = view(Phase::LoadFailed, "Could not load the game from the contract, try again.", 1);
    failed.connected = true;
    failed.account_label = Some("0x1111...1111".to_string());

    cli.render(&failed);

    let text = output(cli);
    assert!(text.contains("[LoadFailed] 0x1111...1111 on chain 1114"));
    assert!(text.contains("Available: connect, quit"));
}

#[tokio::test]
async fn status_replays_recent_messages() {
    let mut cli = frontend("status\nquit\n");
    cli.render(&view(Phase::Idle, "Guess a number between 1 and 100!", 0));
    cli.render(&view(Phase::Idle, "Too high! Try a lower number.", 1));

    assert_eq!(cli.next_intent().await, Some(UserIntent::Quit));

    let text = output(cli);
    assert_eq!(text.matches("> Guess a number between 1 and 100!").count(), 2);
}
