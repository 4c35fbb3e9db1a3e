//! Plain-text rendering of [`GameView`]s.

use std::io::{self, Write};

use client_frontend_core::{GameView, Phase};

pub const HELP: &str = "\
Commands:
  connect | c        connect your wallet
  switch  | s        switch the wallet to the game's network
  guess <n> | <n>    submit a guess
  reset   | r        start a new game
  status             show the current state and recent messages
  help    | h        show this help
  quit    | q        exit";

pub fn header(view: &GameView) -> String {
    let mut line = format!("[{}] {}", view.phase, view.status_line());
    if let Some(attempts) = view.attempts {
        line.push_str(&format!(" | attempts: {}", attempts));
    }
    line
}

/// Commands usable in the current state.
pub fn hints(view: &GameView) -> Option<String> {
    let mut available = Vec::new();
    if view.can_connect {
        available.push("connect");
    }
    if view.can_switch {
        available.push("switch");
    }
    if view.can_guess {
        available.push("guess <n>");
    }
    if view.can_reset {
        available.push("reset");
    }
    if available.is_empty() {
        return None;
    }
    available.push("quit");
    Some(format!("Available: {}", available.join(", ")))
}

/// Print the parts of `view` that differ from `previous`.
pub fn render_changes(
    out: &mut impl Write,
    previous: Option<&GameView>,
    view: &GameView,
    show_hints: bool,
) -> io::Result<()> {
    let header_changed = previous.is_none_or(|last| header(last) != header(view));
    let phase_changed = previous.is_none_or(|last| last.phase != view.phase);
    let message_changed = previous.is_none_or(|last| last.message_seq != view.message_seq);

    if header_changed {
        writeln!(out, "{}", header(view))?;
    }
    if message_changed && !view.message.is_empty() {
        writeln!(out, "> {}", view.message)?;
    }
    if show_hints && phase_changed && view.phase != Phase::Submitting {
        if let Some(hints) = hints(view) {
            writeln!(out, "{}", hints)?;
        }
    }
    out.flush()
}

/// Full redraw for the `status` command.
pub fn render_status<'a>(
    out: &mut impl Write,
    view: &GameView,
    history: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    writeln!(out, "{}", header(view))?;
    if let Some(account) = view.account {
        writeln!(out, "Account: {}", account)?;
    }
    if view.supported == Some(false) {
        writeln!(out, "Target network: {}", view.target_network)?;
    }
    for message in history {
        writeln!(out, "> {}", message)?;
    }
    if let Some(hints) = hints(view) {
        writeln!(out, "{}", hints)?;
    }
    out.flush()
}
