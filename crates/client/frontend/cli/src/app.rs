//! [`Frontend`] implementation over a line reader and a text writer.

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};

use async_trait::async_trait;
use client_frontend_core::{Frontend, GameError, GameView, UserIntent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::command::{Command, parse_command};
use crate::config::CliConfig;
use crate::render;

/// Terminal frontend.
///
/// Generic over its input and output so tests can drive it from byte slices.
pub struct CliFrontend<R, O> {
    lines: Lines<R>,
    out: O,
    config: CliConfig,
    queued: VecDeque<UserIntent>,
    last: Option<GameView>,
    history: VecDeque<String>,
}

impl CliFrontend<BufReader<Stdin>, Stdout> {
    /// Frontend on the process's stdin and stdout.
    pub fn stdio(config: CliConfig) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), io::stdout(), config)
    }
}

impl<R, O> CliFrontend<R, O>
where
    R: AsyncBufRead + Unpin + Send,
    O: Write + Send,
{
    pub fn new(reader: R, out: O, config: CliConfig) -> Self {
        Self {
            lines: reader.lines(),
            out,
            config,
            queued: VecDeque::new(),
            last: None,
            history: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn remember(&mut self, view: &GameView) {
        let is_new = self
            .last
            .as_ref()
            .is_none_or(|last| last.message_seq != view.message_seq);
        if is_new && !view.message.is_empty() {
            if self.history.len() == self.config.ui.history_lines.max(1) {
                self.history.pop_front();
            }
            self.history.push_back(view.message.clone());
        }
    }

    fn show_status(&mut self) {
        let Some(view) = self.last.as_ref() else {
            return;
        };
        let result = render::render_status(
            &mut self.out,
            view,
            self.history.iter().map(String::as_str),
        );
        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

#[async_trait]
impl<R, O> Frontend for CliFrontend<R, O>
where
    R: AsyncBufRead + Unpin + Send,
    O: Write + Send,
{
    async fn next_intent(&mut self) -> Option<UserIntent> {
        loop {
            if let Some(intent) = self.queued.pop_front() {
                return Some(intent);
            }

            // `next_line` is cancel safe, so losing a select race drops no input.
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::info!("Input closed");
                    return None;
                }
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    return None;
                }
            };

            match parse_command(&line) {
                Ok(Command::Intent(intent)) => return Some(intent),
                Ok(Command::Guess(text)) => {
                    self.queued.push_back(UserIntent::SubmitGuess);
                    return Some(UserIntent::SetGuess(text));
                }
                Ok(Command::Help) => self.print(render::HELP),
                Ok(Command::Status) => self.show_status(),
                Ok(Command::Empty) => {}
                Err(e) => self.print(&format!("{}. Type 'help' for commands.", e)),
            }
        }
    }

    fn render(&mut self, view: &GameView) {
        self.remember(view);
        let result = render::render_changes(
            &mut self.out,
            self.last.as_ref(),
            view,
            self.config.ui.show_hints,
        );
        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
        self.last = Some(view.clone());
    }

    fn report(&mut self, error: &GameError) {
        tracing::warn!("Operation failed: {}", error);
        // Nothing queued behind a failed step should run.
        self.queued.clear();
    }
}
