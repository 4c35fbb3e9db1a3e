//! Command-line parsing.

use client_frontend_core::UserIntent;

/// One decoded input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Intent(UserIntent),
    /// Set and submit a guess in one go.
    Guess(String),
    Help,
    Status,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: guess <number>")]
    MissingGuess,
}

/// Parse a single input line. A bare number is shorthand for `guess <number>`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "connect" | "c" => Command::Intent(UserIntent::Connect),
        "switch" | "s" => Command::Intent(UserIntent::SwitchNetwork),
        "reset" | "r" => Command::Intent(UserIntent::Reset),
        "quit" | "q" | "exit" => Command::Intent(UserIntent::Quit),
        "guess" | "g" => {
            if rest.is_empty() {
                return Err(CommandError::MissingGuess);
            }
            Command::Guess(rest.to_string())
        }
        "help" | "h" | "?" => Command::Help,
        "status" => Command::Status,
        _ if word.chars().all(|c| c.is_ascii_digit()) && rest.is_empty() => {
            Command::Guess(word.to_string())
        }
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(command)
}
