//! Guess evaluation.

use std::cmp::Ordering;

/// Result of comparing a guess with the contract's target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    /// Correct guess; `attempts` is the contract's count after the guess.
    Correct { attempts: u64 },
}

impl GuessOutcome {
    /// Three-way comparison of `guess` against the freshly read `target`.
    pub fn evaluate(guess: u64, target: u64, attempts: u64) -> Self {
        match guess.cmp(&target) {
            Ordering::Equal => GuessOutcome::Correct { attempts },
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
        }
    }

    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Correct { attempts } => format!(
                "Congratulations! You guessed the number in {} attempts!",
                attempts
            ),
            GuessOutcome::TooLow => "Too low! Try a higher number.".to_string(),
            GuessOutcome::TooHigh => "Too high! Try a lower number.".to_string(),
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_way_comparison() {
        for target in [1u64, 50, 100] {
            for guess in 0..=101u64 {
                let outcome = GuessOutcome::evaluate(guess, target, 4);
                match guess.cmp(&target) {
                    Ordering::Less => assert_eq!(outcome, GuessOutcome::TooLow),
                    Ordering::Greater => assert_eq!(outcome, GuessOutcome::TooHigh),
                    Ordering::Equal => assert_eq!(outcome, GuessOutcome::Correct { attempts: 4 }),
                }
            }
        }
    }

    #[test]
    fn win_message_carries_attempts() {
        let message = GuessOutcome::Correct { attempts: 2 }.message();
        assert!(message.ends_with("in 2 attempts!"));
        assert!(GuessOutcome::TooLow.message().contains("Too low"));
        assert!(GuessOutcome::TooHigh.message().contains("Too high"));
    }
}
