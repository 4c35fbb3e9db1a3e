//! CLI-specific configuration for the terminal frontend.
use std::env;

/// CLI terminal configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend game configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Log session name; a timestamped one is generated when unset.
    pub session_id: Option<String>,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUESS_SESSION_ID` - Log session directory name
    /// - `CLI_SHOW_HINTS` - Print available commands after each phase change (default: true)
    /// - `CLI_HISTORY_LINES` - Messages printed by `status` (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self {
            session_id: env::var("GUESS_SESSION_ID").ok().filter(|id| !id.is_empty()),
            ..Self::default()
        };

        if let Some(show) = read_env_bool("CLI_SHOW_HINTS") {
            config.ui.show_hints = show;
        }
        if let Some(lines) = read_env::<usize>("CLI_HISTORY_LINES") {
            config.ui.history_lines = lines;
        }

        config
    }
}

/// Output configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub show_hints: bool,
    pub history_lines: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            history_lines: 5,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
