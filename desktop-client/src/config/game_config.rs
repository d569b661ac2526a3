use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_common::config::{ConfigError, Validate};
use tictactoe_common::games::tictactoe::{DEFAULT_BOT_DELAY, Difficulty, TicTacToeSessionSettings};

const MAX_BOT_DELAY_MS: u64 = 5_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            bot_delay: Duration::from_millis(self.bot_delay_ms),
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            bot_delay_ms: DEFAULT_BOT_DELAY.as_millis() as u64,
            seed: None,
        }
    }
}
