use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Difficulty;

pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 1000;
pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub difficulty: Difficulty,
    /// Pause before the computer answers. Only the presentation layer waits on it.
    pub opponent_delay_ms: u64,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Simple,
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(format!(
                "Opponent delay ({} ms) cannot exceed {} ms",
                self.opponent_delay_ms, MAX_OPPONENT_DELAY_MS
            ));
        }
        Ok(())
    }
}
