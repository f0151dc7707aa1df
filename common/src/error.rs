use std::fmt;
use thiserror::Error;

use crate::games::tictactoe::{CELL_COUNT, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    Occupied,
    OutOfRange,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::Occupied => write!(f, "cell is already occupied"),
            IllegalMoveReason::OutOfRange => write!(f, "index must be below {}", CELL_COUNT),
        }
    }
}

/// Recoverable failures of the board, the decision engine and the game controller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move at cell {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    #[error("no move available: the board is full or the game is over")]
    NoMoveAvailable,

    #[error("it is not {expected}'s turn")]
    NotYourTurn { expected: Player },

    #[error("game is already over")]
    GameOver,

    #[error("difficulty can only be changed before the first move")]
    DifficultyLocked,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board must have {expected} cells, got {got}", expected = CELL_COUNT)]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
