use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// A side that can move. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of applying a move, recomputed from the board after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Win(Player),
    Draw,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Continue => write!(f, "In progress"),
            MoveOutcome::Win(player) => write!(f, "{} Wins!", player),
            MoveOutcome::Draw => write!(f, "Draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Simple,
    /// Full-depth minimax.
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Simple => write!(f, "simple"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; BOARD_SIDE],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; BOARD_SIDE]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[BOARD_SIDE - 1]
    }
}
