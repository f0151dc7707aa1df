use std::fmt;
use std::str::FromStr;

use crate::error::{BoardParseError, IllegalMoveReason, MoveError};
use super::types::{BOARD_SIDE, CELL_COUNT, Mark, MoveOutcome, Player, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::IllegalMove {
                index,
                reason: IllegalMoveReason::OutOfRange,
            }),
            Some(cell) if !cell.is_empty() => Err(MoveError::IllegalMove {
                index,
                reason: IllegalMoveReason::Occupied,
            }),
            Some(_) => {
                self.cells[index] = Mark::from(player);
                Ok(())
            }
        }
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub(crate) fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = Mark::from(player);
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn next_player(&self) -> Player {
        if self.count(Mark::X) == self.count(Mark::O) {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        empty_indices(self)
    }

    pub fn outcome(&self) -> MoveOutcome {
        outcome(self)
    }
}

pub fn reset() -> Board {
    Board::new()
}

pub fn is_win(board: &Board) -> bool {
    check_win(board.cells()).is_some()
}

pub fn winner(board: &Board) -> Option<Player> {
    check_win(board.cells())
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    check_win_with_line(board.cells())
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_win(board)
}

pub fn empty_indices(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn outcome(board: &Board) -> MoveOutcome {
    if let Some(player) = winner(board) {
        MoveOutcome::Win(player)
    } else if board.is_full() {
        MoveOutcome::Draw
    } else {
        MoveOutcome::Continue
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(Mark::symbol).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Empty cells may be `_`, `.`, `-` or a space; `/` and line breaks are skipped.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '\n' | '\r'))
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::InvalidBoardLength { got: symbols.len() });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, character) in symbols.into_iter().enumerate() {
            cells[position] = match character {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' | '-' | ' ' => Mark::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(Self { cells })
    }
}
