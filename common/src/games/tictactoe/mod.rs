mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{
    Board, empty_indices, is_draw, is_win, outcome, reset, winner, winning_line,
};
pub use bot_controller::{
    WIN_SCORE, calculate_move, choose_move_optimal, choose_move_simple, evaluate, minimax,
    score_moves, score_moves_for,
};
pub use game_state::{GamePhase, TicTacToeGameState};
pub use settings::TicTacToeSettings;
pub use types::{BOARD_SIDE, CELL_COUNT, Difficulty, Mark, MoveOutcome, Player, WinningLine};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line};
