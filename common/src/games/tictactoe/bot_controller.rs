use crate::error::MoveError;
use crate::games::MoveRng;
use super::board::{Board, is_draw, winner};
use super::types::{CELL_COUNT, Difficulty, Player};

pub const WIN_SCORE: i32 = 10;

pub fn calculate_move<R: MoveRng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut R,
) -> Result<usize, MoveError> {
    match difficulty {
        Difficulty::Simple => choose_move_simple(board, rng),
        Difficulty::Advanced => choose_move_optimal(board),
    }
}

pub fn choose_move_simple<R: MoveRng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, MoveError> {
    if board.outcome().is_terminal() {
        return Err(MoveError::NoMoveAvailable);
    }
    let available_moves = board.empty_indices();
    let idx = rng.random_index(available_moves.len());
    Ok(available_moves[idx])
}

pub fn choose_move_optimal(board: &Board) -> Result<usize, MoveError> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in score_moves(board)? {
        // Strictly greater, so ties keep the lowest index.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(MoveError::NoMoveAvailable)
}

pub fn score_moves(board: &Board) -> Result<Vec<(usize, i32)>, MoveError> {
    score_moves_for(board, Player::O)
}

/// Scores stay on O's scale, so X prefers the lowest.
pub fn score_moves_for(board: &Board, player: Player) -> Result<Vec<(usize, i32)>, MoveError> {
    if board.outcome().is_terminal() {
        return Err(MoveError::NoMoveAvailable);
    }

    let mut scratch = *board;
    let mut scores = Vec::new();

    for index in board.empty_indices() {
        scratch.set(index, player);
        let score = minimax(&mut scratch, 0, player == Player::X);
        scratch.clear(index);
        scores.push((index, score));
    }

    Ok(scores)
}

pub fn evaluate(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::O) => WIN_SCORE,
        Some(Player::X) => -WIN_SCORE,
        None => 0,
    }
}

pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    let score = evaluate(board);
    if score == WIN_SCORE {
        return score - depth;
    }
    if score == -WIN_SCORE {
        return score + depth;
    }
    if is_draw(board) {
        return 0;
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.set(index, mover);
        let eval = minimax(board, depth + 1, !maximizing);
        board.clear(index);

        best = if maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}
