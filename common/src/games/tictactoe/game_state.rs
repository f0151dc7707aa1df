use crate::error::MoveError;
use crate::games::MoveRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::settings::TicTacToeSettings;
use super::types::{Difficulty, MoveOutcome, Player};

const HUMAN: Player = Player::X;
const COMPUTER: Player = Player::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingHumanMove,
    AwaitingOpponentMove,
    GameOver(MoveOutcome),
}

/// Turn sequencing for one human (X) against the computer (O).
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    phase: GamePhase,
    difficulty: Difficulty,
    move_history: Vec<(Player, usize)>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSettings) -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::AwaitingHumanMove,
            difficulty: settings.difficulty,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn move_history(&self) -> &[(Player, usize)] {
        &self.move_history
    }

    pub fn outcome(&self) -> MoveOutcome {
        match self.phase {
            GamePhase::GameOver(outcome) => outcome,
            _ => MoveOutcome::Continue,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Difficulty is fixed once the first mark of a game is down.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MoveError> {
        if !self.move_history.is_empty() {
            return Err(MoveError::DifficultyLocked);
        }
        if self.difficulty != difficulty {
            log!("Difficulty changed: {} -> {}", self.difficulty, difficulty);
            self.difficulty = difficulty;
        }
        Ok(())
    }

    pub fn human_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(MoveError::GameOver),
            GamePhase::AwaitingOpponentMove => {
                return Err(MoveError::NotYourTurn { expected: COMPUTER });
            }
            GamePhase::AwaitingHumanMove => {}
        }

        self.board.place(index, HUMAN)?;
        Ok(self.finish_turn(HUMAN, index))
    }

    /// Lets the engine answer with the current difficulty.
    pub fn opponent_move<R: MoveRng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, MoveOutcome), MoveError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(MoveError::GameOver),
            GamePhase::AwaitingHumanMove => {
                return Err(MoveError::NotYourTurn { expected: HUMAN });
            }
            GamePhase::AwaitingOpponentMove => {}
        }

        let index = calculate_move(self.difficulty, &self.board, rng)?;
        self.board.place(index, COMPUTER)?;
        Ok((index, self.finish_turn(COMPUTER, index)))
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.move_history.clear();
        self.phase = GamePhase::AwaitingHumanMove;
        log!("Game restarted, difficulty {}", self.difficulty);
    }

    fn finish_turn(&mut self, player: Player, index: usize) -> MoveOutcome {
        self.move_history.push((player, index));
        let outcome = self.board.outcome();

        self.phase = match outcome {
            MoveOutcome::Continue if player == HUMAN => GamePhase::AwaitingOpponentMove,
            MoveOutcome::Continue => GamePhase::AwaitingHumanMove,
            terminal => GamePhase::GameOver(terminal),
        };

        log!("{} placed at {}: {:?}", player, index, self.phase);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMoveReason;
    use crate::games::SessionRng;

    fn create_state(difficulty: Difficulty) -> TicTacToeGameState {
        TicTacToeGameState::new(&TicTacToeSettings {
            difficulty,
            ..TicTacToeSettings::default()
        })
    }

    #[test]
    fn test_new_game_awaits_human() {
        let state = create_state(Difficulty::Simple);
        assert_eq!(state.phase(), GamePhase::AwaitingHumanMove);
        assert_eq!(state.outcome(), MoveOutcome::Continue);
        assert_eq!(state.board().empty_indices().len(), 9);
    }

    #[test]
    fn test_human_move_hands_turn_to_opponent() {
        let mut state = create_state(Difficulty::Advanced);
        assert_eq!(state.human_move(4), Ok(MoveOutcome::Continue));
        assert_eq!(state.phase(), GamePhase::AwaitingOpponentMove);
        assert_eq!(
            state.human_move(0),
            Err(MoveError::NotYourTurn { expected: Player::O })
        );
    }

    #[test]
    fn test_illegal_human_move_keeps_phase() {
        let mut state = create_state(Difficulty::Advanced);
        let mut rng = SessionRng::new(3);
        state.human_move(4).unwrap();
        state.opponent_move(&mut rng).unwrap();

        let result = state.human_move(4);

        assert_eq!(
            result,
            Err(MoveError::IllegalMove {
                index: 4,
                reason: IllegalMoveReason::Occupied
            })
        );
        assert_eq!(state.phase(), GamePhase::AwaitingHumanMove);
        assert_eq!(state.move_history().len(), 2);
    }

    #[test]
    fn test_opponent_cannot_move_first() {
        let mut state = create_state(Difficulty::Simple);
        let mut rng = SessionRng::new(3);
        assert_eq!(
            state.opponent_move(&mut rng),
            Err(MoveError::NotYourTurn { expected: Player::X })
        );
    }

    #[test]
    fn test_advanced_game_is_never_won_by_human() {
        let mut state = create_state(Difficulty::Advanced);
        let mut rng = SessionRng::new(11);
        let mut human_choices = [0usize, 1, 2, 3, 5, 6, 7, 8, 4].into_iter();

        while !state.is_game_over() {
            match state.phase() {
                GamePhase::AwaitingHumanMove => {
                    let index = human_choices
                        .by_ref()
                        .find(|&i| state.board().cell(i).is_some_and(|c| c.is_empty()))
                        .unwrap();
                    state.human_move(index).unwrap();
                }
                GamePhase::AwaitingOpponentMove => {
                    state.opponent_move(&mut rng).unwrap();
                }
                GamePhase::GameOver(_) => unreachable!(),
            }
        }

        assert_ne!(state.outcome(), MoveOutcome::Win(Player::X));
        assert_eq!(state.human_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut state = create_state(Difficulty::Simple);
        state.board = "XX_/OO_/___".parse().unwrap();
        state.move_history = vec![(Player::X, 0), (Player::O, 3), (Player::X, 1), (Player::O, 4)];

        assert_eq!(state.human_move(2), Ok(MoveOutcome::Win(Player::X)));
        assert_eq!(state.phase(), GamePhase::GameOver(MoveOutcome::Win(Player::X)));

        let mut rng = SessionRng::new(1);
        assert_eq!(state.opponent_move(&mut rng), Err(MoveError::GameOver));
    }

    #[test]
    fn test_difficulty_locked_after_first_move() {
        let mut state = create_state(Difficulty::Simple);
        assert!(state.set_difficulty(Difficulty::Advanced).is_ok());
        state.human_move(0).unwrap();
        assert_eq!(
            state.set_difficulty(Difficulty::Simple),
            Err(MoveError::DifficultyLocked)
        );
        assert_eq!(state.difficulty(), Difficulty::Advanced);
    }

    #[test]
    fn test_restart_returns_to_initial_state() {
        let mut state = create_state(Difficulty::Simple);
        let mut rng = SessionRng::new(9);
        state.human_move(0).unwrap();
        state.opponent_move(&mut rng).unwrap();

        state.restart();

        assert_eq!(state.phase(), GamePhase::AwaitingHumanMove);
        assert_eq!(state.outcome(), MoveOutcome::Continue);
        assert_eq!(state.board().empty_indices().len(), 9);
        assert!(state.move_history().is_empty());
        assert!(state.set_difficulty(Difficulty::Advanced).is_ok());
    }

    #[test]
    fn test_seeded_simple_games_are_reproducible() {
        let play = |seed: u64| {
            let mut state = create_state(Difficulty::Simple);
            let mut rng = SessionRng::new(seed);
            state.human_move(4).unwrap();
            state.opponent_move(&mut rng).unwrap().0
        };
        assert_eq!(play(77), play(77));
    }
}
