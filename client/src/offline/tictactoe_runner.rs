use std::io::{self, Write};
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    GamePhase, MoveOutcome, Player, TicTacToeGameState, TicTacToeSettings, score_moves_for,
};
use common::log;
use tokio::sync::mpsc;

use crate::console::{ConsoleCommand, HELP_TEXT, describe_outcome, render_board};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Win(Player::X) => self.human_wins += 1,
            MoveOutcome::Win(Player::O) => self.computer_wins += 1,
            MoveOutcome::Draw => self.draws += 1,
            MoveOutcome::Continue => {}
        }
    }
}

/// Plays games against the computer until `quit` or until every line sender is gone.
pub async fn run_tictactoe_game<W: Write>(
    line_rx: &mut mpsc::UnboundedReceiver<String>,
    output: &mut W,
    settings: &TicTacToeSettings,
    rng: &mut SessionRng,
) -> io::Result<SessionSummary> {
    let mut state = TicTacToeGameState::new(settings);
    let delay = Duration::from_millis(settings.opponent_delay_ms);
    let mut summary = SessionSummary::default();

    log!("Game started: difficulty {}, seed {}", state.difficulty(), rng.seed());

    writeln!(output, "{}", HELP_TEXT)?;
    print_status(output, &state)?;

    while let Some(line) = line_rx.recv().await {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            ConsoleCommand::Restart => state.restart(),
            ConsoleCommand::SetDifficulty(difficulty) => match state.set_difficulty(difficulty) {
                Ok(()) => writeln!(output, "Computer difficulty: {}", difficulty)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            ConsoleCommand::Hint => {
                print_hint(output, &state)?;
                continue;
            }
            ConsoleCommand::Place(index) => {
                match state.human_move(index) {
                    Err(e) => {
                        writeln!(output, "{}", e)?;
                        continue;
                    }
                    Ok(outcome) if outcome.is_terminal() => {}
                    Ok(_) => {
                        writeln!(output, "Computer is thinking...")?;
                        output.flush()?;
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                        match state.opponent_move(rng) {
                            Ok((cell, _)) => writeln!(output, "Computer plays {}", cell + 1)?,
                            Err(e) => {
                                log!("Opponent move failed: {}", e);
                                writeln!(output, "{}", e)?;
                            }
                        }
                    }
                }

                if let GamePhase::GameOver(outcome) = state.phase() {
                    summary.record(outcome);
                    log!("Game over: {}", outcome);
                }
            }
        }

        print_status(output, &state)?;
    }

    writeln!(
        output,
        "You won {}, the computer won {}, draws {}.",
        summary.human_wins, summary.computer_wins, summary.draws
    )?;
    Ok(summary)
}

fn print_status<W: Write>(output: &mut W, state: &TicTacToeGameState) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", render_board(state.board()))?;
    match state.phase() {
        GamePhase::GameOver(outcome) => {
            writeln!(output, "{}", describe_outcome(state.board(), outcome))?;
            writeln!(output, "Type 'restart' to play again or 'quit' to leave.")?;
        }
        GamePhase::AwaitingHumanMove if state.move_history().is_empty() => {
            writeln!(
                output,
                "Computer difficulty: {}. Your move (X), or change the difficulty:",
                state.difficulty()
            )?;
        }
        GamePhase::AwaitingHumanMove => writeln!(output, "Your move (X):")?,
        GamePhase::AwaitingOpponentMove => writeln!(output, "Waiting for the computer...")?,
    }
    output.flush()
}

fn print_hint<W: Write>(output: &mut W, state: &TicTacToeGameState) -> io::Result<()> {
    if state.phase() != GamePhase::AwaitingHumanMove {
        return writeln!(output, "No hint available right now.");
    }
    match score_moves_for(state.board(), Player::X) {
        Ok(scores) => {
            // Scores are from O's side; flip them so positive is good for the player.
            let listed: Vec<String> = scores
                .iter()
                .map(|(index, score)| format!("{}:{:+}", index + 1, -score))
                .collect();
            writeln!(output, "Cell scores for X: {}", listed.join(" "))
        }
        Err(e) => writeln!(output, "{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Difficulty;

    fn settings(difficulty: Difficulty) -> TicTacToeSettings {
        TicTacToeSettings {
            difficulty,
            opponent_delay_ms: 0,
        }
    }

    fn script_channel(script: &str) -> mpsc::UnboundedReceiver<String> {
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        for line in script.lines() {
            line_tx.send(line.to_string()).unwrap();
        }
        line_rx
    }

    async fn play(script: &str, difficulty: Difficulty) -> (SessionSummary, String) {
        let mut line_rx = script_channel(script);
        let mut output = Vec::new();
        let mut rng = SessionRng::new(99);
        let summary = run_tictactoe_game(&mut line_rx, &mut output, &settings(difficulty), &mut rng)
            .await
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_quit_immediately() {
        let (summary, output) = play("quit\n", Difficulty::Simple).await;
        assert_eq!(summary, SessionSummary::default());
        assert!(output.contains("Your move (X)"));
    }

    #[tokio::test]
    async fn test_advanced_opponent_answers_center_with_corner() {
        let (_, output) = play("5\nquit\n", Difficulty::Advanced).await;
        assert!(output.contains("Computer plays 1"));
    }

    #[tokio::test]
    async fn test_invalid_input_is_reported() {
        let (_, output) = play("banana\n12\nquit\n", Difficulty::Simple).await;
        assert!(output.contains("Unknown command 'banana'"));
        assert!(output.contains("Cell 12 does not exist"));
    }

    #[tokio::test]
    async fn test_occupied_cell_is_rejected() {
        let (_, output) = play("5\n5\nquit\n", Difficulty::Advanced).await;
        assert!(output.contains("illegal move at cell 4"));
    }

    #[tokio::test]
    async fn test_difficulty_locked_after_first_move() {
        let (_, output) = play("advanced\n5\nsimple\nquit\n", Difficulty::Simple).await;
        assert!(output.contains("Computer difficulty: advanced"));
        assert!(output.contains("difficulty can only be changed before the first move"));
    }

    #[tokio::test]
    async fn test_full_game_against_advanced_never_won_by_human() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\nquit\n";
        let (summary, _) = play(script, Difficulty::Advanced).await;
        assert_eq!(summary.human_wins, 0);
        assert_eq!(summary.computer_wins + summary.draws, 1);
    }

    #[tokio::test]
    async fn test_restart_after_game_over() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\nrestart\n5\nquit\n";
        let (_, output) = play(script, Difficulty::Advanced).await;
        assert!(output.contains("Type 'restart'"));
        assert!(output.matches("Computer plays").count() >= 2);
    }

    #[tokio::test]
    async fn test_hint_lists_free_cells() {
        let (_, output) = play("hint\nquit\n", Difficulty::Simple).await;
        assert!(output.contains("Cell scores for X: 1:+0 2:+0"));
    }

    #[tokio::test]
    async fn test_closed_input_ends_session() {
        let (summary, output) = play("5\n", Difficulty::Advanced).await;
        assert_eq!(summary, SessionSummary::default());
        assert!(output.contains("You won 0, the computer won 0, draws 0."));
    }

    #[tokio::test]
    async fn test_waiting_for_input_can_be_abandoned() {
        let (_line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
        let mut output = Vec::new();
        let mut rng = SessionRng::new(5);
        let settings = settings(Difficulty::Simple);

        let waited = tokio::time::timeout(
            Duration::from_millis(50),
            run_tictactoe_game(&mut line_rx, &mut output, &settings, &mut rng),
        )
        .await;

        assert!(waited.is_err());
        assert!(String::from_utf8(output).unwrap().contains("Your move (X)"));
    }

}
