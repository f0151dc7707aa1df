use std::io::BufRead;
use std::str::FromStr;

use common::games::tictactoe::{
    BOARD_SIDE, Board, CELL_COUNT, Difficulty, Mark, MoveOutcome, winning_line,
};
use common::log;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Zero-based cell index; the player types 1..=9.
    Place(usize),
    SetDifficulty(Difficulty),
    Hint,
    Restart,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        match input.as_str() {
            "simple" | "easy" => Ok(ConsoleCommand::SetDifficulty(Difficulty::Simple)),
            "advanced" | "hard" => Ok(ConsoleCommand::SetDifficulty(Difficulty::Advanced)),
            "hint" => Ok(ConsoleCommand::Hint),
            "restart" | "r" => Ok(ConsoleCommand::Restart),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
            other => match other.parse::<usize>() {
                Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ConsoleCommand::Place(cell - 1)),
                Ok(cell) => Err(format!("Cell {} does not exist, pick 1-{}", cell, CELL_COUNT)),
                Err(_) => Err(format!("Unknown command '{}', type 'help'", other)),
            },
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9              place X in that cell (numbered left to right, top to bottom)
  simple|advanced  choose the computer's difficulty before the first move
  hint             show the minimax score of every free cell for X (you)
  restart          start a new game
  quit             leave";

/// Free cells show their 1-based number so the player knows what to type.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => (row * BOARD_SIDE + col + 1).to_string(),
                    Mark::X => "X".to_string(),
                    Mark::O => "O".to_string(),
                })
                .collect();
            format!(" {} ", symbols.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn describe_outcome(board: &Board, outcome: MoveOutcome) -> String {
    match (outcome, winning_line(board)) {
        (MoveOutcome::Win(_), Some(line)) => {
            format!("{} (line {} to {})", outcome, line.start() + 1, line.end() + 1)
        }
        _ => outcome.to_string(),
    }
}

/// Forwards lines from `reader` on a plain OS thread. A blocked read there never holds up
/// runtime shutdown, so the process can exit on Ctrl-C while waiting for input.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<String>
where
    R: BufRead + Send + 'static,
{
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });
    line_rx
}
