mod config;
mod console;
mod offline;

use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::Difficulty;
use common::{log, logger};

use config::get_config_manager;
use console::spawn_line_reader;
use offline::run_tictactoe_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Simple,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Simple => Difficulty::Simple,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Pause before the computer answers, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the random opponent.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let mut settings = config.tictactoe;
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.opponent_delay_ms = delay_ms;
    }
    settings.validate()?;

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut line_rx = spawn_line_reader(BufReader::new(std::io::stdin()));
    let mut output = std::io::stdout();

    tokio::select! {
        result = run_tictactoe_game(&mut line_rx, &mut output, &settings, &mut rng) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            log!("Interrupted, leaving the game");
        }
    }

    Ok(())
}
