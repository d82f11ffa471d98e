mod arena_config;
mod console;
mod match_runner;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tictactoe_engine::{BotController, Difficulty, GameState, Mark, SessionRng, log, logger};

use arena_config::get_config_manager;
use console::{ConsoleRound, Seat};
use match_runner::run_arena;

#[derive(Parser)]
#[command(name = "tictactoe_arena")]
struct Args {
    #[arg(long)]
    log_prefix: Option<String>,

    /// Suppress log lines; console prompts and results are still printed.
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pit two bots against each other for a number of rounds.
    Arena {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        bot_a: Option<Difficulty>,
        #[arg(long)]
        bot_b: Option<Difficulty>,
        /// Write the effective settings back to the config file.
        #[arg(long)]
        save: bool,
    },
    /// Play X against the AI.
    Play {
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0)]
        ai_delay_ms: u64,
    },
    /// Two players sharing the console.
    Duel,
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.log_prefix, args.quiet);

    match args.command {
        Command::Arena {
            config,
            rounds,
            seed,
            bot_a,
            bot_b,
            save,
        } => {
            let manager = get_config_manager(config.as_deref());
            let mut settings = manager.get_config()?;
            if let Some(rounds) = rounds {
                settings.rounds = rounds;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            if let Some(bot_a) = bot_a {
                settings.bot_a = bot_a;
            }
            if let Some(bot_b) = bot_b {
                settings.bot_b = bot_b;
            }
            if save {
                manager.set_config(&settings)?;
                log!("Saved arena settings");
            }

            let mut rng = session_rng(settings.seed);
            let summary = run_arena(&settings, &mut rng)?;
            println!("{}", summary);
        }
        Command::Play {
            difficulty,
            seed,
            ai_delay_ms,
        } => {
            let mut rng = session_rng(seed);
            log!("Single player vs {} AI, seed {}", difficulty, rng.seed());

            let human = Seat::Human("Player".to_string());
            let ai = Seat::Bot(BotController::new(difficulty, Mark::O));
            let mut state = GameState::new();
            let outcome = ConsoleRound::new(io::stdin().lock(), io::stdout(), &human, &ai)
                .with_ai_delay(Duration::from_millis(ai_delay_ms))
                .play(&mut state, &mut rng)?;
            log!("Round finished: {}", outcome);
        }
        Command::Duel => {
            let mut rng = SessionRng::from_random();
            let player_x = Seat::Human("Player 1".to_string());
            let player_o = Seat::Human("Player 2".to_string());
            let mut state = GameState::new();
            let outcome = ConsoleRound::new(io::stdin().lock(), io::stdout(), &player_x, &player_o)
                .play(&mut state, &mut rng)?;
            log!("Round finished: {}", outcome);
        }
    }

    Ok(())
}
