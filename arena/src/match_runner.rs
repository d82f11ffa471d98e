use std::fmt;

use tictactoe_engine::{
    BotController, Difficulty, EngineError, GameState, Mark, Outcome, SessionRng, log,
};

use crate::arena_config::ArenaConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaSummary {
    pub rounds: u32,
    pub bot_a_wins: u32,
    pub bot_b_wins: u32,
    pub draws: u32,
}

impl fmt::Display for ArenaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds: bot A won {}, bot B won {}, {} draws",
            self.rounds, self.bot_a_wins, self.bot_b_wins, self.draws
        )
    }
}

/// Plays one round between two bots to completion. X opens.
pub fn run_round(
    x_bot: &BotController,
    o_bot: &BotController,
    rng: &mut SessionRng,
) -> Result<GameState, EngineError> {
    let mut state = GameState::new();

    while !state.is_over() {
        let bot = match state.current_mark {
            Mark::X => x_bot,
            Mark::O => o_bot,
        };
        let position = bot.choose_move(&state.board, state.current_mark.opponent(), rng)?;
        state.place_mark(position.row, position.col)?;
    }

    Ok(state)
}

fn seats(config: &ArenaConfig, round: u32) -> (Difficulty, Difficulty, bool) {
    if config.swap_sides && round % 2 == 1 {
        (config.bot_b, config.bot_a, true)
    } else {
        (config.bot_a, config.bot_b, false)
    }
}

pub fn run_arena(config: &ArenaConfig, rng: &mut SessionRng) -> Result<ArenaSummary, EngineError> {
    let mut summary = ArenaSummary::default();

    log!(
        "Arena: bot A ({}) vs bot B ({}), {} rounds, seed {}",
        config.bot_a,
        config.bot_b,
        config.rounds,
        rng.seed()
    );

    for round in 0..config.rounds {
        let (x_difficulty, o_difficulty, swapped) = seats(config, round);
        let x_bot = BotController::new(x_difficulty, Mark::X);
        let o_bot = BotController::new(o_difficulty, Mark::O);
        let mut round_rng = rng.fork();

        let state = run_round(&x_bot, &o_bot, &mut round_rng)?;

        summary.rounds += 1;
        match state.status {
            Outcome::Won(mark) => {
                let bot_a_won = (mark == Mark::X) != swapped;
                if bot_a_won {
                    summary.bot_a_wins += 1;
                } else {
                    summary.bot_b_wins += 1;
                }
            }
            Outcome::Draw => summary.draws += 1,
            Outcome::InProgress => {}
        }

        log!(
            "Round {}: X={} O={} -> {} (seed {})",
            round + 1,
            x_difficulty,
            o_difficulty,
            state.status,
            round_rng.seed()
        );
    }

    log!("{}", summary);
    Ok(summary)
}
