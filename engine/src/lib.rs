pub mod config;
pub mod logger;

mod board;
mod bot_controller;
mod error;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotController, Difficulty, choose_move, minimax_score};
pub use error::EngineError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{Cell, Mark, Outcome, Position, WinningLine};
pub use win_detector::{evaluate, find_winner, find_winning_line, is_full};
