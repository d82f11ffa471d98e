use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::EngineError;
use crate::session_rng::SessionRng;
use crate::types::{Mark, Position};
use crate::win_detector::{find_winner, is_full};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

/// AI player with a fixed difficulty and mark. Holds no search state between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotController {
    difficulty: Difficulty,
    ai_mark: Mark,
}

impl BotController {
    pub fn new(difficulty: Difficulty, ai_mark: Mark) -> Self {
        Self {
            difficulty,
            ai_mark,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    pub fn choose_move(
        &self,
        board: &Board,
        opponent_mark: Mark,
        rng: &mut SessionRng,
    ) -> Result<Position, EngineError> {
        choose_move(board, self.difficulty, self.ai_mark, opponent_mark, rng)
    }
}

/// Picks the cell `ai_mark` should play on `board`. The board itself is left
/// untouched; placing the returned move is up to the caller.
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    ai_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    if ai_mark == opponent_mark {
        return Err(EngineError::InvalidBoard(format!(
            "AI and opponent both play {}",
            ai_mark
        )));
    }
    board.check_turn_balance()?;

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return Err(EngineError::NoAvailableMove);
    }

    let position = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => find_blocking_move(board, opponent_mark, &available_moves)
            .unwrap_or_else(|| calculate_random_move(&available_moves, rng)),
        Difficulty::Hard => {
            calculate_minimax_move(board, ai_mark, opponent_mark, &available_moves)
        }
    };

    Ok(position)
}

fn calculate_random_move(available_moves: &[Position], rng: &mut SessionRng) -> Position {
    available_moves[rng.pick_index(available_moves.len())]
}

/// First empty cell, row-major, where the opponent would complete a line.
/// Never looks for a win of its own.
fn find_blocking_move(
    board: &Board,
    opponent_mark: Mark,
    available_moves: &[Position],
) -> Option<Position> {
    available_moves
        .iter()
        .copied()
        .find(|&position| find_winner(&board.with_mark(position, opponent_mark)) == Some(opponent_mark))
}

fn calculate_minimax_move(
    board: &Board,
    ai_mark: Mark,
    opponent_mark: Mark,
    available_moves: &[Position],
) -> Position {
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for &position in available_moves {
        let score = minimax_score(
            &board.with_mark(position, ai_mark),
            0,
            false,
            ai_mark,
            opponent_mark,
        );

        // Strict improvement only, so ties keep the earliest row-major cell.
        if score > best_score {
            best_score = score;
            best_move = position;
        }
    }

    best_move
}

/// Exhaustive minimax value of `board` from the AI's point of view.
///
/// Wins score `10 - depth` and losses `depth - 10`, so quicker wins and slower
/// losses are preferred; a full board without a line scores zero. Every probe
/// works on a copy of the board.
pub fn minimax_score(
    board: &Board,
    depth: usize,
    maximizing: bool,
    ai_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = find_winner(board) {
        return if winner == ai_mark {
            WIN_SCORE - depth as i32
        } else {
            depth as i32 - WIN_SCORE
        };
    }

    if is_full(board) {
        return 0;
    }

    let empty = Position::all().filter(|&p| board.is_empty_at(p));

    if maximizing {
        empty
            .map(|p| {
                minimax_score(
                    &board.with_mark(p, ai_mark),
                    depth + 1,
                    false,
                    ai_mark,
                    opponent_mark,
                )
            })
            .max()
            .unwrap_or(0)
    } else {
        empty
            .map(|p| {
                minimax_score(
                    &board.with_mark(p, opponent_mark),
                    depth + 1,
                    true,
                    ai_mark,
                    opponent_mark,
                )
            })
            .min()
            .unwrap_or(0)
    }
}
