use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Mark, Outcome, Position, WinningLine};
use crate::win_detector::{evaluate, find_winning_line};

/// One round on a single board. X always opens; the board is only ever
/// filled until [`GameState::reset`] clears it for the next round.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            current_mark: Mark::X,
            status: Outcome::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Outcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let position =
            Position::try_new(row, col).ok_or(EngineError::PositionOutOfBounds { row, col })?;

        self.board.place(position, self.current_mark)?;
        self.last_move = Some(position);

        self.check_game_over();

        if !self.is_over() {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self) {
        self.status = evaluate(&self.board);
        if let Outcome::Won(_) = self.status {
            self.winning_line = find_winning_line(&self.board);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
