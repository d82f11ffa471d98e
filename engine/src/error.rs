use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidBoard(String),
    NoAvailableMove,
    CellOccupied(Position),
    PositionOutOfBounds { row: usize, col: usize },
    GameOver,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
            EngineError::NoAvailableMove => write!(f, "No available move: board is full"),
            EngineError::CellOccupied(position) => {
                write!(f, "Cell {} is already marked", position)
            }
            EngineError::PositionOutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            EngineError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for EngineError {}
