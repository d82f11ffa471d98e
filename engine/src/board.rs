use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::types::{BOARD_SIZE, Cell, Mark, Position};

/// 3x3 grid of cells. Cells are only ever filled, never overwritten, until the
/// whole board is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: &[&[Cell]]) -> Result<Self, EngineError> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            board.cells[row].copy_from_slice(cells);
        }
        Ok(board)
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row][position.col]
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Places `mark` into an empty cell. Occupied cells are never overwritten.
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), EngineError> {
        if !self.is_empty_at(position) {
            return Err(EngineError::CellOccupied(position));
        }
        self.cells[position.row][position.col] = Cell::Taken(mark);
        Ok(())
    }

    /// Copy of this board with `mark` at `position`. Used by the search, which
    /// only ever probes empty cells.
    pub(crate) fn with_mark(&self, position: Position, mark: Mark) -> Board {
        debug_assert!(self.is_empty_at(position));
        let mut next = *self;
        next.cells[position.row][position.col] = Cell::Taken(mark);
        next
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|&p| self.is_empty_at(p)).collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(mark))
            .count()
    }

    /// Rejects mark counts that alternating play cannot produce.
    pub fn check_turn_balance(&self) -> Result<(), EngineError> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(EngineError::InvalidBoard(format!(
                "mark counts differ by more than one (X: {}, O: {})",
                x_count, o_count
            )));
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses nine cells in row-major order. `X`/`O` are marks, `.`, `_` and `-`
    /// are empty; whitespace, `/`, `|` and `,` are separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Taken(Mark::X),
                'O' | 'o' => Cell::Taken(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' | ',' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            };
            cells.push(cell);
        }

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells, got {}",
                BOARD_SIZE * BOARD_SIZE,
                cells.len()
            )));
        }

        let rows: Vec<&[Cell]> = cells.chunks(BOARD_SIZE).collect();
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(
                f,
                "{}|{}|{}",
                row[0].as_char(),
                row[1].as_char(),
                row[2].as_char()
            )?;
        }
        Ok(())
    }
}
