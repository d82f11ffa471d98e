use crate::board::Board;
use crate::types::{Cell, Mark, Outcome, Position, WinningLine};

const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> [Position; 3] {
    [
        Position::new(a.0, a.1),
        Position::new(b.0, b.1),
        Position::new(c.0, c.1),
    ]
}

/// All winning lines in scan order: rows, then columns, then the main and
/// anti diagonal. When a malformed board holds several complete lines, the
/// first one in this order wins.
const LINES: [[Position; 3]; 8] = [
    line((0, 0), (0, 1), (0, 2)),
    line((1, 0), (1, 1), (1, 2)),
    line((2, 0), (2, 1), (2, 2)),
    line((0, 0), (1, 0), (2, 0)),
    line((0, 1), (1, 1), (2, 1)),
    line((0, 2), (1, 2), (2, 2)),
    line((0, 0), (1, 1), (2, 2)),
    line((0, 2), (1, 1), (2, 0)),
];

fn line_owner(board: &Board, cells: &[Position; 3]) -> Option<Mark> {
    let first = board.get(cells[0]);
    if let Cell::Taken(mark) = first
        && board.get(cells[1]) == first
        && board.get(cells[2]) == first
    {
        return Some(mark);
    }
    None
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|cells| {
        line_owner(board, cells).map(|mark| WinningLine::new(mark, *cells))
    })
}

pub fn find_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|cells| line_owner(board, cells))
}

pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|cell| !cell.is_empty()))
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = find_winner(board) {
        return Outcome::Won(mark);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
