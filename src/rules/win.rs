//! Win detection: table-driven line evaluation.
//!
//! ## Line Table
//!
//! The 8 winning lines (3 rows, 3 columns, 2 diagonals) live in a fixed
//! table scanned in declaration order. A legal game can contain at most
//! one winning player, so scan order never changes the winner - but it is
//! deterministic, which keeps the returned line stable for tests and
//! highlighting. The table is also the single point of extension if the
//! board ever generalizes; history logic never touches it.

use crate::core::{Board, Cell, Player};

/// The 8 winning lines in row-major cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the winner on a board, if any.
///
/// Pure and referentially transparent; safe to call on any snapshot
/// including the empty board. Draw detection is deliberately not here -
/// "no winner" on a full board is the caller's composite check.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Find the winner together with the completed line.
///
/// Returns the first matching line in table order. Presentation layers
/// use the line for highlighting; `winner` discards it.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let cells = board.cells();

    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Mark(player) = cells[a] {
            if cells[b] == Cell::Mark(player) && cells[c] == Cell::Mark(player) {
                return Some((player, line));
            }
        }
    }

    None
}
