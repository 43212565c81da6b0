//! Recorded moves derived from adjacent snapshots.
//!
//! The history stores boards, not moves. Adjacent snapshots differ in
//! exactly one cell (empty before, marked after), so the move that
//! produced any snapshot can be reconstructed on demand. Used for
//! replay, debugging, and presentation layers that want a move log.

use serde::{Deserialize, Serialize};

use super::board::{Board, CELL_COUNT};
use super::player::Player;

/// A single reconstructed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The cell that was played (0-8).
    pub cell: usize,

    /// The player who played it.
    pub player: Player,

    /// The move number: this move produced snapshot `turn` from
    /// snapshot `turn - 1`. 1-based.
    pub turn: usize,
}

impl MoveRecord {
    /// Reconstruct the move between two adjacent snapshots.
    ///
    /// Returns `None` unless the snapshots differ in exactly one cell and
    /// that cell went from empty to marked - anything else violates the
    /// history invariant and cannot be described as a single move.
    #[must_use]
    pub fn between(prev: &Board, next: &Board, turn: usize) -> Option<Self> {
        let mut found: Option<Self> = None;

        for cell in 0..CELL_COUNT {
            let before = prev.cells()[cell];
            let after = next.cells()[cell];
            if before == after {
                continue;
            }
            match (before.mark(), after.mark()) {
                (None, Some(player)) if found.is_none() => {
                    found = Some(Self { cell, player, turn });
                }
                _ => return None,
            }
        }

        found
    }
}
