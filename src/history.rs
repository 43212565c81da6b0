//! Snapshot history: the authoritative record of board states.
//!
//! ## Model
//!
//! A `GameHistory` owns an ordered sequence of immutable board snapshots
//! and a cursor. Snapshot 0 is the empty starting board; snapshot `i` is
//! the board after `i` total moves. The cursor selects the currently
//! viewed snapshot, and all move legality is judged against it.
//!
//! Snapshots live in an `im::Vector`, so clones of the history (or of
//! individual boards handed to readers) share structure and stay valid
//! across later truncation.
//!
//! ## Branch Truncation
//!
//! Playing a move while the cursor sits before the last snapshot discards
//! every snapshot after the cursor, then appends the new board. The old
//! branch becomes unreachable through any navigation call - redo is not
//! preserved.
//!
//! ## Terminal Policy
//!
//! Moves are blocked exactly when the *currently viewed* snapshot already
//! has a winner. There is no global lock: rewinding from a won position to
//! an earlier snapshot re-enables play from there. A drawn board needs no
//! separate check - it has no empty cell to play into.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameError, MoveRecord, Player, CELL_COUNT};
use crate::rules;

/// What `GameHistory::play` did with a move request.
///
/// Playing into an occupied cell or on a won snapshot is a deliberate
/// no-op, not an error: the presentation contract is "clicking a filled
/// square does nothing".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was legal; a snapshot was appended and the cursor advanced.
    Applied,
    /// The move was silently rejected; history and cursor are unchanged.
    Ignored,
}

impl MoveOutcome {
    /// Check if the move was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// One entry of the time-travel navigation list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Snapshot index this entry navigates to.
    pub index: usize,

    /// Human-readable label for the navigation control.
    pub label: String,
}

/// Ordered board snapshots plus the cursor selecting the viewed one.
///
/// Invariants (upheld by construction, checked by the test suite):
/// - `snapshots` is never empty; snapshot 0 is the empty board
/// - `cursor < snapshots.len()`
/// - adjacent snapshots differ in exactly one cell, empty before and
///   marked after, by the player whose parity matches the move index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    snapshots: Vector<Board>,
    cursor: usize,
}

impl GameHistory {
    /// Create a history containing only the empty starting board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Vector::unit(Board::new()),
            cursor: 0,
        }
    }

    /// Number of snapshots (moves played along the current branch + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// The cursor: index of the currently viewed snapshot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently viewed snapshot.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// The snapshot at a given move index.
    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// The player to act at the current cursor, derived from parity.
    #[must_use]
    pub fn next_player(&self) -> Player {
        Player::on_move(self.cursor)
    }

    /// Play a move into the given cell of the viewed snapshot.
    ///
    /// Returns `Ok(MoveOutcome::Ignored)` without touching any state when
    /// the cell is occupied or the viewed snapshot already has a winner.
    /// Otherwise derives the next board, truncates any forward branch,
    /// appends, and advances the cursor.
    ///
    /// `Err(GameError::CellOutOfRange)` is a contract violation: the
    /// presentation layer only ever offers cells 0-8.
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, GameError> {
        if cell >= CELL_COUNT {
            return Err(GameError::CellOutOfRange { cell });
        }

        let current = self.snapshots[self.cursor];
        if rules::winner(&current).is_some() || !current.is_cell_empty(cell) {
            tracing::trace!(cell, cursor = self.cursor, "ignored move");
            return Ok(MoveOutcome::Ignored);
        }

        let player = Player::on_move(self.cursor);
        let next = current.with_mark(cell, player);

        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(next);
        self.cursor = self.snapshots.len() - 1;

        tracing::debug!(cell, player = %player, discarded, "applied move");
        Ok(MoveOutcome::Applied)
    }

    /// Move the cursor to an existing snapshot. Never mutates snapshots.
    ///
    /// `Err(GameError::MoveOutOfRange)` is a contract violation: the
    /// navigation list covers exactly the valid indices.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.snapshots.len() {
            return Err(GameError::MoveOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }

        tracing::debug!(from = self.cursor, to = index, "cursor jump");
        self.cursor = index;
        Ok(())
    }

    /// The time-travel navigation list.
    ///
    /// Lazy and recomputed on every call from the current history. Entry 0
    /// ("Go to game start") is always present; an entry for move `m > 0` is
    /// present only when `m` is not the cursor - there is no point offering
    /// a jump to where the viewer already is.
    pub fn move_list(&self) -> impl Iterator<Item = MoveListEntry> + '_ {
        let cursor = self.cursor;
        (0..self.snapshots.len())
            .filter(move |&index| index == 0 || index != cursor)
            .map(|index| {
                let label = if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                };
                MoveListEntry { index, label }
            })
    }

    /// The moves along the current branch, reconstructed from snapshots.
    pub fn moves(&self) -> impl Iterator<Item = MoveRecord> + '_ {
        (1..self.snapshots.len()).filter_map(move |turn| {
            MoveRecord::between(&self.snapshots[turn - 1], &self.snapshots[turn], turn)
        })
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
