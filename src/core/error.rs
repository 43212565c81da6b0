//! Error types for contract violations.
//!
//! The error surface is deliberately small. Playing into an occupied cell
//! is NOT an error - it is a silent no-op (see `MoveOutcome::Ignored`).
//! Errors here mean the caller passed an index that the exposed navigation
//! surface could never have produced.

use thiserror::Error;

/// A contract violation from the presentation layer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A move targeted a cell index outside the board.
    #[error("cell index {cell} is out of range (valid cells are 0-8)")]
    CellOutOfRange {
        /// The offending cell index.
        cell: usize,
    },

    /// A jump targeted a move index outside the recorded history.
    #[error("move index {index} is out of range (history has {len} snapshots)")]
    MoveOutOfRange {
        /// The offending move index.
        index: usize,
        /// Number of snapshots currently in the history.
        len: usize,
    },
}
