//! # tictactoe-engine
//!
//! A pure state machine for two-player tic-tac-toe with branching move
//! history and time travel.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every board state is a value. Moves never
//!    mutate a board in place; they derive a new one. History is a
//!    persistent `im` vector of snapshots, so handing a snapshot to a
//!    reader is never invalidated by later truncation.
//!
//! 2. **Derived Turn State**: Whose turn it is falls out of cursor parity.
//!    It is computed on demand, never stored, so it cannot desynchronize
//!    from the history.
//!
//! 3. **Table-Driven Rules**: Win detection scans a fixed line table and
//!    knows nothing about history or turn order. The table is the single
//!    point of extension for a larger board.
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, move records, errors
//! - `history`: Snapshot container, cursor, branching time travel
//! - `rules`: Win evaluation over a single snapshot
//! - `game`: Session facade polled by a presentation layer

pub mod core;
pub mod game;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameError, MoveRecord, Player, CELL_COUNT};

pub use crate::game::{Game, GameStatus};

pub use crate::history::{GameHistory, MoveListEntry, MoveOutcome};

pub use crate::rules::{winner, winning_line, WIN_LINES};
