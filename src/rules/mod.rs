//! Rule evaluation over single board snapshots.
//!
//! Evaluation is pure and stateless: it looks at one board and knows
//! nothing about history, cursors, or turn order. The caller composes
//! winner detection with a board-full check to distinguish "in progress"
//! from "draw" (see `Game::status`).

pub mod win;

pub use win::{winner, winning_line, WIN_LINES};
