//! Game session facade.
//!
//! Composes the snapshot history with the rule evaluator into the surface
//! a presentation layer polls after every event: the viewed board, the
//! status line, the turn number, and the navigation list. The facade owns
//! the composite "no winner + full board = draw" check that the evaluator
//! deliberately leaves to its caller.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameError, Player};
use crate::history::{GameHistory, MoveListEntry, MoveOutcome};
use crate::rules;

/// Status of the viewed snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Check if no further moves should be offered at this snapshot.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// One game session: a history plus the queries derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: GameHistory,
}

impl Game {
    /// Start a fresh game at the empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Play a move into the given cell. See `GameHistory::play`.
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, GameError> {
        self.history.play(cell)
    }

    /// Jump the cursor to an existing snapshot. See `GameHistory::jump_to`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        self.history.jump_to(index)
    }

    /// The currently viewed board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The underlying history.
    #[must_use]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The player to act at the viewed snapshot.
    #[must_use]
    pub fn next_player(&self) -> Player {
        self.history.next_player()
    }

    /// The viewed move number ("You are at move #N" on the display side).
    #[must_use]
    pub fn turn_number(&self) -> usize {
        self.history.cursor()
    }

    /// Status of the viewed snapshot.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        match rules::winner(board) {
            Some(player) => GameStatus::Won(player),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// The status line: "Winner: X" once a line is complete, otherwise
    /// "Next player: O". A drawn board still reads "Next player" - the
    /// status line only announces winners.
    #[must_use]
    pub fn status_text(&self) -> String {
        match rules::winner(self.board()) {
            Some(player) => format!("Winner: {}", player),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// The time-travel navigation list. See `GameHistory::move_list`.
    pub fn move_list(&self) -> impl Iterator<Item = MoveListEntry> + '_ {
        self.history.move_list()
    }
}
