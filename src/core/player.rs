//! Player identification and turn derivation.
//!
//! ## Turn Parity
//!
//! The engine never stores whose turn it is. X moves on even move indices,
//! O on odd ones, so the player to act is always a pure function of the
//! history cursor. `Player::on_move` is that function.

use serde::{Deserialize, Serialize};

/// Player in the game. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves on even move indices).
    X,
    /// Player O (moves on odd move indices).
    O,
}

impl Player {
    /// Returns the opponent player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player who acts at the given move index.
    ///
    /// Move index `m` means "m moves have been played so far", so this is
    /// also the player to act when the history cursor sits at `m`. Parity
    /// holds regardless of branching: a rewound-and-replayed game derives
    /// the same player for the same cursor position.
    ///
    /// ```
    /// use tictactoe_engine::Player;
    ///
    /// assert_eq!(Player::on_move(0), Player::X);
    /// assert_eq!(Player::on_move(1), Player::O);
    /// assert_eq!(Player::on_move(4), Player::X);
    /// ```
    #[must_use]
    pub const fn on_move(index: usize) -> Self {
        if index % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
