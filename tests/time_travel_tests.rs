//! Time-travel behavior verification.
//!
//! These tests drive full sessions through the public facade: jumping,
//! branching, truncation, and the silent-rejection policy for illegal
//! clicks.

use tictactoe_engine::{Cell, Game, GameError, GameStatus, MoveOutcome, Player};

/// A played move after a rewind replaces the abandoned future, not the past.
#[test]
fn test_branching_replaces_the_future() {
    let mut game = Game::new();
    game.play(0).unwrap();
    game.play(1).unwrap();
    game.play(2).unwrap();
    assert_eq!(game.history().len(), 4);

    game.jump_to(1).unwrap();
    let outcome = game.play(4).unwrap();
    assert_eq!(outcome, MoveOutcome::Applied);

    // Length 3: snapshots 0, 1, and the new branch tip
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.turn_number(), 2);

    // The tip is the move applied on top of snapshot 1, not the old move 2
    let board = game.board();
    assert_eq!(board.get(0), Some(Cell::Mark(Player::X)));
    assert_eq!(board.get(4), Some(Cell::Mark(Player::O)));
    assert_eq!(board.get(1), Some(Cell::Empty));
    assert_eq!(board.get(2), Some(Cell::Empty));
}

/// The abandoned branch is unreachable through any navigation call.
#[test]
fn test_old_branch_is_unrecoverable() {
    let mut game = Game::new();
    game.play(0).unwrap();
    game.play(1).unwrap();
    game.play(2).unwrap();

    game.jump_to(0).unwrap();
    game.play(8).unwrap();

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.jump_to(2), Err(GameError::MoveOutOfRange { index: 2, len: 2 }));
    for entry in game.move_list() {
        assert!(entry.index < 2);
    }
    assert!(game.history().snapshot(2).is_none());
}

/// Jumping only moves the cursor; every snapshot stays bit-identical.
#[test]
fn test_jump_is_pure_navigation() {
    let mut game = Game::new();
    for cell in [4, 0, 8] {
        game.play(cell).unwrap();
    }

    let snapshots: Vec<_> = (0..game.history().len())
        .map(|i| *game.history().snapshot(i).unwrap())
        .collect();

    for target in [0, 2, 1, 3, 0] {
        game.jump_to(target).unwrap();
        assert_eq!(game.board(), &snapshots[target]);
        assert_eq!(game.history().len(), snapshots.len());
        assert_eq!(game.turn_number(), target);
    }
}

/// Turn parity is a pure function of the cursor, even across branches.
#[test]
fn test_turn_parity_across_branches() {
    let mut game = Game::new();
    game.play(0).unwrap();
    game.play(1).unwrap();
    game.play(2).unwrap();

    game.jump_to(1).unwrap();
    assert_eq!(game.next_player(), Player::O);

    // O plays from the branch point; the new tip is move 2, X to act
    game.play(5).unwrap();
    assert_eq!(game.turn_number(), 2);
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.board().get(5), Some(Cell::Mark(Player::O)));
}

/// Clicking a filled square does nothing, silently.
#[test]
fn test_occupied_click_is_silent_noop() {
    let mut game = Game::new();
    game.play(4).unwrap();

    let before = game.clone();
    assert_eq!(game.play(4).unwrap(), MoveOutcome::Ignored);
    assert_eq!(game, before);
    assert_eq!(game.status_text(), "Next player: O");
}

/// Moves are blocked at a won snapshot but resume after rewinding.
#[test]
fn test_terminal_policy_is_cursor_local() {
    let mut game = Game::new();
    for cell in [0, 1, 3, 4, 6] {
        game.play(cell).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    // Viewed snapshot is terminal: the click is swallowed
    assert_eq!(game.play(7).unwrap(), MoveOutcome::Ignored);
    assert_eq!(game.history().len(), 6);

    // Rewind to before the win: play resumes and truncates the won future
    game.jump_to(3).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.play(8).unwrap(), MoveOutcome::Applied);
    assert_eq!(game.history().len(), 5);
}

/// The navigation list hides the cursor entry but always offers game start.
#[test]
fn test_move_list_rule() {
    let mut game = Game::new();
    game.play(0).unwrap();
    game.play(1).unwrap();
    game.play(2).unwrap();

    // Cursor at 3 (the tip): offered 0, 1, 2
    let labels: Vec<String> = game.move_list().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2"]
    );

    // Cursor at 0: "Go to game start" is still offered
    game.jump_to(0).unwrap();
    let indices: Vec<usize> = game.move_list().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);

    // Cursor at 2: entry 2 is hidden
    game.jump_to(2).unwrap();
    let indices: Vec<usize> = game.move_list().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 3]);
}

/// A full session survives a serde round trip mid-branch.
#[test]
fn test_session_roundtrip() {
    let mut game = Game::new();
    for cell in [4, 0, 8] {
        game.play(cell).unwrap();
    }
    game.jump_to(2).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.turn_number(), 2);
    assert_eq!(restored.next_player(), game.next_player());
}
