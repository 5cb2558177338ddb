//! Tests for game lookup, replacement and removal.

use duel_registry::{GameRegistry, RegistryConfig, RegistryError, TicTacToeRegistry, UserPairKey};
use duel_tictactoe::{GameResult, GameStatus, MoveError};
use std::io::Write;

fn win_for_alice(registry: &TicTacToeRegistry) -> Vec<GameResult> {
    [("alice", 0, 0), ("bob", 1, 0), ("alice", 0, 1), ("bob", 1, 1), ("alice", 0, 2)]
        .into_iter()
        .map(|(mover, x, y)| registry.make_move("alice", "bob", mover, x, y).unwrap())
        .collect()
}

#[test]
fn test_restart_with_reversed_pair_overwrites() {
    let registry = TicTacToeRegistry::default();
    let first = registry.start_game("alice", "bob").unwrap();
    registry.make_move("alice", "bob", "alice", 1, 1).unwrap();

    let second = registry.start_game("bob", "alice").unwrap();

    assert_eq!(first.key(), second.key());
    assert_eq!(registry.len().unwrap(), 1);
    let current = registry.game_for("alice", "bob").unwrap();
    assert!(current.same_game(&second));
    let snapshot = current.snapshot().unwrap();
    assert_eq!(snapshot.total_pieces, 0);
    assert_eq!(snapshot.current_mover, "bob");
}

#[test]
fn test_missing_game_is_not_found() {
    let registry = TicTacToeRegistry::default();
    let err = registry.make_move("alice", "bob", "alice", 0, 0).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            key: UserPairKey::new("alice", "bob", "$$")
        }
    );
}

#[test]
fn test_move_errors_pass_through() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("alice", "bob").unwrap();
    let err = registry.make_move("alice", "bob", "bob", 0, 0).unwrap_err();
    assert!(matches!(err, RegistryError::Move(MoveError::WrongTurn { .. })));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_finished_game_is_cleared() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("alice", "bob").unwrap();

    let results = win_for_alice(&registry);

    assert_eq!(results.last(), Some(&GameResult::FirstPlayerWin));
    assert!(registry.is_empty().unwrap());
}

#[test]
fn test_finished_game_kept_when_configured() {
    let config = RegistryConfig::default().with_clear_finished_games(false);
    let registry = TicTacToeRegistry::new(config);
    registry.start_game("alice", "bob").unwrap();

    win_for_alice(&registry);

    let handle = registry.game_for("alice", "bob").unwrap();
    assert_eq!(
        handle.with_state(|game| game.status()).unwrap(),
        GameStatus::Finished(GameResult::FirstPlayerWin)
    );
    let err = registry.make_move("alice", "bob", "bob", 2, 2).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Move(MoveError::GameAlreadyFinished { .. })
    ));
    assert!(registry.clear_game("bob", "alice").unwrap());
    assert!(!registry.clear_game("bob", "alice").unwrap());
}

#[test]
fn test_forfeit_clears_game() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("alice", "bob").unwrap();
    assert_eq!(
        registry.forfeit("alice", "bob", "bob").unwrap(),
        GameResult::FirstPlayerWin
    );
    assert!(registry.is_empty().unwrap());
}

#[test]
fn test_active_keys_sorted() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("zed", "amy").unwrap();
    registry.start_game("bob", "alice").unwrap();
    let keys: Vec<String> = registry
        .active_keys()
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(keys, ["alice$$bob", "amy$$zed"]);
}

#[test]
fn test_put_get_delete() {
    let registry = GameRegistry::<4>::default();
    let key = registry.key_for("carol", "dave").unwrap();
    let handle = duel_registry::GameHandle::new(
        key.clone(),
        duel_tictactoe::GameState::<4>::start("carol", "dave"),
    );

    assert!(registry.put(handle.clone()).unwrap().is_none());
    assert!(registry.get(&key).unwrap().same_game(&handle));
    assert!(registry.delete(&key).unwrap());
    assert!(matches!(registry.get(&key), Err(RegistryError::NotFound { .. })));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "key_separator = \"#\"").unwrap();

    let config = RegistryConfig::from_file(file.path()).unwrap();
    let registry = TicTacToeRegistry::new(config);

    assert_eq!(registry.key_for("b", "a").unwrap().as_str(), "a#b");
    assert!(*registry.config().clear_finished_games());
}

#[test]
fn test_config_missing_file() {
    let err = RegistryConfig::from_file("/nonexistent/duel.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_user_ids_containing_separator_cannot_collide() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("ab", "c").unwrap();

    for (a, b) in [("a$$b", "c"), ("a", "b$$c")] {
        assert!(matches!(
            registry.start_game(a, b),
            Err(RegistryError::InvalidUser { .. })
        ));
        assert!(matches!(
            registry.make_move(a, b, "a", 0, 0),
            Err(RegistryError::InvalidUser { .. })
        ));
    }

    assert_eq!(registry.len().unwrap(), 1);
    assert_eq!(registry.game_for("c", "ab").unwrap().snapshot().unwrap().total_pieces, 0);
}

#[test]
fn test_custom_separator_is_the_one_rejected() {
    let config = RegistryConfig::default().with_key_separator("#".to_string());
    let registry = TicTacToeRegistry::new(config);

    assert_eq!(registry.key_for("a$$b", "c").unwrap().as_str(), "a$$b#c");
    assert!(matches!(
        registry.key_for("a#b", "c"),
        Err(RegistryError::InvalidUser { .. })
    ));
}

#[test]
fn test_play_returns_board_of_the_moved_game() {
    let registry = TicTacToeRegistry::default();
    let handle = registry.start_game("alice", "bob").unwrap();

    let (result, snapshot) = registry.play("alice", "bob", "alice", 1, 1).unwrap();

    assert_eq!(result, GameResult::Pending);
    assert_eq!(snapshot.total_pieces, 1);
    assert_eq!(snapshot.current_mover, "bob");
    assert_eq!(handle.snapshot().unwrap(), snapshot);
}

#[test]
fn test_play_finishing_move_still_reports_final_board() {
    let registry = TicTacToeRegistry::default();
    registry.start_game("alice", "bob").unwrap();
    for (mover, x, y) in [("alice", 0, 0), ("bob", 1, 0), ("alice", 0, 1), ("bob", 1, 1)] {
        registry.make_move("alice", "bob", mover, x, y).unwrap();
    }

    let (result, snapshot) = registry.play("alice", "bob", "alice", 0, 2).unwrap();

    assert_eq!(result, GameResult::FirstPlayerWin);
    assert_eq!(snapshot.status, GameStatus::Finished(GameResult::FirstPlayerWin));
    assert_eq!(snapshot.total_pieces, 5);
    assert!(registry.is_empty().unwrap());
}
