//! Shared handle to one registered game.

use super::error::RegistryError;
use super::key::UserPairKey;
use duel_tictactoe::{GameResult, GameSnapshot, GameState};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::instrument;

/// Cloneable reference to a game in the registry.
///
/// Each handle carries its own lock, so moves against one game run one at a
/// time while other games proceed independently.
#[derive(Debug, Clone)]
pub struct GameHandle<const N: usize> {
    key: UserPairKey,
    state: Arc<Mutex<GameState<N>>>,
}

impl<const N: usize> GameHandle<N> {
    /// Wraps a game under `key`.
    pub fn new(key: UserPairKey, game: GameState<N>) -> Self {
        Self {
            key,
            state: Arc::new(Mutex::new(game)),
        }
    }

    /// Pair key this game is registered under.
    pub fn key(&self) -> &UserPairKey {
        &self.key
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState<N>>, RegistryError> {
        self.state.lock().map_err(|_| RegistryError::LockPoisoned {
            context: "accessing a game",
        })
    }

    /// Applies a move under this game's lock.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn make_move(&self, mover: &str, x: i64, y: i64) -> Result<GameResult, RegistryError> {
        Ok(self.lock()?.make_move(mover, x, y)?)
    }

    /// Applies a move and captures the resulting view under one lock.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn play(
        &self,
        mover: &str,
        x: i64,
        y: i64,
    ) -> Result<(GameResult, GameSnapshot), RegistryError> {
        let mut game = self.lock()?;
        let result = game.make_move(mover, x, y)?;
        Ok((result, game.snapshot()))
    }

    /// Concedes on behalf of `user`.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn forfeit(&self, user: &str) -> Result<GameResult, RegistryError> {
        Ok(self.lock()?.forfeit(user)?)
    }

    /// Current view of the game.
    pub fn snapshot(&self) -> Result<GameSnapshot, RegistryError> {
        Ok(self.lock()?.snapshot())
    }

    /// Runs `f` against the game while holding its lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState<N>) -> R) -> Result<R, RegistryError> {
        let game = self.lock()?;
        Ok(f(&*game))
    }

    /// True if both handles refer to the same game instance.
    pub fn same_game(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}
