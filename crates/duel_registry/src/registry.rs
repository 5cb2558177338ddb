//! Registry of in-progress games keyed by user pair.

use super::config::RegistryConfig;
use super::error::RegistryError;
use super::handle::GameHandle;
use super::key::UserPairKey;
use duel_tictactoe::{DEFAULT_BOARD_SIZE, GameResult, GameSnapshot, GameState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Registry for the canonical 3x3 game.
pub type TicTacToeRegistry = GameRegistry<DEFAULT_BOARD_SIZE>;

/// Holds at most one game per unordered user pair.
///
/// Clones share the same map. The map lock is only held for lookups and
/// updates; moves run under the individual game's lock.
#[derive(Debug, Clone)]
pub struct GameRegistry<const N: usize> {
    config: RegistryConfig,
    games: Arc<Mutex<HashMap<UserPairKey, GameHandle<N>>>>,
}

impl<const N: usize> GameRegistry<N> {
    /// Creates an empty registry.
    #[instrument]
    pub fn new(config: RegistryConfig) -> Self {
        info!("Creating game registry");
        Self {
            config,
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn games(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<UserPairKey, GameHandle<N>>>, RegistryError> {
        self.games.lock().map_err(|_| RegistryError::LockPoisoned {
            context: "accessing the registry",
        })
    }

    /// Canonical key for two users.
    ///
    /// Rejects ids containing the separator, since `("a$$b", "c")` and
    /// `("a", "b$$c")` would otherwise share a key.
    pub fn key_for(&self, user_a: &str, user_b: &str) -> Result<UserPairKey, RegistryError> {
        let separator = self.config.key_separator();
        if let Some(user) = [user_a, user_b].into_iter().find(|u| u.contains(separator.as_str())) {
            warn!(user, "User id contains the key separator");
            return Err(RegistryError::InvalidUser {
                user: user.to_string(),
                separator: separator.clone(),
            });
        }
        Ok(UserPairKey::new(user_a, user_b, separator))
    }

    /// Starts a new game with `user_a` moving first, replacing any game the
    /// pair already had.
    #[instrument(skip(self))]
    pub fn start_game(&self, user_a: &str, user_b: &str) -> Result<GameHandle<N>, RegistryError> {
        let key = self.key_for(user_a, user_b)?;
        let handle = GameHandle::new(key, GameState::start(user_a, user_b));
        if let Some(previous) = self.put(handle.clone())? {
            info!(key = %previous.key(), "Replaced existing game");
        }
        Ok(handle)
    }

    /// Registers `handle` under its key, returning the game it replaced.
    #[instrument(skip(self, handle), fields(key = %handle.key()))]
    pub fn put(&self, handle: GameHandle<N>) -> Result<Option<GameHandle<N>>, RegistryError> {
        let mut games = self.games()?;
        let previous = games.insert(handle.key().clone(), handle);
        debug!(active = games.len(), "Game registered");
        Ok(previous)
    }

    /// Looks up the game for `key`.
    #[instrument(skip(self))]
    pub fn get(&self, key: &UserPairKey) -> Result<GameHandle<N>, RegistryError> {
        self.games()?.get(key).cloned().ok_or_else(|| {
            debug!("Game not found");
            RegistryError::NotFound { key: key.clone() }
        })
    }

    /// Looks up the game between two users.
    pub fn game_for(&self, user_a: &str, user_b: &str) -> Result<GameHandle<N>, RegistryError> {
        self.get(&self.key_for(user_a, user_b)?)
    }

    /// Removes the game for `key`. Returns whether one was registered.
    #[instrument(skip(self))]
    pub fn delete(&self, key: &UserPairKey) -> Result<bool, RegistryError> {
        let removed = self.games()?.remove(key).is_some();
        if removed {
            info!("Game removed");
        }
        Ok(removed)
    }

    /// Removes the game between two users.
    pub fn clear_game(&self, user_a: &str, user_b: &str) -> Result<bool, RegistryError> {
        self.delete(&self.key_for(user_a, user_b)?)
    }

    /// Applies a move to the game between `user_a` and `user_b`.
    ///
    /// With `clear_finished_games` set, a terminal result also removes the
    /// game, provided the pair has not started a new one in the meantime.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        user_a: &str,
        user_b: &str,
        mover: &str,
        x: i64,
        y: i64,
    ) -> Result<GameResult, RegistryError> {
        let handle = self.game_for(user_a, user_b)?;
        let result = handle.make_move(mover, x, y).inspect_err(|e| {
            warn!(error = %e, "Move failed");
        })?;
        self.finish_if_terminal(&handle, result)?;
        Ok(result)
    }

    /// Like [`GameRegistry::make_move`], but also returns the board as the
    /// move left it, taken under the same game lock.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        user_a: &str,
        user_b: &str,
        mover: &str,
        x: i64,
        y: i64,
    ) -> Result<(GameResult, GameSnapshot), RegistryError> {
        let handle = self.game_for(user_a, user_b)?;
        let (result, snapshot) = handle.play(mover, x, y).inspect_err(|e| {
            warn!(error = %e, "Move failed");
        })?;
        self.finish_if_terminal(&handle, result)?;
        Ok((result, snapshot))
    }

    /// Concedes the game between two users on behalf of `user`.
    #[instrument(skip(self))]
    pub fn forfeit(
        &self,
        user_a: &str,
        user_b: &str,
        user: &str,
    ) -> Result<GameResult, RegistryError> {
        let handle = self.game_for(user_a, user_b)?;
        let result = handle.forfeit(user)?;
        self.finish_if_terminal(&handle, result)?;
        Ok(result)
    }

    fn finish_if_terminal(
        &self,
        handle: &GameHandle<N>,
        result: GameResult,
    ) -> Result<(), RegistryError> {
        if !result.is_terminal() || !*self.config.clear_finished_games() {
            return Ok(());
        }
        let mut games = self.games()?;
        if games.get(handle.key()).is_some_and(|current| current.same_game(handle)) {
            games.remove(handle.key());
            info!(key = %handle.key(), %result, "Finished game cleared");
        }
        Ok(())
    }

    /// Keys of all registered games, sorted.
    pub fn active_keys(&self) -> Result<Vec<UserPairKey>, RegistryError> {
        let mut keys: Vec<_> = self.games()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Number of registered games.
    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.games()?.len())
    }

    /// True when no game is registered.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.games()?.is_empty())
    }
}

impl<const N: usize> Default for GameRegistry<N> {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
