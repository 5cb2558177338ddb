//! Registry of in-progress pairwise games.
//!
//! Maps an unordered pair of users to the one game they are playing. The
//! registry is an ordinary value: construct it, share it with `clone()`, and
//! drop it when done. Moves against one game are serialized by that game's
//! lock; different pairs never contend beyond a brief map lookup.
//!
//! # Example
//!
//! ```
//! use duel_registry::{RegistryConfig, TicTacToeRegistry};
//! use duel_tictactoe::GameResult;
//!
//! # fn main() -> Result<(), duel_registry::RegistryError> {
//! let registry = TicTacToeRegistry::new(RegistryConfig::default());
//! registry.start_game("alice", "bob")?;
//! let result = registry.make_move("bob", "alice", "alice", 1, 1)?;
//! assert_eq!(result, GameResult::Pending);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod handle;
mod key;
mod registry;

pub use config::{ConfigError, RegistryConfig};
pub use error::RegistryError;
pub use handle::GameHandle;
pub use key::{DEFAULT_KEY_SEPARATOR, UserPairKey};
pub use registry::{GameRegistry, TicTacToeRegistry};
