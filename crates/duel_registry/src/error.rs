//! Registry error types.

use super::key::UserPairKey;
use duel_tictactoe::MoveError;

/// Error returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum RegistryError {
    /// No game is registered for the pair.
    #[display("No game in progress for {key}")]
    NotFound {
        /// The pair that was looked up.
        key: UserPairKey,
    },

    /// A user id contains the key separator, so its pair key would be
    /// ambiguous.
    #[display("User id {user:?} must not contain the key separator {separator:?}")]
    InvalidUser {
        /// The rejected user id.
        user: String,
        /// The configured separator.
        separator: String,
    },

    /// The engine rejected a move.
    #[display("{_0}")]
    #[from]
    Move(MoveError),

    /// A thread panicked while holding a registry or game lock.
    #[display("Lock poisoned while {context}")]
    LockPoisoned {
        /// What the registry was doing.
        context: &'static str,
    },
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Move(e) => Some(e),
            RegistryError::NotFound { .. }
            | RegistryError::InvalidUser { .. }
            | RegistryError::LockPoisoned { .. } => None,
        }
    }
}
