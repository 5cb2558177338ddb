//! Canonical keys for unordered user pairs.

use serde::{Deserialize, Serialize};

/// Separator used when none is configured.
pub const DEFAULT_KEY_SEPARATOR: &str = "$$";

/// Key addressing the single game between two users, regardless of which of
/// them is named first.
///
/// Built as `min(a, b) + separator + max(a, b)` under byte-wise ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserPairKey(String);

impl UserPairKey {
    /// Builds the key for `user_a` and `user_b`.
    pub fn new(user_a: &str, user_b: &str, separator: &str) -> Self {
        let (low, high) = if user_a <= user_b {
            (user_a, user_b)
        } else {
            (user_b, user_a)
        };
        Self(format!("{low}{separator}{high}"))
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserPairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserPairKey> for String {
    fn from(key: UserPairKey) -> Self {
        key.0
    }
}
