//! Player domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player known to the ledger.
///
/// The id is an opaque UUID string assigned at creation and never
/// changes; the display name may be edited later. Removing a player does
/// not rewrite the sessions they appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier (UUID format)
    pub id: String,
    /// Display name
    pub name: String,
}

impl Player {
    /// Creates a new player with a fresh id.
    ///
    /// Name validation (trimming, rejecting blank input) is the store's
    /// job; this constructor takes the name as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_unique_id() {
        let a = Player::new("Alice");
        let b = Player::new("Bob");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Alice");
    }
}
