//! Ledger repository trait.
//!
//! Defines the interface for persisting the two ledger records.

use crate::error::Result;
use crate::player::Player;
use crate::session::Session;

/// An abstract store for the ledger's two durable records.
///
/// This trait decouples [`crate::ledger::LedgerStore`] from the storage
/// mechanism (JSON files, an in-memory test double, a database). The
/// records are whole ordered sequences, written wholesale: the ledger is
/// small enough that per-entity storage would buy nothing.
///
/// # Implementation Notes
///
/// - Loading a record that was never written must yield an empty
///   collection, not an error.
/// - Writes should be atomic so a crash never leaves a half-written
///   record; the previous snapshot staying stale is acceptable.
pub trait LedgerRepository: Send + Sync {
    /// Loads the `users` record.
    fn load_players(&self) -> Result<Vec<Player>>;

    /// Replaces the `users` record.
    fn save_players(&self, players: &[Player]) -> Result<()>;

    /// Loads the `sessions` record.
    fn load_sessions(&self) -> Result<Vec<Session>>;

    /// Replaces the `sessions` record.
    fn save_sessions(&self, sessions: &[Session]) -> Result<()>;
}
