//! The ledger store: single source of truth for players and sessions.

use tokio::sync::broadcast;

use crate::error::{LedgerError, Result};
use crate::player::Player;
use crate::session::Session;

use super::repository::LedgerRepository;

/// Capacity of the change-notification channel. A subscriber that falls
/// further behind than this sees a lag instead of individual signals;
/// either way it learns that changes occurred and rereads state.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Owns the canonical player and session collections.
///
/// Construct one instance at application start and hand it to every
/// consumer; all mutations route through here. Readers get cloned
/// snapshots and re-read after each change notification.
///
/// Mutations follow one sequence: validate, apply in memory, persist
/// through the repository, notify subscribers. A persistence failure is
/// logged and surfaced as [`LedgerError::Persistence`], but the
/// in-memory state has already changed and remains the operative truth;
/// only the durable snapshot is stale. Because subscribers re-read the
/// in-memory state, the notification fires regardless.
pub struct LedgerStore {
    players: Vec<Player>,
    sessions: Vec<Session>,
    repository: Box<dyn LedgerRepository>,
    changes: broadcast::Sender<()>,
}

impl LedgerStore {
    /// Creates a store backed by the given repository and loads both
    /// records from it.
    ///
    /// A record that fails to load starts empty; the failure is logged,
    /// never fatal. From then on the in-memory collections are
    /// authoritative.
    pub fn new(repository: Box<dyn LedgerRepository>) -> Self {
        let players = repository.load_players().unwrap_or_else(|e| {
            tracing::warn!("Failed to load players, starting empty: {}", e);
            Vec::new()
        });
        let sessions = repository.load_sessions().unwrap_or_else(|e| {
            tracing::warn!("Failed to load sessions, starting empty: {}", e);
            Vec::new()
        });
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            players,
            sessions,
            repository,
            changes,
        }
    }

    /// Registers a change subscriber.
    ///
    /// Every successful mutation sends one zero-payload signal. Dropping
    /// the receiver unsubscribes; delivery around the drop is
    /// best-effort.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }

    // ------------------------------------------------------------------
    // Players
    // ------------------------------------------------------------------

    /// Adds a player and returns the created record.
    ///
    /// The name is trimmed first; empty or whitespace-only names are
    /// rejected before any state change.
    pub fn add_player(&mut self, name: &str) -> Result<Player> {
        let name = valid_name(name)?;
        let player = Player::new(name);
        self.players.push(player.clone());
        tracing::debug!(player_id = %player.id, "Added player");

        let persisted = self.persist_players();
        self.notify();
        persisted.map(|()| player)
    }

    /// Renames a player. Silently a no-op if the id is unknown.
    pub fn rename_player(&mut self, id: &str, name: &str) -> Result<()> {
        let name = valid_name(name)?;
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        player.name = name;

        let persisted = self.persist_players();
        self.notify();
        persisted
    }

    /// Removes a player. Silently a no-op if the id is unknown.
    ///
    /// Removal does not cascade: sessions the player appeared in keep
    /// their id in `player_ids` and any map entries keyed by it.
    pub fn remove_player(&mut self, id: &str) -> Result<()> {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return Ok(());
        }

        let persisted = self.persist_players();
        self.notify();
        persisted
    }

    /// Snapshot of all players, in insertion order.
    pub fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    /// Looks up a single player.
    pub fn player(&self, id: &str) -> Option<Player> {
        self.players.iter().find(|p| p.id == id).cloned()
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Creates a session and returns the created record.
    ///
    /// # Errors
    ///
    /// Rejects an empty participant set, a first buy-in that is not
    /// positive, and a negative second buy-in, all before any state
    /// change.
    pub fn create_session(
        &mut self,
        first_buy_in: i64,
        second_buy_in: i64,
        player_ids: Vec<String>,
    ) -> Result<Session> {
        if player_ids.is_empty() {
            return Err(LedgerError::validation(
                "session needs at least one player",
            ));
        }
        if first_buy_in <= 0 {
            return Err(LedgerError::validation("first buy-in must be positive"));
        }
        if second_buy_in < 0 {
            return Err(LedgerError::validation(
                "second buy-in must not be negative",
            ));
        }

        let session = Session::new(first_buy_in, second_buy_in, player_ids);
        self.sessions.push(session.clone());
        tracing::debug!(session_id = %session.id, "Created session");

        let persisted = self.persist_sessions();
        self.notify();
        persisted.map(|()| session)
    }

    /// Replaces the stored session with the same id.
    ///
    /// Silently ignored when no session with that id exists: replace is
    /// idempotent, and a consumer holding a stale copy of a deleted
    /// session is not an error.
    pub fn update_session(&mut self, session: Session) -> Result<()> {
        let Some(stored) = self.sessions.iter_mut().find(|s| s.id == session.id) else {
            return Ok(());
        };
        *stored = session;

        let persisted = self.persist_sessions();
        self.notify();
        persisted
    }

    /// Marks a session ended. Silently a no-op if the id is unknown.
    ///
    /// Ending an already-ended session rewrites the flag identically;
    /// the record does not change.
    pub fn end_session(&mut self, id: &str) -> Result<()> {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return Ok(());
        };
        session.is_ended = true;

        let persisted = self.persist_sessions();
        self.notify();
        persisted
    }

    /// The most recent session that has not been ended, if any. This is
    /// the sole definition of "active" for every consuming surface.
    pub fn current_session(&self) -> Option<Session> {
        self.sessions
            .iter()
            .filter(|s| !s.is_ended)
            .max_by_key(|s| s.date)
            .cloned()
    }

    /// Snapshot of all sessions, in insertion order.
    pub fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn persist_players(&self) -> Result<()> {
        self.repository.save_players(&self.players).map_err(|e| {
            tracing::warn!("Failed to persist players, in-memory state kept: {}", e);
            LedgerError::persistence(e.to_string())
        })
    }

    fn persist_sessions(&self) -> Result<()> {
        self.repository.save_sessions(&self.sessions).map_err(|e| {
            tracing::warn!("Failed to persist sessions, in-memory state kept: {}", e);
            LedgerError::persistence(e.to_string())
        })
    }

    fn notify(&self) {
        // Send only fails when no subscriber exists; ignore.
        let _ = self.changes.send(());
    }
}

fn valid_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::validation("player name must not be empty"));
    }
    Ok(name.to_string())
}
