//! File-backed ledger repository.
//!
//! Persists the ledger's two records as JSON documents in one
//! directory:
//!
//! ```text
//! base_dir/
//! ├── users.json
//! └── sessions.json
//! ```
//!
//! Nothing outside this module reads or writes these files.

use std::fs;
use std::path::{Path, PathBuf};

use buyin_core::config::LedgerConfig;
use buyin_core::error::{LedgerError, Result};
use buyin_core::ledger::LedgerRepository;
use buyin_core::player::Player;
use buyin_core::session::Session;

use crate::atomic_json::AtomicJsonFile;

const USERS_FILE: &str = "users.json";
const SESSIONS_FILE: &str = "sessions.json";

/// [`LedgerRepository`] over two JSON documents under a base directory.
pub struct JsonFileRepository {
    users: AtomicJsonFile<Vec<Player>>,
    sessions: AtomicJsonFile<Vec<Session>>,
}

impl JsonFileRepository {
    /// Creates a repository rooted at `base_dir`, creating the directory
    /// if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;

        Ok(Self {
            users: AtomicJsonFile::new(base_dir.join(USERS_FILE)),
            sessions: AtomicJsonFile::new(base_dir.join(SESSIONS_FILE)),
        })
    }

    /// Creates a repository at the default location (`~/.buyin`).
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_dir()?)
    }

    /// Creates a repository honoring a configured `data_dir` override,
    /// falling back to the default location.
    pub fn from_config(config: &LedgerConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => Self::new(dir),
            None => Self::default_location(),
        }
    }

    fn default_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| LedgerError::config("Cannot find home directory"))?;
        Ok(home_dir.join(".buyin"))
    }
}

impl LedgerRepository for JsonFileRepository {
    fn load_players(&self) -> Result<Vec<Player>> {
        Ok(self.users.load()?.unwrap_or_default())
    }

    fn save_players(&self, players: &[Player]) -> Result<()> {
        tracing::debug!(count = players.len(), "Writing users record");
        self.users.save(&players.to_vec())
    }

    fn load_sessions(&self) -> Result<Vec<Session>> {
        Ok(self.sessions.load()?.unwrap_or_default())
    }

    fn save_sessions(&self, sessions: &[Session]) -> Result<()> {
        tracing::debug!(count = sessions.len(), "Writing sessions record");
        self.sessions.save(&sessions.to_vec())
    }
}
