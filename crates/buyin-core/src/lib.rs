//! Core of the buyin ledger: domain models for players and sessions,
//! the store that owns them, and the pure calculator that turns session
//! state into per-player financial results.
//!
//! Presentation surfaces call [`ledger::LedgerStore`] mutations, listen
//! on [`ledger::LedgerStore::subscribe`], and re-read state through the
//! snapshot accessors plus [`session::calculator`] on every signal.

pub mod config;
pub mod error;
pub mod ledger;
pub mod player;
pub mod session;

// Re-export common error type
pub use error::LedgerError;
