//! Ledger module: the store that owns the canonical collections and the
//! repository trait it persists through.

mod repository;
mod store;

pub use repository::LedgerRepository;
pub use store::LedgerStore;
