//! Storage implementations for the buyin ledger.

pub mod atomic_json;
pub mod json_file_repository;

pub use crate::json_file_repository::JsonFileRepository;
