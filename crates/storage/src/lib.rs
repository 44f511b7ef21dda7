//! Level catalog storage.
//!
//! A small SQLite-backed store holding the challenge levels. Read-only
//! during request handling; the only write path is the idempotent
//! bootstrap that hydrates the catalog with the built-in levels on first
//! start.

pub mod catalog;
pub mod schema;
pub mod seed;

pub use catalog::LevelStore;
pub use schema::LEVELS_SCHEMA;
