//! Ephemeral per-attempt database instances.

use rusqlite::Connection;
use sqlrange_models::{RangeError, RangeResult};

/// A throwaway in-memory SQLite instance, provisioned from a level's setup
/// script and discarded when dropped.
///
/// Every attempt gets its own instance: concurrent attempts never observe
/// each other, and nothing a learner injects (up to and including dropping
/// every table) outlives the request.
#[derive(Debug)]
pub struct EphemeralDb {
    conn: Connection,
}

impl EphemeralDb {
    /// Provision a fresh instance and apply the setup script.
    ///
    /// A failing setup script is a fault in the level's content, not in the
    /// learner's input, so it surfaces as [`RangeError::Setup`] rather than
    /// as a recoverable query outcome.
    pub fn provision(setup_sql: &str) -> RangeResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| RangeError::Internal {
            reason: format!("failed to open in-memory instance: {e}"),
        })?;
        conn.execute_batch(setup_sql)
            .map_err(|e| RangeError::Setup {
                reason: e.to_string(),
            })?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
