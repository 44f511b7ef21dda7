//! LevelStore: SQLite-backed level catalog.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use sqlrange_models::{Level, RangeError, RangeResult};

use crate::schema::LEVELS_SCHEMA;

/// Parameters for inserting a level.
#[derive(Debug, Clone)]
pub struct NewLevel<'a> {
    pub title: &'a str,
    pub template: &'a [String],
    pub setup_sql: &'a str,
    pub checker: Option<&'a str>,
    pub flag: &'a str,
}

/// SQLite-backed level catalog.
///
/// Levels are immutable once inserted; request handling only reads, so the
/// mutex is contended only for the duration of single short statements.
#[derive(Clone)]
pub struct LevelStore {
    conn: Arc<Mutex<Connection>>,
}

impl LevelStore {
    /// Open a file-backed catalog, creating the schema if needed.
    pub fn open(path: &Path) -> RangeResult<Self> {
        let conn = Connection::open(path).map_err(storage_err)?;
        Self::init_connection(conn)
    }

    /// Create an in-memory catalog (for testing).
    pub fn memory() -> RangeResult<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> RangeResult<Self> {
        conn.execute_batch(LEVELS_SCHEMA).map_err(storage_err)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Fetch a level by id. `Ok(None)` means the id has no record, which is
    /// a distinct outcome from a lookup failure.
    pub fn get_level(&self, id: i64) -> RangeResult<Option<Level>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, title, template, setup_sql, checker, flag
                 FROM levels WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()
            .map_err(storage_err)?;

        let Some((id, title, template_json, setup_sql, checker, flag)) = row else {
            return Ok(None);
        };
        let template: Vec<String> = serde_json::from_str(&template_json).map_err(|e| {
            RangeError::Storage {
                reason: format!("level {id} has a malformed template column: {e}"),
            }
        })?;
        Ok(Some(Level {
            id,
            title,
            template,
            setup_sql,
            checker,
            flag,
        }))
    }

    /// List level titles in creation order.
    pub fn list_titles(&self) -> RangeResult<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT title FROM levels ORDER BY id")
            .map_err(storage_err)?;
        let titles = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(storage_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(storage_err)?;
        Ok(titles)
    }

    /// Insert a level, returning its assigned id.
    pub fn insert_level(&self, level: &NewLevel<'_>) -> RangeResult<i64> {
        let template_json = serde_json::to_string(level.template).map_err(|e| {
            RangeError::Storage {
                reason: format!("failed to encode template: {e}"),
            }
        })?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO levels (title, template, setup_sql, checker, flag)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                level.title,
                template_json,
                level.setup_sql,
                level.checker,
                level.flag
            ],
        )
        .map_err(storage_err)?;
        Ok(conn.last_insert_rowid())
    }

    /// Number of levels in the catalog.
    pub fn count(&self) -> RangeResult<i64> {
        let conn = self.lock()?;
        conn.query_row("SELECT COUNT(*) FROM levels", [], |row| row.get(0))
            .map_err(storage_err)
    }

    fn lock(&self) -> RangeResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RangeError::Storage {
            reason: "level catalog mutex poisoned".to_string(),
        })
    }
}

fn storage_err(e: rusqlite::Error) -> RangeError {
    RangeError::Storage {
        reason: e.to_string(),
    }
}
