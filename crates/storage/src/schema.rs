//! SQLite schema for the level catalog.
//!
//! Tables:
//! - `levels`: Immutable challenge definitions, ordered by creation

/// DDL for the level catalog.
///
/// `template` is a JSON array of the literal query segments; `checker` is
/// NULL when the level defines none. Rows are never updated after insert.
pub const LEVELS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS levels (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    template    TEXT NOT NULL,
    setup_sql   TEXT NOT NULL,
    checker     TEXT,
    flag        TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
