//! Merged-statement execution against an ephemeral instance.

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::debug;

use sqlrange_models::{AttemptOutcome, Level, RangeResult, SqlValue};

use crate::interleave::interleave;
use crate::sandbox::EphemeralDb;

/// Run one attempt end to end.
///
/// Interleaves the level's template with the learner's fragments,
/// provisions a fresh instance from the level's setup script, executes the
/// merged statement, and runs the level's checker (if any) on the same
/// instance afterwards.
///
/// An engine-level failure of the merged statement or the checker is
/// routine learner experimentation and comes back as
/// [`AttemptOutcome::QueryError`]; only provisioning and infrastructure
/// faults propagate as errors. No statement-type restriction is applied:
/// arbitrary DDL/DML is in bounds because the instance dies with the
/// attempt.
pub fn run_attempt(level: &Level, fragments: &[String]) -> RangeResult<AttemptOutcome> {
    let sql = interleave(&level.template, fragments);
    // Merged text is attacker-controlled; keep it out of default-level logs.
    debug!(level_id = level.id, sql = %sql, "executing attempt statement");

    let db = EphemeralDb::provision(&level.setup_sql)?;
    match query_rows(db.connection(), &sql) {
        Ok((column_names, rows)) => {
            if let Some(checker) = level.checker.as_deref().filter(|c| !c.trim().is_empty()) {
                // Same connection, same state the main statement left behind.
                if let Err(e) = db.connection().execute_batch(checker) {
                    return Ok(AttemptOutcome::QueryError {
                        message: e.to_string(),
                    });
                }
            }
            Ok(AttemptOutcome::Rows { column_names, rows })
        }
        Err(e) => Ok(AttemptOutcome::QueryError {
            message: e.to_string(),
        }),
    }
}

/// Execute one statement and collect ordered column names and typed rows.
///
/// Non-SELECT statements execute with zero columns and zero rows; column
/// names are taken from the prepared statement so an empty result set still
/// reports its header.
fn query_rows(conn: &Connection, sql: &str) -> rusqlite::Result<(Vec<String>, Vec<Vec<SqlValue>>)> {
    let mut stmt = conn.prepare(sql)?;
    let column_names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let column_count = stmt.column_count();

    let mut collected = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(scalar_from_ref(row.get_ref(i)?));
        }
        collected.push(values);
    }
    Ok((column_names, collected))
}

fn scalar_from_ref(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Integer(i),
        ValueRef::Real(r) => SqlValue::Real(r),
        ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_engine_scalar_types() {
        let db = EphemeralDb::provision("").unwrap();
        let (columns, rows) = query_rows(
            db.connection(),
            "SELECT 1 AS i, 1.5 AS r, 'x' AS t, NULL AS n, x'ff' AS b",
        )
        .unwrap();
        assert_eq!(columns, vec!["i", "r", "t", "n", "b"]);
        assert_eq!(
            rows,
            vec![vec![
                SqlValue::Integer(1),
                SqlValue::Real(1.5),
                SqlValue::Text("x".to_string()),
                SqlValue::Null,
                SqlValue::Blob(vec![0xff]),
            ]]
        );
    }

    #[test]
    fn empty_result_set_still_reports_columns() {
        let db = EphemeralDb::provision("CREATE TABLE t (a, b);").unwrap();
        let (columns, rows) = query_rows(db.connection(), "SELECT a, b FROM t").unwrap();
        assert_eq!(columns, vec!["a", "b"]);
        assert!(rows.is_empty());
    }
}
