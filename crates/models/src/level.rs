use serde::{Deserialize, Serialize};

use crate::value::SqlValue;

/// A single challenge definition.
///
/// Immutable once created; the engine only ever reads it. The `template`
/// holds the literal SQL segments of the vulnerable query, with an implicit
/// injection point after each segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: i64,
    pub title: String,
    /// Ordered literal segments of the vulnerable query.
    pub template: Vec<String>,
    /// SQL applied to a fresh instance before any learner SQL runs.
    pub setup_sql: String,
    /// Optional post-statement hook, run on the same instance.
    pub checker: Option<String>,
    /// Secret flag, compared byte-for-byte.
    pub flag: String,
}

/// Public view of a level. The flag, setup script, and checker must never
/// reach the client through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDetailResponse {
    pub id: i64,
    pub title: String,
    pub template: Vec<String>,
}

impl From<&Level> for LevelDetailResponse {
    fn from(level: &Level) -> Self {
        Self {
            id: level.id,
            title: level.title.clone(),
            template: level.template.clone(),
        }
    }
}

/// Attempt request body: one fragment intended per injection point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRequest {
    pub user_input: Vec<String>,
}

/// Flag verification request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub maybe_flag: String,
}

/// Flag verification response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub correct: bool,
}

/// Outcome of executing a merged statement.
///
/// A failing statement is routine while the learner experiments, so it is
/// an outcome variant rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Rows {
        column_names: Vec<String>,
        rows: Vec<Vec<SqlValue>>,
    },
    QueryError {
        message: String,
    },
}

/// Wire shape of an attempt outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AttemptResponse {
    Rows {
        column_names: Vec<String>,
        query_result: Vec<Vec<SqlValue>>,
    },
    Error {
        error: String,
    },
}

impl From<AttemptOutcome> for AttemptResponse {
    fn from(outcome: AttemptOutcome) -> Self {
        match outcome {
            AttemptOutcome::Rows { column_names, rows } => AttemptResponse::Rows {
                column_names,
                query_result: rows,
            },
            AttemptOutcome::QueryError { message } => AttemptResponse::Error { error: message },
        }
    }
}
