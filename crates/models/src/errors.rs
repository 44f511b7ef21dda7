use thiserror::Error;

/// sqlrange errors
///
/// Three kinds of outcome matter to callers: a missing level, a fault in
/// the level's own content (setup script), and everything else
/// infrastructure-shaped. Learner query failures are deliberately NOT here:
/// they are data (see [`crate::AttemptOutcome::QueryError`]), not errors.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Level not found: {id}")]
    LevelNotFound { id: i64 },

    #[error("Level setup script failed: {reason}")]
    Setup { reason: String },

    #[error("Storage error: {reason}")]
    Storage { reason: String },

    #[error("Internal error: {reason}")]
    Internal { reason: String },
}

impl RangeError {
    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            RangeError::LevelNotFound { .. } => 404,
            RangeError::Setup { .. } => 500,
            RangeError::Storage { .. } => 500,
            RangeError::Internal { .. } => 500,
        }
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        match self {
            RangeError::LevelNotFound { .. } => "level",
            RangeError::Setup { .. } => "setup",
            RangeError::Storage { .. } => "storage",
            RangeError::Internal { .. } => "internal",
        }
    }
}

/// Result type alias for sqlrange operations
pub type RangeResult<T> = Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_levels_map_to_404() {
        assert_eq!(RangeError::LevelNotFound { id: 3 }.status_code(), 404);
        for err in [
            RangeError::Setup {
                reason: "x".to_string(),
            },
            RangeError::Storage {
                reason: "x".to_string(),
            },
            RangeError::Internal {
                reason: "x".to_string(),
            },
        ] {
            assert_eq!(err.status_code(), 500, "{err}");
        }
    }

    #[test]
    fn categories_name_the_failing_component() {
        assert_eq!(RangeError::LevelNotFound { id: 3 }.category(), "level");
        assert_eq!(
            RangeError::Setup {
                reason: "x".to_string()
            }
            .category(),
            "setup"
        );
    }
}
