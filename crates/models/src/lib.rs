//! Shared domain types for the sqlrange challenge server.
//!
//! Levels, attempt/verify request and response bodies, the scalar value
//! type produced by the query executor, and the error taxonomy used across
//! crates.

pub mod errors;
pub mod level;
pub mod value;

pub use errors::{RangeError, RangeResult};
pub use level::{
    AttemptOutcome, AttemptRequest, AttemptResponse, Level, LevelDetailResponse, VerifyRequest,
    VerifyResponse,
};
pub use value::SqlValue;
