//! Challenge execution engine.
//!
//! The lifecycle per attempt is linear: interleave the level's template
//! with the learner's fragments, provision a fresh in-memory instance from
//! the level's setup script, execute the merged statement (and the level's
//! checker, if any), and report the result. Nothing survives the attempt:
//! the instance is dropped with the request, which is the only thing that
//! makes running arbitrary learner SQL acceptable.

pub mod executor;
pub mod flag;
pub mod interleave;
pub mod sandbox;

pub use executor::run_attempt;
pub use flag::verify_flag;
pub use interleave::interleave;
pub use sandbox::EphemeralDb;
