//! Error types for room-anneal.
//!
//! Every fallible operation returns [`SolverResult`]. Data problems abort
//! before the search begins; invariant violations indicate a core bug and
//! are never user-recoverable.

use thiserror::Error;

/// Result type alias for room-anneal operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Unified error type for all room-anneal operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The compatibility table is malformed or incomplete.
    #[error("compatibility data error: {0}")]
    Data(String),

    /// A student id fell outside the population `1..=max`.
    #[error("student id {id} out of range 1..={max}")]
    OutOfRange {
        /// The offending id.
        id: usize,
        /// The population size.
        max: usize,
    },

    /// The room partition drifted from its construction-time shape.
    ///
    /// This is a bug in the search core, not a user error.
    #[error("assignment invariant violated: {0}")]
    InvariantViolation(String),

    /// The annealing configuration was rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An input or output resource could not be used.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
