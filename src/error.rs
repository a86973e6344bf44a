//! Error types for zero-batcher.

use thiserror::Error;

/// Result type for zero-batcher operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for zero-batcher.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error reported by the executor
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The executor failed to run a statement (connectivity, syntax, constraint violation)
    #[error("Execution error: {0}")]
    Execute(Box<dyn std::error::Error + Send + Sync>),

    /// The merged batch affected a different number of rows than the sum of its expectations
    #[error("Batch update returned unexpected row count; actual row count: {actual}; expected: {expected}")]
    BatchRowCount {
        /// Sum of the expected row counts of every merged statement
        expected: u64,
        /// Row count reported by the server
        actual: u64,
    },

    /// A statement executed alone affected an unexpected number of rows
    #[error("Unexpected row count: {actual}; expected: {expected}; statement: {sql}")]
    StatementRowCount {
        /// Expected row count
        expected: u64,
        /// Row count reported by the server
        actual: u64,
        /// The statement text
        sql: String,
    },

    /// An insert-shaped statement that the insert merger cannot rewrite
    #[error("Malformed insert: {0}")]
    MalformedInsert(String),

    /// A parameter name that is not a placeholder token
    #[error("Invalid parameter name: {0:?}")]
    InvalidParameterName(String),

    /// Invalid usage (e.g., zero batch size)
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
}

impl Error {
    /// Wrap an executor-specific error as an execution error.
    pub fn execute<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Execute(err.into())
    }

    /// Returns true if the error is an affected-row-count mismatch.
    ///
    /// These are raised after the statement was sent, so server-side effects
    /// have already happened. They usually signal a concurrency conflict.
    pub fn is_expectation_violation(&self) -> bool {
        matches!(
            self,
            Error::BatchRowCount { .. } | Error::StatementRowCount { .. }
        )
    }

    /// Returns true if the error came from the executor.
    pub fn is_execution_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Execute(_))
    }
}
