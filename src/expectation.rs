//! Row-count expectations.
//!
//! Every merged statement's expected row count is summed before the batch is
//! sent. The server reports a single count for the whole merged statement, so
//! only the aggregate can be checked; a mismatch inside one statement that is
//! compensated by another is invisible.

use std::fmt;

use crate::error::{Error, Result};

/// Policy describing how many rows a statement should affect.
pub trait Expectation: fmt::Debug {
    /// Whether the statement may be merged into a batch.
    fn can_be_batched(&self) -> bool;

    /// Rows this statement contributes to a batch's expected total.
    fn expected_row_count(&self) -> u64;

    /// Verify the outcome of a statement executed alone.
    fn verify_outcome_non_batched(&self, rows_affected: u64, sql: &str) -> Result<()>;
}

impl<T: Expectation + ?Sized> Expectation for Box<T> {
    fn can_be_batched(&self) -> bool {
        (**self).can_be_batched()
    }

    fn expected_row_count(&self) -> u64 {
        (**self).expected_row_count()
    }

    fn verify_outcome_non_batched(&self, rows_affected: u64, sql: &str) -> Result<()> {
        (**self).verify_outcome_non_batched(rows_affected, sql)
    }
}

/// Verify the aggregate outcome of a merged batch.
pub fn verify_outcome_batched(expected: u64, actual: u64) -> Result<()> {
    if expected != actual {
        return Err(Error::BatchRowCount { expected, actual });
    }
    Ok(())
}

/// Expect exactly `n` affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(pub u64);

impl RowCount {
    /// One row, the usual expectation for a single-entity insert/update/delete.
    pub const BASIC: RowCount = RowCount(1);
}

impl Expectation for RowCount {
    fn can_be_batched(&self) -> bool {
        true
    }

    fn expected_row_count(&self) -> u64 {
        self.0
    }

    fn verify_outcome_non_batched(&self, rows_affected: u64, sql: &str) -> Result<()> {
        if rows_affected != self.0 {
            return Err(Error::StatementRowCount {
                expected: self.0,
                actual: rows_affected,
                sql: sql.to_owned(),
            });
        }
        Ok(())
    }
}

/// No row-count check.
///
/// The affected row count is unknown, so the statement cannot take part in an
/// aggregate check and always runs alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCheck;

impl Expectation for NoCheck {
    fn can_be_batched(&self) -> bool {
        false
    }

    fn expected_row_count(&self) -> u64 {
        0
    }

    fn verify_outcome_non_batched(&self, _rows_affected: u64, _sql: &str) -> Result<()> {
        Ok(())
    }
}
