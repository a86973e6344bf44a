//! Synchronous batcher.

use crate::error::Result;
use crate::executor::Executor;
use crate::expectation::verify_outcome_batched;
use crate::opts::Opts;
use crate::state::{Accumulator, Action};
use crate::statement::PendingStatement;

/// Merges pending statements and executes them in as few round trips as possible.
///
/// A batcher is bound to one executor (one connection). It is not meant to be
/// shared; the owning session serializes all calls.
///
/// # Example
///
/// ```ignore
/// let mut batcher = Batcher::new(conn, &Opts::default())?;
/// batcher.add_to_batch(&PendingStatement::new(
///     "INSERT INTO users (name) VALUES (:name)",
///     vec![Param::new(":name", "alice")],
///     RowCount::BASIC,
/// ))?;
/// batcher.execute_batch()?;
/// ```
#[derive(Debug)]
pub struct Batcher<E: Executor> {
    executor: E,
    accumulator: Accumulator,
}

impl<E: Executor> Batcher<E> {
    /// Create a batcher flushing every `opts.batch_size` statements.
    pub fn new(executor: E, opts: &Opts) -> Result<Self> {
        Ok(Self {
            executor,
            accumulator: Accumulator::new(opts.batch_size)?,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.accumulator.batch_size()
    }

    /// Change the flush threshold at runtime.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<()> {
        self.accumulator.set_batch_size(batch_size)
    }

    /// Number of statements waiting in the current batch.
    pub fn statement_count(&self) -> usize {
        self.accumulator.statement_count()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Consume the batcher and return the executor.
    ///
    /// Pending statements are dropped without being executed.
    pub fn into_inner(self) -> E {
        self.executor
    }

    /// Add a statement to the batch.
    ///
    /// Mergeable statements are buffered and the batch is executed once it
    /// reaches the batch size. A statement that cannot be merged flushes the
    /// pending batch, then runs alone and is verified against its own
    /// expectation.
    pub fn add_to_batch(&mut self, stmt: &PendingStatement) -> Result<()> {
        match self.accumulator.add(stmt)? {
            Action::Buffered => Ok(()),
            Action::ExecuteBatch => self.execute_batch(),
            Action::ExecuteAlone => {
                self.execute_batch()?;
                self.execute_alone(stmt)
            }
        }
    }

    /// Execute the pending batch, if any, in a single round trip.
    ///
    /// The batch is discarded whether or not execution succeeds. Execution
    /// errors are returned unchanged. A row-count mismatch is reported as an
    /// expectation violation after the statement already ran.
    pub fn execute_batch(&mut self) -> Result<()> {
        let Some(batch) = self.accumulator.take_batch() else {
            return Ok(());
        };

        tracing::debug!(
            statements = batch.statement_count,
            expected_rows = batch.expected_rows,
            "executing batch"
        );
        self.executor.check_open_readers()?;
        self.executor.log_statement(&batch.command);
        self.executor.prepare(&batch.command)?;

        let rows_affected = match self.executor.execute_non_query(&batch.command) {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(error = %e, "error executing batch");
                return Err(e);
            }
        };

        verify_outcome_batched(batch.expected_rows, rows_affected)
    }

    /// Discard the pending batch without executing it.
    ///
    /// Returns the number of statements dropped.
    pub fn abort_batch(&mut self) -> usize {
        let dropped = self.accumulator.discard();
        if dropped > 0 {
            tracing::debug!(statements = dropped, "aborted batch");
        }
        dropped
    }

    fn execute_alone(&mut self, stmt: &PendingStatement) -> Result<()> {
        let command = stmt.command();
        self.executor.check_open_readers()?;
        self.executor.log_statement(command);
        self.executor.prepare(command)?;
        let rows_affected = self.executor.execute_non_query(command)?;
        stmt.expectation()
            .verify_outcome_non_batched(rows_affected, command.sql())
    }
}
