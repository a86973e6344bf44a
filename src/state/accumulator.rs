//! Batch accumulator.

use crate::error::{Error, Result};
use crate::sql;
use crate::statement::PendingStatement;

use super::action::Action;
use super::batch::{BatchState, MergedBatch};
use super::{generic, insert};

/// Merges pending statements into a batch and decides when it must be flushed.
///
/// The accumulator performs no I/O. [`add`](Self::add) returns an [`Action`]
/// and the driver executes whatever [`take_batch`](Self::take_batch) hands out.
#[derive(Debug)]
pub struct Accumulator {
    batch_size: usize,
    state: Option<BatchState>,
}

impl Accumulator {
    /// Create an accumulator that flushes every `batch_size` statements.
    pub fn new(batch_size: usize) -> Result<Self> {
        check_batch_size(batch_size)?;
        Ok(Self {
            batch_size,
            state: None,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Change the flush threshold.
    ///
    /// Lowering it below the current statement count makes the next merged
    /// statement trigger a flush.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<()> {
        check_batch_size(batch_size)?;
        self.batch_size = batch_size;
        Ok(())
    }

    /// Number of statements merged into the pending batch.
    pub fn statement_count(&self) -> usize {
        self.state.as_ref().map_or(0, BatchState::statement_count)
    }

    /// Sum of the expected row counts of the pending batch.
    pub fn expected_rows(&self) -> u64 {
        self.state.as_ref().map_or(0, BatchState::expected_rows)
    }

    pub fn has_pending(&self) -> bool {
        self.statement_count() > 0
    }

    /// Hand a statement to the accumulator.
    ///
    /// Mergeable statements are folded into the pending batch. Statements that
    /// cannot be merged leave the batch untouched and yield
    /// [`Action::ExecuteAlone`].
    ///
    /// On error the pending batch is left as it was before the call.
    pub fn add(&mut self, stmt: &PendingStatement) -> Result<Action> {
        if !stmt.can_be_merged() {
            return Ok(Action::ExecuteAlone);
        }

        if let Some(param) = stmt.params().iter().find(|p| !sql::is_placeholder(&p.name)) {
            return Err(Error::InvalidParameterName(param.name.clone()));
        }

        let state = self.state.get_or_insert_with(BatchState::new);
        if insert::is_insert_values(stmt.sql()) {
            insert::merge(state, stmt)?;
        } else {
            generic::merge(state, stmt);
        }
        state.expected_rows = state
            .expected_rows
            .saturating_add(stmt.expectation().expected_row_count());
        state.statement_count += 1;

        tracing::debug!(
            statements = state.statement_count,
            expected_rows = state.expected_rows,
            "added statement to batch"
        );

        if state.statement_count >= self.batch_size {
            Ok(Action::ExecuteBatch)
        } else {
            Ok(Action::Buffered)
        }
    }

    /// Finish the pending batch and reset all per-batch state.
    ///
    /// Returns `None` if nothing is pending. Whatever happens to the returned
    /// batch, the next [`add`](Self::add) starts from an empty buffer with the
    /// parameter counter at zero.
    pub fn take_batch(&mut self) -> Option<MergedBatch> {
        let state = self.state.take()?;
        if state.statement_count == 0 {
            return None;
        }
        Some(state.finish())
    }

    /// Drop the pending batch without producing it.
    ///
    /// Returns the number of statements discarded.
    pub fn discard(&mut self) -> usize {
        self.state.take().map_or(0, |s| s.statement_count)
    }
}

fn check_batch_size(batch_size: usize) -> Result<()> {
    if batch_size == 0 {
        return Err(Error::InvalidUsage("batch size must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::{NoCheck, RowCount};
    use crate::value::Param;

    fn update(id: i32) -> PendingStatement {
        PendingStatement::new(
            "UPDATE t SET a = 1 WHERE id = :id",
            vec![Param::new(":id", id)],
            RowCount::BASIC,
        )
    }

    #[test]
    fn test_zero_batch_size() {
        assert!(matches!(Accumulator::new(0), Err(Error::InvalidUsage(_))));
        let mut acc = Accumulator::new(2).unwrap();
        assert!(acc.set_batch_size(0).is_err());
        assert_eq!(acc.batch_size(), 2);
    }

    #[test]
    fn test_threshold() {
        let mut acc = Accumulator::new(3).unwrap();
        assert_eq!(acc.add(&update(1)).unwrap(), Action::Buffered);
        assert_eq!(acc.add(&update(2)).unwrap(), Action::Buffered);
        assert_eq!(acc.add(&update(3)).unwrap(), Action::ExecuteBatch);
        assert_eq!(acc.statement_count(), 3);
        assert_eq!(acc.expected_rows(), 3);

        let batch = acc.take_batch().unwrap();
        assert_eq!(batch.statement_count, 3);
        assert_eq!(batch.expected_rows, 3);
        assert_eq!(batch.command.params().len(), 3);
        assert_eq!(acc.statement_count(), 0);
        assert!(acc.take_batch().is_none());
    }

    #[test]
    fn test_lowered_threshold() {
        let mut acc = Accumulator::new(10).unwrap();
        acc.add(&update(1)).unwrap();
        acc.add(&update(2)).unwrap();
        acc.set_batch_size(2).unwrap();
        assert_eq!(acc.add(&update(3)).unwrap(), Action::ExecuteBatch);
    }

    #[test]
    fn test_not_mergeable() {
        let mut acc = Accumulator::new(10).unwrap();
        acc.add(&update(1)).unwrap();
        let stmt = PendingStatement::new("VACUUM", Vec::new(), NoCheck);
        assert_eq!(acc.add(&stmt).unwrap(), Action::ExecuteAlone);
        assert_eq!(acc.statement_count(), 1);
        assert_eq!(acc.expected_rows(), 1);
    }

    #[test]
    fn test_invalid_parameter_name() {
        let mut acc = Accumulator::new(10).unwrap();
        let stmt = PendingStatement::new(
            "UPDATE t SET a = ?",
            vec![Param::new("?", 1_i32)],
            RowCount::BASIC,
        );
        assert!(matches!(
            acc.add(&stmt),
            Err(Error::InvalidParameterName(name)) if name == "?"
        ));
        assert!(!acc.has_pending());
    }

    #[test]
    fn test_failed_merge_is_not_counted() {
        let mut acc = Accumulator::new(10).unwrap();
        let stmt = PendingStatement::new("INSERT INTO t DEFAULT VALUES", Vec::new(), RowCount::BASIC);
        assert!(acc.add(&stmt).is_err());
        assert_eq!(acc.statement_count(), 0);
        assert!(acc.take_batch().is_none());
    }

    #[test]
    fn test_empty_tuple_element_is_not_counted() {
        let mut acc = Accumulator::new(10).unwrap();
        acc.add(&update(1)).unwrap();
        let stmt = PendingStatement::new(
            "INSERT INTO t VALUES (:a, , :b)",
            vec![Param::new(":a", 1_i32), Param::new(":b", 2_i32)],
            RowCount::BASIC,
        );
        assert!(matches!(acc.add(&stmt), Err(Error::MalformedInsert(_))));
        assert_eq!(acc.statement_count(), 1);

        let batch = acc.take_batch().unwrap();
        assert_eq!(batch.command.sql(), "UPDATE t SET a = 1 WHERE id = :p0;\n");
        assert_eq!(batch.command.params().len(), 1);
    }

    #[test]
    fn test_expected_rows_saturate() {
        let mut acc = Accumulator::new(10).unwrap();
        let huge = PendingStatement::new(
            "DELETE FROM t WHERE id = :id",
            vec![Param::new(":id", 1_i32)],
            RowCount(u64::MAX),
        );
        acc.add(&huge).unwrap();
        acc.add(&update(2)).unwrap();
        assert_eq!(acc.expected_rows(), u64::MAX);
        assert_eq!(acc.statement_count(), 2);
    }

    #[test]
    fn test_fresh_state_after_take() {
        let mut acc = Accumulator::new(10).unwrap();
        acc.add(&update(1)).unwrap();
        acc.add(&update(2)).unwrap();
        acc.take_batch().unwrap();

        acc.add(&update(3)).unwrap();
        let batch = acc.take_batch().unwrap();
        assert_eq!(batch.command.sql(), "UPDATE t SET a = 1 WHERE id = :p0;\n");
        assert_eq!(batch.expected_rows, 1);
    }

    #[test]
    fn test_discard() {
        let mut acc = Accumulator::new(10).unwrap();
        acc.add(&update(1)).unwrap();
        acc.add(&update(2)).unwrap();
        assert_eq!(acc.discard(), 2);
        assert!(!acc.has_pending());
        assert!(acc.take_batch().is_none());
    }
}
