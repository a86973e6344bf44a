//! State of the merged statement under construction.

use crate::statement::Command;

use super::insert::InsertGroup;
use super::rename::ParamRenamer;

/// The merged statement being built.
///
/// Created on the first statement added after a flush, discarded as a whole
/// when the batch is taken or aborted. Nothing survives across batches.
#[derive(Debug, Default)]
pub struct BatchState {
    /// Merged SQL text emitted so far
    pub(crate) buffer: String,
    pub(crate) renamer: ParamRenamer,
    /// Consecutive inserts that are still being coalesced
    pub(crate) insert_group: InsertGroup,
    /// Number of statements folded in
    pub(crate) statement_count: usize,
    /// Sum of the expected row counts of the folded statements
    pub(crate) expected_rows: u64,
}

impl BatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement_count(&self) -> usize {
        self.statement_count
    }

    pub fn expected_rows(&self) -> u64 {
        self.expected_rows
    }

    /// Merged SQL text emitted so far, excluding the pending insert group.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Flush the pending insert group and turn the state into one command.
    pub fn finish(mut self) -> MergedBatch {
        self.insert_group.flush_into(&mut self.buffer);
        MergedBatch {
            command: Command::new(self.buffer, self.renamer.into_params()),
            statement_count: self.statement_count,
            expected_rows: self.expected_rows,
        }
    }
}

/// A finished batch, ready for a single round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedBatch {
    pub command: Command,
    /// Number of pending statements merged into `command`
    pub statement_count: usize,
    /// Rows the server should report for `command`
    pub expected_rows: u64,
}
