//! Action types returned by the accumulator.

/// What the driver must do after a statement was handed to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The statement was merged into the pending batch; nothing to execute yet.
    Buffered,

    /// The statement was merged and the batch reached its flush threshold.
    ///
    /// The driver should take the batch with
    /// [`Accumulator::take_batch`](super::Accumulator::take_batch) and execute it.
    ExecuteBatch,

    /// The statement cannot be merged and was not buffered.
    ///
    /// The driver should flush any pending batch, then execute the statement
    /// alone and verify its own expectation.
    ExecuteAlone,
}
