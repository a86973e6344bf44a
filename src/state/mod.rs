//! Sans-I/O batch compilation.
//!
//! The accumulator merges pending statements into one SQL text and one
//! parameter list without performing any I/O. It returns `Action` values that
//! tell the driver when a batch must be executed.

pub mod accumulator;
pub mod action;
pub mod batch;
pub mod generic;
pub mod insert;
pub mod rename;

pub use accumulator::Accumulator;
pub use action::Action;
pub use batch::{BatchState, MergedBatch};
pub use insert::InsertGroup;
pub use rename::ParamRenamer;
