//! Synchronous batch execution.

mod batcher;
mod factory;

pub use batcher::Batcher;
pub use factory::{BatcherFactory, MergingBatcherFactory};
