//! Batcher construction.

use crate::error::Result;
use crate::executor::Executor;
use crate::opts::Opts;

use super::Batcher;

/// Creates a batcher for each executor handed out by a session.
pub trait BatcherFactory {
    fn create_batcher<E: Executor>(&self, executor: E) -> Result<Batcher<E>>;
}

/// Factory for merging batchers sharing one set of options.
#[derive(Debug, Clone, Default)]
pub struct MergingBatcherFactory {
    opts: Opts,
}

impl MergingBatcherFactory {
    pub fn new(opts: Opts) -> Self {
        Self { opts }
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }
}

impl BatcherFactory for MergingBatcherFactory {
    fn create_batcher<E: Executor>(&self, executor: E) -> Result<Batcher<E>> {
        Batcher::new(executor, &self.opts)
    }
}
