//! Statement execution primitive.

use crate::error::Result;
use crate::statement::Command;

/// The collaborator that actually talks to the database.
///
/// The batcher depends only on this trait. Call order for every execution:
/// `check_open_readers` → `log_statement` → `prepare` → `execute_non_query`.
///
/// # Example
///
/// ```ignore
/// struct Client { /* connection */ }
///
/// impl Executor for Client {
///     fn execute_non_query(&mut self, command: &Command) -> Result<u64> {
///         self.conn.exec(command.sql(), command.params())
///     }
/// }
/// ```
pub trait Executor {
    /// Record a statement for diagnostics.
    fn log_statement(&mut self, command: &Command) {
        tracing::debug!(
            sql = command.sql(),
            params = command.params().len(),
            "executing statement"
        );
    }

    /// Fail if a result reader is still open on the connection.
    fn check_open_readers(&mut self) -> Result<()> {
        Ok(())
    }

    /// Prepare the command before execution.
    fn prepare(&mut self, command: &Command) -> Result<()> {
        let _ = command;
        Ok(())
    }

    /// Execute the command in a single round trip and return the affected row count.
    fn execute_non_query(&mut self, command: &Command) -> Result<u64>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn log_statement(&mut self, command: &Command) {
        (**self).log_statement(command)
    }

    fn check_open_readers(&mut self) -> Result<()> {
        (**self).check_open_readers()
    }

    fn prepare(&mut self, command: &Command) -> Result<()> {
        (**self).prepare(command)
    }

    fn execute_non_query(&mut self, command: &Command) -> Result<u64> {
        (**self).execute_non_query(command)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn log_statement(&mut self, command: &Command) {
        (**self).log_statement(command)
    }

    fn check_open_readers(&mut self) -> Result<()> {
        (**self).check_open_readers()
    }

    fn prepare(&mut self, command: &Command) -> Result<()> {
        (**self).prepare(command)
    }

    fn execute_non_query(&mut self, command: &Command) -> Result<u64> {
        (**self).execute_non_query(command)
    }
}
