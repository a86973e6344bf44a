//! Statements handed to the batcher and to the executor.

use crate::expectation::Expectation;
use crate::value::Param;

/// SQL text with its ordered bound parameters.
///
/// This is the unit the [`Executor`](crate::executor::Executor) runs: either a
/// single pending statement or a merged batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    sql: String,
    params: Vec<Param>,
}

impl Command {
    pub fn new(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Look up a parameter by its placeholder name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }
}

/// A statement queued by the session, together with its row-count expectation.
///
/// The batcher only reads it; the text and parameters are never modified.
#[derive(Debug)]
pub struct PendingStatement {
    command: Command,
    expectation: Box<dyn Expectation>,
}

impl PendingStatement {
    pub fn new(
        sql: impl Into<String>,
        params: Vec<Param>,
        expectation: impl Expectation + 'static,
    ) -> Self {
        Self {
            command: Command::new(sql, params),
            expectation: Box::new(expectation),
        }
    }

    pub fn from_command(command: Command, expectation: Box<dyn Expectation>) -> Self {
        Self {
            command,
            expectation,
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn sql(&self) -> &str {
        self.command.sql()
    }

    pub fn params(&self) -> &[Param] {
        self.command.params()
    }

    pub fn expectation(&self) -> &dyn Expectation {
        self.expectation.as_ref()
    }

    /// Whether this statement may be folded into a merged batch.
    pub fn can_be_merged(&self) -> bool {
        self.expectation.can_be_batched()
    }
}
