//! Client-side SQL statement batcher.
//!
//! Queued statements are merged into one SQL text with one parameter list
//! and sent in a single round trip.
//!
//! # Features
//!
//! - **Multi-row inserts**: consecutive inserts into the same target and
//!   columns become one `INSERT ... VALUES (..), (..)`
//! - **Collision-free parameters**: every bound parameter is renamed to a
//!   unique placeholder inside the merged statement
//! - **Row-count accounting**: the server's affected-row count is checked
//!   against the sum of each statement's expectation
//! - **Sans-I/O core**: merging is separated from execution, which is
//!   delegated to an [`Executor`]
//!
//! # Example
//!
//! ```no_run
//! use zero_batcher::sync::Batcher;
//! use zero_batcher::{Command, Executor, Opts, Param, PendingStatement, RowCount};
//!
//! struct Client;
//!
//! impl Executor for Client {
//!     fn execute_non_query(&mut self, command: &Command) -> zero_batcher::Result<u64> {
//!         // send command.sql() with command.params() to the server
//!         Ok(2)
//!     }
//! }
//!
//! fn main() -> zero_batcher::Result<()> {
//!     let opts = Opts::try_from("postgres://localhost/mydb?batch_size=50")?;
//!     let mut batcher = Batcher::new(Client, &opts)?;
//!
//!     for name in ["alice", "bob"] {
//!         batcher.add_to_batch(&PendingStatement::new(
//!             "INSERT INTO users (name) VALUES (:name)",
//!             vec![Param::new(":name", name)],
//!             RowCount::BASIC,
//!         ))?;
//!     }
//!
//!     // INSERT INTO users (name) VALUES (:p0), (:p1);
//!     batcher.execute_batch()?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod executor;
pub mod expectation;
pub mod opts;
pub mod sql;
pub mod state;
pub mod statement;
pub mod value;

#[cfg(feature = "sync")]
pub mod sync;

pub use error::{Error, Result};
pub use executor::Executor;
pub use expectation::{Expectation, NoCheck, RowCount};
pub use opts::Opts;
pub use statement::{Command, PendingStatement};
pub use value::{Direction, Param, Value};
