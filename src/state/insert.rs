//! Insert-values merging.
//!
//! Consecutive `INSERT INTO <target> (<cols>) VALUES (<tuple>)` statements
//! with the textually identical prefix are coalesced into one multi-row
//! insert:
//!
//! ```text
//! INSERT INTO t (a, b) VALUES (:a, :b)      -- :a=1, :b=2
//! INSERT INTO t (a, b) VALUES (:a, :b)      -- :a=3, :b=4
//! ```
//!
//! becomes
//!
//! ```text
//! INSERT INTO t (a, b) VALUES (:p0, :p1), (:p2, :p3);
//! ```
//!
//! Only statements with exactly one value tuple and nothing after it (except
//! an optional `;`) can be merged. Anything else routed here is rejected with
//! [`Error::MalformedInsert`] before the batch is touched.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::sql;
use crate::statement::PendingStatement;

use super::batch::BatchState;

const INSERT_INTO: &str = "INSERT INTO";
const VALUES: &str = "VALUES";

/// Returns true if the statement has the insert-values shape.
///
/// This is a lexical test: the text starts with `INSERT INTO` and contains
/// `VALUES` somewhere. Leading whitespace or comments make it a generic
/// statement.
pub fn is_insert_values(sql: &str) -> bool {
    sql.starts_with(INSERT_INTO) && sql::contains(sql, VALUES)
}

/// An insert split into its shared prefix and its value tuple elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement<'a> {
    /// Everything up to and including `VALUES`
    pub prefix: &'a str,
    /// Trimmed elements of the value tuple
    pub values: Vec<&'a str>,
}

impl<'a> InsertStatement<'a> {
    pub fn parse(sql: &'a str) -> Result<Self> {
        let sql = sql.trim();
        let values_at = sql::find_keyword(sql, VALUES)
            .ok_or_else(|| Error::MalformedInsert(format!("no VALUES keyword: {}", sql)))?;
        let prefix_end = values_at + VALUES.len();

        let after = &sql[prefix_end..];
        let open = prefix_end + (after.len() - after.trim_start().len());
        let close = sql::matching_paren(sql, open).ok_or_else(|| {
            Error::MalformedInsert(format!("no parenthesized value tuple: {}", sql))
        })?;

        let rest = sql[close + 1..].trim();
        if !rest.is_empty() && rest != ";" {
            return Err(Error::MalformedInsert(format!(
                "unexpected text after value tuple: {}",
                rest
            )));
        }

        let values = sql::split_top_level(&sql[open + 1..close], b',');
        if values.iter().any(|v| v.is_empty()) {
            return Err(Error::MalformedInsert(format!(
                "empty element in value tuple: {}",
                sql
            )));
        }

        Ok(Self {
            prefix: &sql[..prefix_end],
            values,
        })
    }
}

/// Consecutive inserts sharing one prefix, waiting to be emitted.
#[derive(Debug, Default)]
pub struct InsertGroup {
    prefix: String,
    tuples: Vec<String>,
}

impl InsertGroup {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tuples(&self) -> &[String] {
        &self.tuples
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Emit the pending tuples as one multi-row insert and reset the group.
    ///
    /// An empty group emits nothing.
    pub fn flush_into(&mut self, buffer: &mut String) {
        if !self.tuples.is_empty() {
            tracing::trace!(rows = self.tuples.len(), "flushing insert group");
            buffer.push_str(&self.prefix);
            buffer.push(' ');
            buffer.push_str(&self.tuples.join(", "));
            buffer.push_str(";\n");
        }
        self.prefix.clear();
        self.tuples.clear();
    }
}

/// Merge an insert-shaped statement into the batch.
pub fn merge(state: &mut BatchState, stmt: &PendingStatement) -> Result<()> {
    let insert = InsertStatement::parse(stmt.sql())?;

    if state.insert_group.prefix != insert.prefix {
        state.insert_group.flush_into(&mut state.buffer);
        state.insert_group.prefix.push_str(insert.prefix);
    }

    let renamer = &mut state.renamer;
    let mut renamed: HashMap<&str, String> = HashMap::new();
    let mut tuple = Vec::with_capacity(insert.values.len());
    for value in &insert.values {
        // literals pass through; placeholders of this statement get a fresh name
        let rewritten = sql::rewrite_placeholders(value, |token| {
            if let Some(name) = renamed.get(token) {
                return Some(name.clone());
            }
            let param = stmt.params().iter().find(|p| p.name == token)?;
            let name = renamer.rename(param);
            renamed.insert(param.name.as_str(), name.clone());
            Some(name)
        });
        tuple.push(rewritten);
    }

    state
        .insert_group
        .tuples
        .push(format!("({})", tuple.join(", ")));
    Ok(())
}
