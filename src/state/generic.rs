//! Merging of statements that are not insert-values shaped.

use std::collections::HashMap;

use crate::sql;
use crate::statement::PendingStatement;

use super::batch::BatchState;

/// Rename every parameter of `stmt` and append the rewritten statement,
/// terminated by `;\n`, to the batch.
///
/// Pending insert rows are emitted first so the merged text keeps add order.
/// A statement ending in a `--` comment gets its terminator on the next line.
pub fn merge(state: &mut BatchState, stmt: &PendingStatement) {
    state.insert_group.flush_into(&mut state.buffer);

    let mut names: HashMap<&str, String> = HashMap::with_capacity(stmt.params().len());
    for param in stmt.params() {
        let name = state.renamer.rename(param);
        // a repeated name binds the first value, as the text can only refer to one
        names.entry(param.name.as_str()).or_insert(name);
    }

    let rewritten = sql::rewrite_placeholders(stmt.sql(), |token| names.get(token).cloned());
    let rewritten = rewritten.trim_end();
    if sql::ends_in_line_comment(rewritten) {
        state.buffer.push_str(rewritten);
        state.buffer.push_str("\n;\n");
        return;
    }

    state.buffer.push_str(rewritten.trim_end_matches(';').trim_end());
    state.buffer.push_str(";\n");
}
