//! Reconciliation against the regenerated migration

use ms_core::Pipeline;
use ms_sql::{extract_statements, normalize_statement};
use std::collections::HashSet;

/// Result of reconciling the history with a regenerated migration.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Statements with no equivalent in the regenerated migration.
    pub pipeline: Pipeline,
    /// How many statements were found in the regenerated migration.
    pub removed: usize,
    /// How many statements the regenerated migration contains.
    pub new_statements: usize,
}

/// Remove every statement that has an equivalent in `new_sql`.
///
/// The regenerated migration is split with the same rules as the history.
/// Equivalence is normalized-text equality and a pure membership test: any
/// number of historical statements may match one new statement.
pub fn reconcile(mut pipeline: Pipeline, new_sql: &str) -> Reconciliation {
    let new_statements: HashSet<String> = extract_statements(new_sql)
        .iter()
        .map(|s| normalize_statement(s))
        .collect();

    let before = pipeline.len();
    pipeline.retain(|stmt| !new_statements.contains(&normalize_statement(stmt.text())));
    let removed = before - pipeline.len();

    log::info!(
        "Removed {} statements present in the new migration, {} remaining",
        removed,
        pipeline.len()
    );

    Reconciliation {
        pipeline,
        removed,
        new_statements: new_statements.len(),
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
