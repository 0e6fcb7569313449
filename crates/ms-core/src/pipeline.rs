//! Pipeline state threaded through the consolidation stages
//!
//! A [`Pipeline`] owns the full, ordered statement history. Each stage takes
//! the pipeline by value and hands it back annotated. Stages may mark
//! statements filtered; only reconciliation removes statements.

use crate::migrations::MigrationSource;
use crate::statement::Statement;
use ms_sql::extract_statements;
use serde::{Deserialize, Serialize};

/// Ordered statement history with per-statement filter decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    statements: Vec<Statement>,
}

impl Pipeline {
    /// Extract every statement from `sources`, in source order then in-file
    /// order. Positions are assigned across the whole history.
    pub fn extract<'a>(sources: impl IntoIterator<Item = &'a MigrationSource>) -> Self {
        let mut statements = Vec::new();
        for source in sources {
            let extracted = extract_statements(&source.sql);
            log::debug!(
                "Extracted {} statements from {}",
                extracted.len(),
                source.name
            );
            for text in extracted {
                let position = statements.len();
                statements.push(Statement::new(text, source.name.as_str(), position));
            }
        }
        Self { statements }
    }

    /// Wrap an already-built statement list.
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Mutable access for stages that record filter decisions.
    pub fn statements_mut(&mut self) -> &mut [Statement] {
        &mut self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn filtered_count(&self) -> usize {
        self.statements.iter().filter(|s| s.is_filtered()).count()
    }

    pub fn kept_count(&self) -> usize {
        self.len() - self.filtered_count()
    }

    /// Count filtered statements per rendered reason, in first-seen order.
    pub fn filtered_by_reason(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for reason in self.statements.iter().filter_map(|s| s.filter_reason()) {
            let label = reason.to_string();
            match counts.iter_mut().find(|(existing, _)| *existing == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        }
        counts
    }

    /// Split into `(filtered, kept)`, each preserving history order.
    pub fn partition(self) -> (Vec<Statement>, Vec<Statement>) {
        self.statements.into_iter().partition(|s| s.is_filtered())
    }

    /// Keep only statements for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Statement) -> bool) {
        self.statements.retain(keep);
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
