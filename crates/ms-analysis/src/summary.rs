//! Final partition of the reconciled pipeline into reports

use ms_core::{Pipeline, Statement};
use serde::Serialize;

/// Run totals for the summary printout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Statements extracted from the history.
    pub total: usize,
    /// Statements filtered before reconciliation.
    pub filtered: usize,
    /// Filtered statements per reason, in first-seen order.
    pub filtered_by_reason: Vec<(String, usize)>,
    /// Statements found in the regenerated migration.
    pub reconciled: usize,
    /// Filtered statements not found in the regenerated migration.
    pub filtered_remaining: usize,
    /// `filtered_remaining` per reason, in first-seen order.
    pub remaining_by_reason: Vec<(String, usize)>,
    /// Kept statements not found in the regenerated migration.
    pub missing: usize,
}

impl Summary {
    /// Counts taken right after filtering, before reconciliation.
    pub fn from_filtered(pipeline: &Pipeline) -> Self {
        Self {
            total: pipeline.len(),
            filtered: pipeline.filtered_count(),
            filtered_by_reason: pipeline.filtered_by_reason(),
            ..Self::default()
        }
    }
}

/// Filtered and missing statements after reconciliation.
#[derive(Debug, Clone)]
pub struct ConsolidationReport {
    /// Filtered statements the regenerated migration does not contain.
    pub filtered: Vec<Statement>,
    /// Kept statements the regenerated migration does not contain.
    pub missing: Vec<Statement>,
    pub summary: Summary,
}

/// Split the reconciled pipeline into the filtered and missing lists.
///
/// `summary` carries the pre-reconciliation counts; the remaining counts
/// are filled in here.
pub fn finalize(pipeline: Pipeline, reconciled: usize, summary: Summary) -> ConsolidationReport {
    let remaining_by_reason = pipeline.filtered_by_reason();
    let (filtered, missing) = pipeline.partition();
    let summary = Summary {
        reconciled,
        filtered_remaining: filtered.len(),
        remaining_by_reason,
        missing: missing.len(),
        ..summary
    };
    ConsolidationReport {
        filtered,
        missing,
        summary,
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
