//! Extracted statements and the reasons they get filtered

use ms_sql::ObjectKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a statement was filtered, tagged by the engine that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterReason {
    /// A static policy rule matched.
    Policy { rule: String, reason: String },

    /// A CREATE whose object is dropped later in the history.
    CreateDropped {
        object_kind: ObjectKind,
        name: String,
        /// Position of the cited DROP statement.
        dropped_by: usize,
    },

    /// An added constraint that is dropped later in the history.
    ConstraintDropped {
        table: String,
        constraint: String,
        /// Position of the cited DROP CONSTRAINT statement.
        dropped_by: usize,
    },
}

impl FilterReason {
    /// Short label of the deciding engine, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterReason::Policy { .. } => "policy",
            FilterReason::CreateDropped { .. } => "create_dropped",
            FilterReason::ConstraintDropped { .. } => "constraint_dropped",
        }
    }

    /// Whether this reason came from the redundancy resolver.
    pub fn is_redundancy(&self) -> bool {
        !matches!(self, FilterReason::Policy { .. })
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterReason::Policy { reason, .. } => f.write_str(reason),
            FilterReason::CreateDropped {
                object_kind, name, ..
            } => write!(
                f,
                "CREATE {object_kind} \"{name}\" is made redundant by later DROP {object_kind} \"{name}\""
            ),
            FilterReason::ConstraintDropped {
                table, constraint, ..
            } => write!(
                f,
                "ADD CONSTRAINT \"{constraint}\" on table \"{table}\" is made redundant by later DROP CONSTRAINT \"{constraint}\""
            ),
        }
    }
}

/// One SQL statement extracted from one migration file.
///
/// The text and origin never change after extraction. The filter decision
/// moves from unset to set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    text: String,
    source: String,
    position: usize,
    filter: Option<FilterReason>,
}

impl Statement {
    /// Create an unfiltered statement.
    pub fn new(text: impl Into<String>, source: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            position,
            filter: None,
        }
    }

    /// Statement text without comments or terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Migration folder the statement came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Zero-based index in the full extraction-ordered history.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    pub fn filter_reason(&self) -> Option<&FilterReason> {
        self.filter.as_ref()
    }

    /// Mark the statement filtered.
    ///
    /// Returns `false` and keeps the existing reason if the statement was
    /// already filtered.
    pub fn mark_filtered(&mut self, reason: FilterReason) -> bool {
        if self.filter.is_some() {
            return false;
        }
        self.filter = Some(reason);
        true
    }
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
