//! Static filtering policy loaded from the filters document.
//!
//! The document is JSON of the form:
//!
//! ```json
//! {
//!   "filters": [
//!     {
//!       "name": "prisma_migrations_table",
//!       "patterns": ["_PRISMA_MIGRATIONS"],
//!       "reason": "Prisma bookkeeping table",
//!       "enabled": true
//!     }
//!   ]
//! }
//! ```
//!
//! Rules are evaluated in document order and patterns in list order. The
//! first matching pattern of the first matching enabled rule decides.

use crate::error::{CoreError, CoreResult};
use crate::statement::FilterReason;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One rule of the static filtering policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Rule name, for diagnostics.
    pub name: String,

    /// Case-insensitive regular expressions, tried in order.
    pub patterns: Vec<String>,

    /// Human-readable reason recorded on matching statements.
    pub reason: String,

    /// Disabled rules are skipped entirely.
    pub enabled: bool,
}

/// On-disk shape of the policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicyDocument {
    filters: Vec<FilterRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: FilterRule,
    patterns: Vec<Regex>,
}

/// An ordered, pre-compiled set of filter rules.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    rules: Vec<CompiledRule>,
}

impl Policy {
    /// Compile a policy from rules.
    ///
    /// Every pattern is compiled up front, including those of disabled
    /// rules, so a broken document is rejected before any statement is
    /// processed.
    pub fn new(rules: Vec<FilterRule>) -> CoreResult<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let patterns = rule
                    .patterns
                    .iter()
                    .map(|pattern| {
                        RegexBuilder::new(pattern)
                            .case_insensitive(true)
                            .build()
                            .map_err(|e| CoreError::InvalidPattern {
                                rule: rule.name.clone(),
                                pattern: pattern.clone(),
                                message: e.to_string(),
                            })
                    })
                    .collect::<CoreResult<Vec<_>>>()?;
                Ok(CompiledRule { rule, patterns })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Load and compile the policy document at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::PolicyNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let policy = Self::from_json(&content).map_err(|e| match e {
            CoreError::PolicyParseError { message, .. } => CoreError::PolicyParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        log::debug!(
            "Loaded {} filter rules ({} enabled) from {}",
            policy.len(),
            policy.enabled_count(),
            path.display()
        );
        Ok(policy)
    }

    /// Parse and compile a policy document from a JSON string.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: PolicyDocument =
            serde_json::from_str(json).map_err(|e| CoreError::PolicyParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::new(document.filters)
    }

    /// Rules in evaluation order, enabled or not.
    pub fn rules(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|c| c.rule.enabled).count()
    }

    /// Find the first enabled rule with a pattern matching `sql`.
    ///
    /// Patterns are tested against the trimmed, uppercased statement.
    pub fn evaluate(&self, sql: &str) -> Option<&FilterRule> {
        let upper = sql.trim().to_uppercase();
        self.rules
            .iter()
            .filter(|compiled| compiled.rule.enabled)
            .find(|compiled| compiled.patterns.iter().any(|re| re.is_match(&upper)))
            .map(|compiled| &compiled.rule)
    }

    /// The filter reason for `sql`, if any rule matches.
    pub fn reason_for(&self, sql: &str) -> Option<FilterReason> {
        self.evaluate(sql).map(|rule| FilterReason::Policy {
            rule: rule.name.clone(),
            reason: rule.reason.clone(),
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;
