//! CLI command implementations

pub(crate) mod analyze;
pub(crate) mod common;
pub(crate) mod consolidate;
pub(crate) mod reconcile;
pub(crate) mod rules;
