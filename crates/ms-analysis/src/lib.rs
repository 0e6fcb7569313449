//! ms-analysis - Consolidation stages for migsquash
//!
//! Each stage takes the complete [`Pipeline`](ms_core::Pipeline) from the
//! previous stage and returns it annotated:
//!
//! 1. [`apply_policy`] marks statements matched by the static policy.
//! 2. [`resolve_redundancy`] marks statements undone later in the history.
//! 3. [`reconcile`] removes statements present in the regenerated migration.
//! 4. [`finalize`] splits what is left into the filtered and missing reports.

pub mod policy_pass;
pub mod reconcile;
pub mod redundancy;
pub mod summary;

pub use policy_pass::apply_policy;
pub use reconcile::{reconcile, Reconciliation};
pub use redundancy::resolve_redundancy;
pub use summary::{finalize, ConsolidationReport, Summary};
