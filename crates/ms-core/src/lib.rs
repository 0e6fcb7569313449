//! ms-core - Core library for migsquash
//!
//! This crate provides the shared statement model and pipeline state, the
//! static filtering policy, configuration parsing, migration folder
//! discovery/backup, and report rendering used across all migsquash
//! components.

pub mod config;
pub mod error;
pub mod migrations;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod statement;

pub use config::{Config, ToolConfig};
pub use error::{CoreError, CoreResult};
pub use migrations::{MigrationFolder, MigrationSource, NewMigration};
pub use pipeline::Pipeline;
pub use policy::{FilterRule, Policy};
pub use statement::{FilterReason, Statement};
