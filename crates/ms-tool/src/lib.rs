//! ms-tool - Migration tool abstraction for migsquash
//!
//! This crate provides the `MigrationTool` trait for the external tool that
//! resets the database and regenerates the consolidated migration, and an
//! implementation that runs configured commands as child processes.

pub mod command;
pub mod error;
pub mod traits;

pub use command::CommandTool;
pub use error::ToolError;
pub use traits::MigrationTool;
