//! Error types for ms-tool

use thiserror::Error;

/// Migration tool errors
#[derive(Error, Debug)]
pub enum ToolError {
    /// Command could not be started (T001)
    #[error("[T001] Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// Command exited unsuccessfully (T002)
    #[error("[T002] '{command}' exited with {status}")]
    CommandFailed { command: String, status: String },

    /// Empty command line (T003)
    #[error("[T003] No command configured for {step}")]
    EmptyCommand { step: String },
}

/// Result type alias for ToolError
pub type ToolResult<T> = Result<T, ToolError>;
