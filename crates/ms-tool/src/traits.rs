//! Migration tool trait definition

use crate::error::ToolResult;
use async_trait::async_trait;

/// The external migration tool.
///
/// Both steps are opaque to migsquash: they run to completion or fail the
/// whole run. There are no retries and no timeouts.
#[async_trait]
pub trait MigrationTool: Send + Sync {
    /// Reset the database, dropping everything the old migrations created
    async fn reset(&self) -> ToolResult<()>;

    /// Generate one consolidated migration from the current schema
    async fn generate(&self) -> ToolResult<()>;

    /// Tool identifier for logging
    fn tool_name(&self) -> &str;
}
