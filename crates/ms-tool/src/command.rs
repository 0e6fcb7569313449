//! Migration tool backed by external commands

use crate::error::{ToolError, ToolResult};
use crate::traits::MigrationTool;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Runs configured argv commands in the project root, with inherited stdio
/// so the tool's own prompts and progress stay visible.
#[derive(Debug, Clone)]
pub struct CommandTool {
    working_dir: PathBuf,
    reset: Vec<String>,
    generate: Vec<String>,
}

impl CommandTool {
    pub fn new(working_dir: impl Into<PathBuf>, reset: Vec<String>, generate: Vec<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            reset,
            generate,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    async fn run(&self, step: &str, argv: &[String]) -> ToolResult<()> {
        let (program, args) = argv.split_first().ok_or_else(|| ToolError::EmptyCommand {
            step: step.to_string(),
        })?;
        let command_line = argv.join(" ");
        log::info!(
            "Running {}: {} (in {})",
            step,
            command_line,
            self.working_dir.display()
        );

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .status()
            .await
            .map_err(|e| ToolError::SpawnFailed {
                command: command_line.clone(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::CommandFailed {
                command: command_line,
                status: status.to_string(),
            })
        }
    }
}

#[async_trait]
impl MigrationTool for CommandTool {
    async fn reset(&self) -> ToolResult<()> {
        self.run("reset", &self.reset).await
    }

    async fn generate(&self) -> ToolResult<()> {
        self.run("generate", &self.generate).await
    }

    fn tool_name(&self) -> &str {
        self.generate.first().map(String::as_str).unwrap_or("command")
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
