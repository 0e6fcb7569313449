use super::*;
use tempfile::TempDir;

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_successful_commands() {
    let dir = TempDir::new().unwrap();
    let tool = CommandTool::new(dir.path(), argv(&["true"]), argv(&["true"]));
    tool.reset().await.unwrap();
    tool.generate().await.unwrap();
}

#[tokio::test]
async fn test_nonzero_exit_is_error() {
    let dir = TempDir::new().unwrap();
    let tool = CommandTool::new(dir.path(), argv(&["false"]), argv(&["true"]));
    let err = tool.reset().await.unwrap_err();
    assert!(matches!(err, ToolError::CommandFailed { .. }));
    assert!(err.to_string().starts_with("[T002]"));
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let dir = TempDir::new().unwrap();
    let tool = CommandTool::new(
        dir.path(),
        argv(&["migsquash-no-such-program-here"]),
        argv(&["true"]),
    );
    let err = tool.reset().await.unwrap_err();
    assert!(matches!(err, ToolError::SpawnFailed { .. }));
}

#[tokio::test]
async fn test_empty_command_is_error() {
    let dir = TempDir::new().unwrap();
    let tool = CommandTool::new(dir.path(), Vec::new(), argv(&["true"]));
    let err = tool.reset().await.unwrap_err();
    assert!(matches!(err, ToolError::EmptyCommand { ref step } if step == "reset"));
}

#[tokio::test]
async fn test_runs_in_working_dir() {
    let dir = TempDir::new().unwrap();
    let tool = CommandTool::new(
        dir.path(),
        argv(&["true"]),
        argv(&["sh", "-c", "mkdir -p migrations/1_consolidated"]),
    );
    tool.generate().await.unwrap();
    assert!(dir.path().join("migrations/1_consolidated").is_dir());
}

#[test]
fn test_tool_name_is_generate_program() {
    let tool = CommandTool::new(".", argv(&["npx", "prisma"]), argv(&["npx", "prisma"]));
    assert_eq!(tool.tool_name(), "npx");
    assert_eq!(tool.working_dir(), Path::new("."));
}
