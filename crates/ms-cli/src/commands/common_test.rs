use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_one_line_collapses_and_truncates() {
    assert_eq!(one_line("CREATE TABLE a (\n  id INT\n)", 80), "CREATE TABLE a ( id INT )");
    assert_eq!(one_line("SELECT 123456789", 10), "SELECT ...");
}

#[test]
fn test_calculate_column_widths() {
    let rows = vec![vec!["001_init".to_string(), "x".to_string()]];
    assert_eq!(calculate_column_widths(&["SOURCE", "KIND"], &rows), vec![8, 4]);
}

#[test]
fn test_load_config_from_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yml");
    fs::write(&path, "migration_name: squashed\n").unwrap();

    let global = GlobalArgs {
        config: Some(path),
        ..GlobalArgs::default()
    };
    let config = load_config(&global).unwrap();
    assert_eq!(config.migration_name, "squashed");
}

#[test]
fn test_load_config_missing_flag_path_fails() {
    let global = GlobalArgs {
        config: Some(PathBuf::from("/nonexistent/migsquash.yml")),
        ..GlobalArgs::default()
    };
    let err = load_config(&global).unwrap_err();
    assert!(format!("{:#}", err).contains("[E001]"));
}

#[test]
fn test_policy_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{"filters": [{"name": "grants", "patterns": ["^GRANT"], "reason": "grants", "enabled": true}]}"#,
    )
    .unwrap();

    let global = GlobalArgs {
        policy: Some(path),
        ..GlobalArgs::default()
    };
    let config = Config {
        policy_path: "/nonexistent/filters.json".to_string(),
        ..Config::default()
    };
    let policy = load_policy(&global, &config).unwrap();
    assert_eq!(policy.len(), 1);
}

#[test]
fn test_missing_policy_is_an_error() {
    let config = Config {
        policy_path: "/nonexistent/filters.json".to_string(),
        ..Config::default()
    };
    let err = load_policy(&GlobalArgs::default(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("[E003]"));
}

#[test]
fn test_filter_history_runs_both_passes() {
    let policy = Policy::from_json(
        r#"{"filters": [{"name": "grants", "patterns": ["^GRANT"], "reason": "grants", "enabled": true}]}"#,
    )
    .unwrap();
    let sources = vec![
        MigrationSource {
            name: "001".to_string(),
            sql: "CREATE TABLE a (id INT); GRANT ALL ON a TO u;".to_string(),
        },
        MigrationSource {
            name: "002".to_string(),
            sql: "DROP TABLE a;".to_string(),
        },
    ];
    let (pipeline, summary) = filter_history(&sources, &policy);
    assert_eq!(pipeline.len(), 3);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.filtered, 2);
}
