use super::*;
use crate::statement::FilterReason;
use chrono::TimeZone;
use tempfile::TempDir;

fn filtered_stmt() -> Statement {
    let mut stmt = Statement::new("CREATE TABLE tmp (id INT)", "001_init", 0);
    stmt.mark_filtered(FilterReason::CreateDropped {
        object_kind: ms_sql::ObjectKind::Table,
        name: "tmp".to_string(),
        dropped_by: 2,
    });
    stmt
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
}

#[test]
fn test_filtered_json_shape() {
    let json = render_filtered_json(&[filtered_stmt()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entry = &value[0];
    assert_eq!(entry["query"], "CREATE TABLE tmp (id INT)");
    assert_eq!(entry["isFilteredQuery"], true);
    assert_eq!(
        entry["filterReason"],
        "CREATE TABLE \"tmp\" is made redundant by later DROP TABLE \"tmp\""
    );
    assert_eq!(entry["filterKind"], "create_dropped");
    assert_eq!(entry["migrationFile"], "001_init");
}

#[test]
fn test_filtered_json_empty() {
    assert_eq!(render_filtered_json(&[]).unwrap(), "[]");
}

#[test]
fn test_missing_sql_empty() {
    assert_eq!(
        render_missing_sql(&[], fixed_time()),
        "-- No missing queries found\n-- All queries were included in the new migration\n"
    );
}

#[test]
fn test_missing_sql_lists_queries() {
    let missing = vec![
        Statement::new("ALTER TABLE a ADD CONSTRAINT pk_a PRIMARY KEY (id)", "001", 1),
        Statement::new("INSERT INTO roles VALUES ('admin')", "002", 5),
    ];
    let expected = "\
-- Queries not included in the new consolidated migration
-- Generated on: 2025-03-04T05:06:07.000Z
-- Total missing queries: 2

-- Query 1 (from 001):
ALTER TABLE a ADD CONSTRAINT pk_a PRIMARY KEY (id);

-- Query 2 (from 002):
INSERT INTO roles VALUES ('admin');
";
    assert_eq!(render_missing_sql(&missing, fixed_time()), expected);
}

#[test]
fn test_write_reports() {
    let dir = TempDir::new().unwrap();
    let paths = write_reports(dir.path(), &[filtered_stmt()], &[], fixed_time()).unwrap();

    assert_eq!(paths.filtered, dir.path().join(FILTERED_REPORT_FILE));
    let missing = std::fs::read_to_string(&paths.missing).unwrap();
    assert!(missing.starts_with("-- No missing queries found"));
    let filtered = std::fs::read_to_string(&paths.filtered).unwrap();
    assert!(filtered.contains("create_dropped"));

    // No temp files left behind.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
