use super::*;
use crate::statement::FilterReason;

fn source(name: &str, sql: &str) -> MigrationSource {
    MigrationSource {
        name: name.to_string(),
        sql: sql.to_string(),
    }
}

fn policy(reason: &str) -> FilterReason {
    FilterReason::Policy {
        rule: "r".to_string(),
        reason: reason.to_string(),
    }
}

#[test]
fn test_extract_concatenates_sources_in_order() {
    let sources = vec![
        source("001_init", "CREATE TABLE a (id INT);\nCREATE TABLE b (id INT);"),
        source("002_empty", ""),
        source("003_drop", "-- cleanup\nDROP TABLE a;"),
    ];
    let pipeline = Pipeline::extract(&sources);

    let texts: Vec<&str> = pipeline.statements().iter().map(|s| s.text()).collect();
    assert_eq!(
        texts,
        vec!["CREATE TABLE a (id INT)", "CREATE TABLE b (id INT)", "DROP TABLE a"]
    );
    let positions: Vec<usize> = pipeline.statements().iter().map(|s| s.position()).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(pipeline.statements()[2].source(), "003_drop");
}

#[test]
fn test_counts_and_partition() {
    let mut pipeline = Pipeline::extract(&[source("m", "SELECT 1; SELECT 2; SELECT 3;")]);
    pipeline.statements_mut()[1].mark_filtered(policy("noise"));

    assert_eq!(pipeline.len(), 3);
    assert_eq!(pipeline.filtered_count(), 1);
    assert_eq!(pipeline.kept_count(), 2);

    let (filtered, kept) = pipeline.partition();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].text(), "SELECT 2");
    assert_eq!(
        kept.iter().map(|s| s.text()).collect::<Vec<_>>(),
        vec!["SELECT 1", "SELECT 3"]
    );
}

#[test]
fn test_filtered_by_reason_groups_in_first_seen_order() {
    let mut pipeline =
        Pipeline::extract(&[source("m", "SELECT 1; SELECT 2; SELECT 3; SELECT 4;")]);
    let stmts = pipeline.statements_mut();
    stmts[0].mark_filtered(policy("b"));
    stmts[1].mark_filtered(policy("a"));
    stmts[3].mark_filtered(policy("b"));

    assert_eq!(
        pipeline.filtered_by_reason(),
        vec![("b".to_string(), 2), ("a".to_string(), 1)]
    );
}

#[test]
fn test_retain_removes_statements() {
    let mut pipeline = Pipeline::extract(&[source("m", "SELECT 1; SELECT 2;")]);
    pipeline.retain(|s| s.text() != "SELECT 1");
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.statements()[0].position(), 1);
}

#[test]
fn test_filtered_iff_reason_holds() {
    let mut pipeline = Pipeline::extract(&[source("m", "SELECT 1; SELECT 2;")]);
    pipeline.statements_mut()[0].mark_filtered(policy("x"));
    for stmt in pipeline.statements() {
        assert_eq!(stmt.is_filtered(), stmt.filter_reason().is_some());
    }
}
