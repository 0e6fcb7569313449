use super::*;
use ms_core::{FilterReason, MigrationSource};

fn pipeline_with_one_filtered() -> Pipeline {
    let mut pipeline = Pipeline::extract(&[MigrationSource {
        name: "m".to_string(),
        sql: "GRANT ALL ON a TO u; SELECT 1; SELECT 2;".to_string(),
    }]);
    pipeline.statements_mut()[0].mark_filtered(FilterReason::Policy {
        rule: "grants".to_string(),
        reason: "grants are environment specific".to_string(),
    });
    pipeline
}

#[test]
fn test_summary_from_filtered() {
    let summary = Summary::from_filtered(&pipeline_with_one_filtered());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.filtered, 1);
    assert_eq!(
        summary.filtered_by_reason,
        vec![("grants are environment specific".to_string(), 1)]
    );
    assert_eq!(summary.missing, 0);
}

#[test]
fn test_finalize_partitions() {
    let pipeline = pipeline_with_one_filtered();
    let summary = Summary::from_filtered(&pipeline);
    let report = finalize(pipeline, 4, summary);

    assert_eq!(report.filtered.len(), 1);
    assert_eq!(report.filtered[0].text(), "GRANT ALL ON a TO u");
    assert_eq!(
        report.missing.iter().map(|s| s.text()).collect::<Vec<_>>(),
        vec!["SELECT 1", "SELECT 2"]
    );
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.reconciled, 4);
    assert_eq!(report.summary.filtered_remaining, 1);
    assert_eq!(report.summary.missing, 2);
}

#[test]
fn test_summary_serializes() {
    let summary = Summary::from_filtered(&pipeline_with_one_filtered());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["filtered_by_reason"][0][1], 1);
}

#[test]
fn test_remaining_histogram_counts_survivors_only() {
    let mut pipeline = Pipeline::extract(&[MigrationSource {
        name: "m".to_string(),
        sql: "GRANT ALL ON a TO u; CREATE TABLE tmp (id INT); SELECT 1;".to_string(),
    }]);
    pipeline.statements_mut()[0].mark_filtered(FilterReason::Policy {
        rule: "grants".to_string(),
        reason: "grants".to_string(),
    });
    pipeline.statements_mut()[1].mark_filtered(FilterReason::Policy {
        rule: "temp".to_string(),
        reason: "temporary tables".to_string(),
    });
    let summary = Summary::from_filtered(&pipeline);

    // The regenerated migration still creates the temp table.
    pipeline.retain(|stmt| stmt.text() != "CREATE TABLE tmp (id INT)");
    let report = finalize(pipeline, 1, summary);

    assert_eq!(
        report.summary.filtered_by_reason,
        vec![("grants".to_string(), 1), ("temporary tables".to_string(), 1)]
    );
    assert_eq!(report.summary.filtered_remaining, 1);
    assert_eq!(
        report.summary.remaining_by_reason,
        vec![("grants".to_string(), 1)]
    );
}
