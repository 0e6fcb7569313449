use super::*;

fn policy_reason(reason: &str) -> FilterReason {
    FilterReason::Policy {
        rule: "rule".to_string(),
        reason: reason.to_string(),
    }
}

#[test]
fn test_new_statement_is_unfiltered() {
    let stmt = Statement::new("CREATE TABLE a (id INT)", "20240101_init", 0);
    assert!(!stmt.is_filtered());
    assert!(stmt.filter_reason().is_none());
    assert_eq!(stmt.source(), "20240101_init");
    assert_eq!(stmt.position(), 0);
}

#[test]
fn test_mark_filtered_sets_reason() {
    let mut stmt = Statement::new("SELECT 1", "m1", 3);
    assert!(stmt.mark_filtered(policy_reason("noise")));
    assert!(stmt.is_filtered());
    assert_eq!(stmt.filter_reason().map(ToString::to_string).as_deref(), Some("noise"));
}

#[test]
fn test_mark_filtered_never_overwrites() {
    let mut stmt = Statement::new("SELECT 1", "m1", 0);
    assert!(stmt.mark_filtered(policy_reason("first")));
    assert!(!stmt.mark_filtered(policy_reason("second")));
    assert_eq!(stmt.filter_reason(), Some(&policy_reason("first")));
}

#[test]
fn test_create_dropped_display() {
    let reason = FilterReason::CreateDropped {
        object_kind: ObjectKind::Table,
        name: "foo".to_string(),
        dropped_by: 4,
    };
    assert_eq!(
        reason.to_string(),
        "CREATE TABLE \"foo\" is made redundant by later DROP TABLE \"foo\""
    );
    assert_eq!(reason.kind(), "create_dropped");
    assert!(reason.is_redundancy());
}

#[test]
fn test_constraint_dropped_display() {
    let reason = FilterReason::ConstraintDropped {
        table: "orders".to_string(),
        constraint: "orders_pkey".to_string(),
        dropped_by: 9,
    };
    assert_eq!(
        reason.to_string(),
        "ADD CONSTRAINT \"orders_pkey\" on table \"orders\" is made redundant by later DROP CONSTRAINT \"orders_pkey\""
    );
    assert_eq!(reason.kind(), "constraint_dropped");
}

#[test]
fn test_policy_reason_is_not_redundancy() {
    let reason = policy_reason("Prisma bookkeeping");
    assert_eq!(reason.kind(), "policy");
    assert!(!reason.is_redundancy());
}

#[test]
fn test_reason_serializes_tagged() {
    let reason = FilterReason::CreateDropped {
        object_kind: ObjectKind::Index,
        name: "idx".to_string(),
        dropped_by: 1,
    };
    let json = serde_json::to_value(&reason).unwrap();
    assert_eq!(json["kind"], "create_dropped");
    assert_eq!(json["object_kind"], "INDEX");
    assert_eq!(json["dropped_by"], 1);
}
