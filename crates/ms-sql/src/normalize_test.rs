use super::*;

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(
        normalize_statement("  CREATE\tTABLE   foo\n\n(id  INT)  "),
        "create table foo (id int)"
    );
}

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize_statement("DROP TABLE \"User\""), "drop table \"user\"");
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize_statement(""), "");
    assert_eq!(normalize_statement(" \n\t "), "");
}

#[test]
fn test_equivalence_ignores_case_and_whitespace() {
    assert!(statements_equivalent(
        "CREATE  TABLE Foo (id INT)",
        "create table foo (id int)"
    ));
}

#[test]
fn test_equivalence_is_literal_otherwise() {
    // Whitespace next to punctuation is not removed, only collapsed.
    assert!(!statements_equivalent(
        "CREATE TABLE foo(id INT)",
        "CREATE TABLE foo (id INT)"
    ));
    assert!(!statements_equivalent("DROP TABLE a", "DROP TABLE IF EXISTS a"));
}
