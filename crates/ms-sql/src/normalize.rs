//! Statement normalization for cross-file equality

/// Normalize a statement for comparison.
///
/// Collapses every whitespace run to a single space, trims, and lowercases.
/// Two statements are equivalent iff their normalized forms are equal.
///
/// # Examples
/// ```
/// use ms_sql::normalize_statement;
/// assert_eq!(normalize_statement("CREATE  TABLE Foo\n(id INT)"), "create table foo (id int)");
/// ```
pub fn normalize_statement(sql: &str) -> String {
    sql.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check whether two statements are equivalent after normalization.
pub fn statements_equivalent(a: &str, b: &str) -> bool {
    normalize_statement(a) == normalize_statement(b)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
