//! Statement extraction from raw migration files
//!
//! Extraction is a tokenizer over comments and `;` terminators, not a
//! grammar. A `--` inside a string literal is treated as the start of a line
//! comment; telling the two apart would need a real lexer.

/// Split raw migration SQL into trimmed, comment-free statements.
///
/// Block comments are removed first, then everything after `--` on each
/// line. The remaining text is split on `;` and empty fragments are dropped.
/// Malformed SQL never causes an error; it only affects where the splits land.
///
/// # Examples
/// ```
/// use ms_sql::extract_statements;
/// let stmts = extract_statements("-- init\nCREATE TABLE a (id INT);\n/* done */ DROP TABLE a;");
/// assert_eq!(stmts, vec!["CREATE TABLE a (id INT)", "DROP TABLE a"]);
/// ```
pub fn extract_statements(sql: &str) -> Vec<String> {
    let without_blocks = strip_block_comments(sql);
    let without_lines = strip_line_comments(&without_blocks);
    split_statements(&without_lines)
}

/// Remove `/* ... */` comments, matching each opener with the nearest closer.
///
/// A block comment that never closes swallows the rest of the input.
pub fn strip_block_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        match body.find("*/") {
            Some(end) => rest = &body[end + 2..],
            None => return out,
        }
    }

    out.push_str(rest);
    out
}

/// Truncate every line at its first `--` and drop lines left blank.
pub fn strip_line_comments(sql: &str) -> String {
    sql.split('\n')
        .map(|line| match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on `;`, trimming each fragment and discarding empty ones.
fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
