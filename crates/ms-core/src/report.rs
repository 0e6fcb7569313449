//! Report rendering for filtered and missing statements
//!
//! Two files are written into the regenerated migration folder once the
//! pipeline has finished: a JSON list of filtered statements with their
//! reasons, and a SQL file of kept statements the regenerated migration
//! does not contain.

use crate::error::{CoreError, CoreResult};
use crate::statement::Statement;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the filtered statements report.
pub const FILTERED_REPORT_FILE: &str = "filtered-queries.json";

/// File name of the missing statements report.
pub const MISSING_REPORT_FILE: &str = "missing-queries.sql";

/// One entry of `filtered-queries.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredQueryRecord<'a> {
    pub query: &'a str,
    pub is_filtered_query: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_kind: Option<&'static str>,
    pub migration_file: &'a str,
}

impl<'a> From<&'a Statement> for FilteredQueryRecord<'a> {
    fn from(stmt: &'a Statement) -> Self {
        let reason = stmt.filter_reason();
        Self {
            query: stmt.text(),
            is_filtered_query: stmt.is_filtered(),
            filter_reason: reason.map(ToString::to_string),
            filter_kind: reason.map(|r| r.kind()),
            migration_file: stmt.source(),
        }
    }
}

/// Paths of the written report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub filtered: PathBuf,
    pub missing: PathBuf,
}

/// Render statements as the pretty-printed `filtered-queries.json` array.
pub fn render_filtered_json(statements: &[Statement]) -> CoreResult<String> {
    let records: Vec<FilteredQueryRecord<'_>> = statements.iter().map(Into::into).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Render the `missing-queries.sql` report.
pub fn render_missing_sql(missing: &[Statement], generated_at: DateTime<Utc>) -> String {
    if missing.is_empty() {
        return "-- No missing queries found\n-- All queries were included in the new migration\n"
            .to_string();
    }

    let mut lines = vec![
        "-- Queries not included in the new consolidated migration".to_string(),
        format!(
            "-- Generated on: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!("-- Total missing queries: {}", missing.len()),
        String::new(),
    ];
    for (index, stmt) in missing.iter().enumerate() {
        lines.push(format!(
            "-- Query {} (from {}):\n{};\n",
            index + 1,
            stmt.source(),
            stmt.text()
        ));
    }
    lines.join("\n")
}

/// Write both reports into `folder`.
pub fn write_reports(
    folder: &Path,
    filtered: &[Statement],
    missing: &[Statement],
    generated_at: DateTime<Utc>,
) -> CoreResult<ReportPaths> {
    let paths = ReportPaths {
        filtered: folder.join(FILTERED_REPORT_FILE),
        missing: folder.join(MISSING_REPORT_FILE),
    };
    let filtered_json = render_filtered_json(filtered)?;
    let missing_sql = render_missing_sql(missing, generated_at);

    write_atomic(&paths.filtered, &filtered_json)?;
    write_atomic(&paths.missing, &missing_sql)?;
    Ok(paths)
}

/// Write a file via write-to-temp-then-rename.
///
/// The temp file name includes the PID so concurrent processes don't race.
pub fn write_atomic(path: &Path, content: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!("{file_name}.{}.tmp", std::process::id()));
    std::fs::write(&temp_path, content).map_err(|e| CoreError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        CoreError::io(path, e)
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
