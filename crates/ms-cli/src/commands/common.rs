//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ms_analysis::{apply_policy, resolve_redundancy, Summary};
use ms_core::{Config, MigrationSource, Pipeline, Policy};
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; nothing user-facing to print.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the config named by `--config`, or `migsquash.yml` in the working
/// directory when present.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_from_dir(Path::new(".")).context("Failed to load config"),
    }
}

/// Load the filter policy, `--policy` taking precedence over the config.
pub(crate) fn load_policy(global: &GlobalArgs, config: &Config) -> Result<Policy> {
    let path = global
        .policy
        .clone()
        .unwrap_or_else(|| config.policy_path.clone().into());
    let policy = Policy::load(&path)
        .with_context(|| format!("Failed to load filter policy {}", path.display()))?;
    log::info!(
        "Loaded {} filter rules ({} enabled) from {}",
        policy.len(),
        policy.enabled_count(),
        path.display()
    );
    Ok(policy)
}

/// Extract the history and run the policy and redundancy passes.
///
/// Returns the annotated pipeline and the pre-reconciliation summary.
pub(crate) fn filter_history(sources: &[MigrationSource], policy: &Policy) -> (Pipeline, Summary) {
    let pipeline = Pipeline::extract(sources);
    log::info!(
        "Extracted {} statements from {} migrations",
        pipeline.len(),
        sources.len()
    );
    let pipeline = resolve_redundancy(apply_policy(pipeline, policy));
    let summary = Summary::from_filtered(&pipeline);
    (pipeline, summary)
}

/// Print the run totals.
pub(crate) fn print_summary(summary: &Summary, reconciled: bool) {
    println!("Summary:");
    println!("  Total statements:          {}", summary.total);
    println!("  Filtered:                  {}", summary.filtered);
    for (reason, count) in &summary.filtered_by_reason {
        println!("    {}: {}", reason, count);
    }
    if reconciled {
        println!("  Found in new migration:    {}", summary.reconciled);
        println!("  Filtered, not in new:      {}", summary.filtered_remaining);
        for (reason, count) in &summary.remaining_by_reason {
            println!("    {}: {}", reason, count);
        }
        println!("  Missing:                   {}", summary.missing);
    }
}

/// Collapse a statement onto one line and cut it to `max` characters.
pub(crate) fn one_line(sql: &str, max: usize) -> String {
    let flat = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Calculate column widths for a table given headers and rows.
///
/// Each width is the maximum of the header length and the longest cell
/// in that column.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Prints a left-aligned header row, a separator line of dashes, and each
/// data row. Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  ").trim_end());

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  ").trim_end());
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
