//! Reconcile command implementation
//!
//! Reruns the analysis after a consolidation: the backup directory is the
//! history and the current migrations directory holds the regenerated
//! migration.

use anyhow::{Context, Result};
use chrono::Utc;
use ms_analysis::{finalize, reconcile, ConsolidationReport};
use ms_core::migrations::{discover_folders, find_new_migration, read_sources};
use ms_core::report::write_reports;

use crate::cli::{GlobalArgs, ReconcileArgs};
use crate::commands::common::{
    filter_history, load_config, load_policy, one_line, print_summary, print_table, ExitCode,
};

/// Execute the reconcile command
pub(crate) async fn execute(args: &ReconcileArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let policy = load_policy(global, &config)?;

    let backup_dir = config.backup_path(&args.prisma_dir);
    let folders = discover_folders(&backup_dir).context("Failed to list backed-up migrations")?;
    let sources = read_sources(&folders, &config.migration_file)?;
    let new_migration = find_new_migration(
        &config.migrations_path(&args.prisma_dir),
        &config.migration_file,
    )
    .context("Failed to read the current migration")?;

    let (pipeline, summary) = filter_history(&sources, &policy);
    let reconciliation = reconcile(pipeline, &new_migration.sql);
    let report = finalize(reconciliation.pipeline, reconciliation.removed, summary);

    println!(
        "Reconciled {} backed-up migrations against {}\n",
        folders.len(),
        new_migration.folder.name
    );
    print_summary(&report.summary, true);

    if args.write {
        let paths = write_reports(
            &new_migration.folder.path,
            &report.filtered,
            &report.missing,
            Utc::now(),
        )
        .context("Failed to write reports")?;
        println!();
        println!("Wrote {}", paths.filtered.display());
        println!("Wrote {}", paths.missing.display());
    }

    if report.missing.is_empty() {
        return Ok(());
    }

    println!();
    print_table(&["#", "SOURCE", "STATEMENT"], &missing_rows(&report));
    Err(ExitCode(1).into())
}

fn missing_rows(report: &ConsolidationReport) -> Vec<Vec<String>> {
    report
        .missing
        .iter()
        .enumerate()
        .map(|(i, stmt)| {
            vec![
                (i + 1).to_string(),
                stmt.source().to_string(),
                one_line(stmt.text(), 72),
            ]
        })
        .collect()
}
