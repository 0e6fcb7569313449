//! Consolidate command implementation

use anyhow::{Context, Result};
use chrono::Utc;
use ms_analysis::{finalize, reconcile, ConsolidationReport};
use ms_core::migrations::{
    backup_folders, discover_folders, find_new_migration, read_sources, BackupSummary,
};
use ms_core::report::{write_reports, ReportPaths};
use ms_core::{Config, MigrationFolder, Policy};
use ms_tool::{CommandTool, MigrationTool};
use std::path::Path;

use crate::cli::{ConsolidateArgs, GlobalArgs};
use crate::commands::common::{filter_history, load_config, load_policy, print_summary};

/// Everything a consolidation run produced.
#[derive(Debug)]
pub(crate) struct ConsolidateOutcome {
    pub(crate) backup: BackupSummary,
    pub(crate) new_migration: MigrationFolder,
    pub(crate) report: ConsolidationReport,
    pub(crate) paths: ReportPaths,
}

/// Execute the consolidate command
pub(crate) async fn execute(args: &ConsolidateArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let policy = load_policy(global, &config)?;
    let tool = CommandTool::new(
        Config::project_root(&args.prisma_dir),
        config.tool.reset_command(&config.migration_name),
        config.tool.generate_command(&config.migration_name),
    );

    let outcome = consolidate(&args.prisma_dir, &config, &policy, &tool).await?;

    println!();
    println!(
        "Backed up {} migrations to {}",
        outcome.backup.moved.len(),
        config.backup_path(&args.prisma_dir).display()
    );
    println!("New migration: {}", outcome.new_migration.name);
    print_summary(&outcome.report.summary, true);
    println!();
    println!("Reports:");
    println!("  {}", outcome.paths.filtered.display());
    println!("  {}", outcome.paths.missing.display());

    if !outcome.report.missing.is_empty() {
        println!();
        println!(
            "{} statements are not in the new migration. Review {} before deploying.",
            outcome.report.missing.len(),
            outcome.paths.missing.display()
        );
    }

    Ok(())
}

/// Run the whole workflow against `prisma_dir`.
///
/// The history is read and filtered before anything on disk changes, so a
/// bad policy or unreadable migration aborts with the history untouched.
pub(crate) async fn consolidate(
    prisma_dir: &Path,
    config: &Config,
    policy: &Policy,
    tool: &dyn MigrationTool,
) -> Result<ConsolidateOutcome> {
    let migrations_dir = config.migrations_path(prisma_dir);
    let backup_dir = config.backup_path(prisma_dir);

    let folders = discover_folders(&migrations_dir).context("Failed to list migrations")?;
    if folders.is_empty() {
        anyhow::bail!("No migration folders found in {}", migrations_dir.display());
    }
    let sources = read_sources(&folders, &config.migration_file)?;
    let (pipeline, summary) = filter_history(&sources, policy);
    log::info!(
        "{} of {} statements filtered before regeneration",
        summary.filtered,
        summary.total
    );

    let backup = backup_folders(&folders, &migrations_dir, &backup_dir, &config.lock_file)
        .context("Failed to back up migrations")?;

    log::info!("Resetting database with {}", tool.tool_name());
    tool.reset().await.context("Database reset failed")?;
    log::info!("Generating consolidated migration with {}", tool.tool_name());
    tool.generate()
        .await
        .context("Migration generation failed")?;

    let new_migration = find_new_migration(&migrations_dir, &config.migration_file)
        .context("Failed to read the regenerated migration")?;
    log::info!("Reconciling against {}", new_migration.folder.name);

    let reconciliation = reconcile(pipeline, &new_migration.sql);
    let report = finalize(reconciliation.pipeline, reconciliation.removed, summary);

    let paths = write_reports(
        &new_migration.folder.path,
        &report.filtered,
        &report.missing,
        Utc::now(),
    )
    .context("Failed to write reports")?;

    Ok(ConsolidateOutcome {
        backup,
        new_migration: new_migration.folder,
        report,
        paths,
    })
}

#[cfg(test)]
#[path = "consolidate_test.rs"]
mod tests;
