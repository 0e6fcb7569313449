//! Analyze command implementation

use anyhow::{Context, Result};
use ms_core::migrations::{discover_folders, read_sources};
use ms_core::report::render_filtered_json;
use ms_core::Pipeline;

use crate::cli::{AnalyzeArgs, AnalyzeOutput, GlobalArgs};
use crate::commands::common::{
    filter_history, load_config, load_policy, one_line, print_summary, print_table,
};

/// Execute the analyze command
pub(crate) async fn execute(args: &AnalyzeArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let policy = load_policy(global, &config)?;

    let migrations_dir = config.migrations_path(&args.prisma_dir);
    let folders = discover_folders(&migrations_dir).context("Failed to list migrations")?;
    let sources = read_sources(&folders, &config.migration_file)?;
    let (pipeline, summary) = filter_history(&sources, &policy);

    match args.output {
        AnalyzeOutput::Json => {
            let (filtered, _kept) = pipeline.partition();
            println!("{}", render_filtered_json(&filtered)?);
        }
        AnalyzeOutput::Table => {
            println!(
                "Analyzed {} migrations in {}\n",
                folders.len(),
                migrations_dir.display()
            );
            print_summary(&summary, false);
            if summary.filtered > 0 {
                println!();
                print_table(&["SOURCE", "KIND", "STATEMENT"], &filtered_rows(&pipeline));
            }
        }
    }

    Ok(())
}

/// One row per filtered statement, in history order.
fn filtered_rows(pipeline: &Pipeline) -> Vec<Vec<String>> {
    pipeline
        .statements()
        .iter()
        .filter_map(|stmt| {
            let reason = stmt.filter_reason()?;
            Some(vec![
                stmt.source().to_string(),
                reason.kind().to_string(),
                one_line(stmt.text(), 72),
            ])
        })
        .collect()
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
