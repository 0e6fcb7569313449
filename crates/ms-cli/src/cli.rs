//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// migsquash - Consolidate a Prisma migration history into one migration
#[derive(Parser, Debug)]
#[command(name = "migsquash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: ./migsquash.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the filter policy path
    #[arg(long, global = true, env = "MIGSQUASH_POLICY")]
    pub policy: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up the history, regenerate one migration, and report what was lost
    Consolidate(ConsolidateArgs),

    /// Show what the policy and redundancy passes would filter
    Analyze(AnalyzeArgs),

    /// Compare the backed-up history against the current migration
    Reconcile(ReconcileArgs),

    /// List the filter policy rules
    Rules(RulesArgs),
}

/// Arguments for the consolidate command
#[derive(Args, Debug)]
pub struct ConsolidateArgs {
    /// Prisma directory holding the migrations folder
    #[arg(default_value = "prisma")]
    pub prisma_dir: PathBuf,
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Prisma directory holding the migrations folder
    #[arg(default_value = "prisma")]
    pub prisma_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: AnalyzeOutput,
}

/// Analyze output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutput {
    /// Summary and filtered statements table
    Table,
    /// Filtered statements as JSON
    Json,
}

/// Arguments for the reconcile command
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Prisma directory holding the migrations and backup folders
    #[arg(default_value = "prisma")]
    pub prisma_dir: PathBuf,

    /// Rewrite the report files in the current migration folder
    #[arg(long)]
    pub write: bool,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
