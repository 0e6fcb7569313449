//! Configuration types and parsing for migsquash.yml
//!
//! The config file is optional. Every field has a default matching a stock
//! Prisma project driven through `bun`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "migsquash.yml";

/// Tool configuration from migsquash.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the filter policy JSON document
    #[serde(default = "default_policy_path")]
    pub policy_path: String,

    /// Migrations directory, relative to the prisma dir
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Backup directory for historical migrations, relative to the prisma dir
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// SQL file inside each migration folder
    #[serde(default = "default_migration_file")]
    pub migration_file: String,

    /// Lock file copied alongside the backup
    #[serde(default = "default_lock_file")]
    pub lock_file: String,

    /// Name passed to the migration tool for the consolidated migration
    #[serde(default = "default_migration_name")]
    pub migration_name: String,

    /// External migration tool commands
    #[serde(default)]
    pub tool: ToolConfig,
}

/// Commands used to reset the database and regenerate the migration.
///
/// Each command is an argv list. `{name}` in any argument is replaced with
/// the configured migration name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default = "default_reset_command")]
    pub reset: Vec<String>,

    #[serde(default = "default_generate_command")]
    pub generate: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            reset: default_reset_command(),
            generate: default_generate_command(),
        }
    }
}

impl ToolConfig {
    /// Reset command with `{name}` substituted.
    pub fn reset_command(&self, migration_name: &str) -> Vec<String> {
        substitute(&self.reset, migration_name)
    }

    /// Generate command with `{name}` substituted.
    pub fn generate_command(&self, migration_name: &str) -> Vec<String> {
        substitute(&self.generate, migration_name)
    }
}

fn substitute(argv: &[String], migration_name: &str) -> Vec<String> {
    argv.iter()
        .map(|arg| arg.replace("{name}", migration_name))
        .collect()
}

fn default_policy_path() -> String {
    "filters.json".to_string()
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_backup_dir() -> String {
    "migrations-backup".to_string()
}

fn default_migration_file() -> String {
    "migration.sql".to_string()
}

fn default_lock_file() -> String {
    "migration_lock.toml".to_string()
}

fn default_migration_name() -> String {
    "consolidated".to_string()
}

fn default_reset_command() -> Vec<String> {
    ["bun", "prisma", "migrate", "reset", "--force"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_generate_command() -> Vec<String> {
    ["bun", "prisma", "migrate", "dev", "--name", "{name}"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy_path: default_policy_path(),
            migrations_dir: default_migrations_dir(),
            backup_dir: default_backup_dir(),
            migration_file: default_migration_file(),
            lock_file: default_lock_file(),
            migration_name: default_migration_name(),
            tool: ToolConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load configuration from a directory, falling back to defaults when
    /// no migsquash.yml exists there.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }

    fn validate(&self, path: &Path) -> CoreResult<()> {
        let invalid = |message: &str| CoreError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.migration_file.trim().is_empty() {
            return Err(invalid("migration_file cannot be empty"));
        }
        if self.migrations_dir == self.backup_dir {
            return Err(invalid("backup_dir must differ from migrations_dir"));
        }
        if self.tool.reset.is_empty() || self.tool.generate.is_empty() {
            return Err(invalid("tool commands cannot be empty"));
        }
        Ok(())
    }

    /// `<prisma-dir>/<migrations_dir>`
    pub fn migrations_path(&self, prisma_dir: &Path) -> PathBuf {
        prisma_dir.join(&self.migrations_dir)
    }

    /// `<prisma-dir>/<backup_dir>`
    pub fn backup_path(&self, prisma_dir: &Path) -> PathBuf {
        prisma_dir.join(&self.backup_dir)
    }

    /// Directory the migration tool runs in: the parent of the prisma dir.
    pub fn project_root(prisma_dir: &Path) -> PathBuf {
        match prisma_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
