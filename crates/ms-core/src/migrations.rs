//! Migration folder discovery, backup, and loading
//!
//! A migrations directory holds one folder per migration, each with a SQL
//! file (`migration.sql` by default). Folders are enumerated in name order;
//! Prisma prefixes folder names with a timestamp, so name order is
//! chronological order.

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// One versioned migration folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFolder {
    /// Folder name, used as the statement source identifier
    pub name: String,
    /// Absolute or caller-relative folder path
    pub path: PathBuf,
}

/// Raw SQL contents of one migration folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSource {
    pub name: String,
    pub sql: String,
}

/// The regenerated consolidated migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMigration {
    pub folder: MigrationFolder,
    pub sql: String,
}

/// What a backup moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSummary {
    pub moved: Vec<String>,
    pub lock_file_copied: bool,
}

/// List migration folders under `migrations_dir`, sorted by name.
///
/// Plain files (such as the lock file) are ignored.
pub fn discover_folders(migrations_dir: &Path) -> CoreResult<Vec<MigrationFolder>> {
    if !migrations_dir.is_dir() {
        return Err(CoreError::MigrationsDirNotFound {
            path: migrations_dir.display().to_string(),
        });
    }

    let entries = fs::read_dir(migrations_dir).map_err(|e| CoreError::io(migrations_dir, e))?;
    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::io(migrations_dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        folders.push(MigrationFolder {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
        });
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(folders)
}

/// Read each folder's SQL file.
///
/// A folder without the file contributes an empty source rather than an
/// error.
pub fn read_sources(
    folders: &[MigrationFolder],
    migration_file: &str,
) -> CoreResult<Vec<MigrationSource>> {
    folders
        .iter()
        .map(|folder| {
            let sql_path = folder.path.join(migration_file);
            let sql = if sql_path.is_file() {
                fs::read_to_string(&sql_path).map_err(|e| CoreError::io(&sql_path, e))?
            } else {
                log::debug!("{} has no {}, skipping", folder.name, migration_file);
                String::new()
            };
            Ok(MigrationSource {
                name: folder.name.clone(),
                sql,
            })
        })
        .collect()
}

/// Move every folder into `backup_dir` and copy the lock file next to them.
///
/// Refuses to overwrite an existing backup of the same folder name.
pub fn backup_folders(
    folders: &[MigrationFolder],
    migrations_dir: &Path,
    backup_dir: &Path,
    lock_file: &str,
) -> CoreResult<BackupSummary> {
    fs::create_dir_all(backup_dir).map_err(|e| CoreError::io(backup_dir, e))?;

    // Check every destination before moving anything.
    for folder in folders {
        let dest = backup_dir.join(&folder.name);
        if dest.exists() {
            return Err(CoreError::BackupExists {
                path: dest.display().to_string(),
            });
        }
    }

    let mut summary = BackupSummary::default();
    for folder in folders {
        let dest = backup_dir.join(&folder.name);
        fs::rename(&folder.path, &dest).map_err(|e| CoreError::io(&folder.path, e))?;
        log::info!("Moved {} to backup", folder.name);
        summary.moved.push(folder.name.clone());
    }

    let lock_path = migrations_dir.join(lock_file);
    if lock_path.is_file() {
        let dest = backup_dir.join(lock_file);
        fs::copy(&lock_path, &dest).map_err(|e| CoreError::io(&lock_path, e))?;
        log::info!("Backed up {}", lock_file);
        summary.lock_file_copied = true;
    }

    Ok(summary)
}

/// Locate the regenerated migration and read its SQL file.
///
/// After regeneration the migrations directory is expected to hold exactly
/// one folder; if there are several, the first in name order is used.
pub fn find_new_migration(migrations_dir: &Path, migration_file: &str) -> CoreResult<NewMigration> {
    let folders = discover_folders(migrations_dir)?;
    if folders.len() > 1 {
        log::warn!(
            "Expected one migration folder in {}, found {}; using {}",
            migrations_dir.display(),
            folders.len(),
            folders[0].name
        );
    }
    let folder = folders
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::NoNewMigration {
            path: migrations_dir.display().to_string(),
        })?;

    let sql_path = folder.path.join(migration_file);
    if !sql_path.is_file() {
        return Err(CoreError::NewMigrationFileMissing {
            folder: folder.name,
            file: migration_file.to_string(),
        });
    }
    let sql = fs::read_to_string(&sql_path).map_err(|e| CoreError::io(&sql_path, e))?;
    Ok(NewMigration { folder, sql })
}

#[cfg(test)]
#[path = "migrations_test.rs"]
mod tests;
