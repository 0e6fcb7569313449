//! Error types for ms-core

use thiserror::Error;

/// Core error type for migsquash
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config {path}: {message}")]
    ConfigParseError { path: String, message: String },

    /// E003: Policy document not found
    #[error("[E003] Filter policy not found: {path}")]
    PolicyNotFound { path: String },

    /// E004: Policy document is not valid JSON or has the wrong shape
    #[error("[E004] Failed to parse filter policy {path}: {message}")]
    PolicyParseError { path: String, message: String },

    /// E005: A policy pattern is not a valid regular expression
    #[error("[E005] Invalid pattern '{pattern}' in filter rule '{rule}': {message}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        message: String,
    },

    /// E006: Migrations directory not found
    #[error("[E006] Migrations directory not found: {path}")]
    MigrationsDirNotFound { path: String },

    /// E007: No regenerated migration folder after running the migration tool
    #[error("[E007] No migration folder found in {path}")]
    NoNewMigration { path: String },

    /// E008: Regenerated migration folder without a migration file
    #[error("[E008] New migration '{folder}' has no {file}")]
    NewMigrationFileMissing { folder: String, file: String },

    /// E009: Backup destination already exists
    #[error("[E009] Backup destination already exists: {path}")]
    BackupExists { path: String },

    /// E010: IO error with file path context
    #[error("[E010] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E011: IO error
    #[error("[E011] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        }
    }
}
