//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Working path unusable, not a project toplevel, or a layout directory
    /// is missing after construction.
    #[error("Invalid path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Project root already exists.
    #[error("Project already exists at {path}")]
    PathConflict { path: PathBuf },

    /// Write to a read-only property, or a value the property refuses.
    #[error("Illegal access to '{property}': {reason}")]
    IllegalAccess {
        property: &'static str,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A log sink could not be written or flushed.
    #[error("Log sink error: {reason}")]
    LogSink { reason: String },
}

impl ApplicationError {
    pub(crate) fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn read_only(property: &'static str) -> Self {
        Self::IllegalAccess {
            property,
            reason: "property is read-only".into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPath { path, .. } => vec![
                format!("Check the directory: {}", path.display()),
                "Pass an absolute, normalized path to an existing directory".into(),
                "To load a project, run from its root directory (named after the package id)"
                    .into(),
            ],
            Self::PathConflict { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Load the existing project from inside that directory instead".into(),
                "Choose a different package id".into(),
            ],
            Self::IllegalAccess { property, .. } => vec![
                format!("'{}' cannot be assigned this way", property),
                "Only the platform logfile output accepts a logfile sink or none".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LogSink { .. } => vec!["Check the log directory is writable".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPath { .. } => ErrorCategory::NotFound,
            Self::PathConflict { .. } => ErrorCategory::Conflict,
            Self::IllegalAccess { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::LogSink { .. } => ErrorCategory::Internal,
        }
    }
}
