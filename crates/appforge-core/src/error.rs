//! Unified error handling for AppForge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for AppForge Core operations.
///
/// This enum wraps all possible errors that can occur when using appforge-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Errors from the domain layer (business logic violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ForgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in AppForge".into(),
                format!("Please report this issue at: {ISSUES_URL}"),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The abstract failure kind, independent of which layer raised it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::InvalidPackageId { .. }) => ErrorKind::InvalidPackageId,
            Self::Application(e) => match e {
                ApplicationError::InvalidPath { .. } => ErrorKind::InvalidPath,
                ApplicationError::PathConflict { .. } => ErrorKind::PathConflict,
                ApplicationError::IllegalAccess { .. } => ErrorKind::IllegalAccess,
                ApplicationError::Filesystem { .. } | ApplicationError::LogSink { .. } => {
                    ErrorKind::Io
                }
            },
            Self::Configuration { .. } | Self::Internal { .. } => ErrorKind::Other,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// What went wrong, in the vocabulary callers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Base path missing, non-absolute, non-normalized or not a project.
    InvalidPath,
    /// "create" mode targets a root directory that already exists.
    PathConflict,
    /// Identifier rejected by the package-id validator.
    InvalidPackageId,
    /// Write to a read-only property, or an unacceptable value.
    IllegalAccess,
    /// Unclassified filesystem or sink I/O failure.
    Io,
    Other,
}

const ISSUES_URL: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn kind_maps_every_domain_kind() {
        let cases: Vec<(ForgeError, ErrorKind)> = vec![
            (
                ApplicationError::InvalidPath {
                    path: PathBuf::from("x"),
                    reason: "relative".into(),
                }
                .into(),
                ErrorKind::InvalidPath,
            ),
            (
                ApplicationError::PathConflict {
                    path: PathBuf::from("/w/a.b"),
                }
                .into(),
                ErrorKind::PathConflict,
            ),
            (
                DomainError::InvalidPackageId {
                    candidate: "a..b".into(),
                    reason: "empty segment".into(),
                }
                .into(),
                ErrorKind::InvalidPackageId,
            ),
            (
                ApplicationError::IllegalAccess {
                    property: "output",
                    reason: "read-only".into(),
                }
                .into(),
                ErrorKind::IllegalAccess,
            ),
            (
                ApplicationError::Filesystem {
                    path: PathBuf::from("/w"),
                    reason: "denied".into(),
                }
                .into(),
                ErrorKind::Io,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn conflict_category_for_path_conflict() {
        let err: ForgeError = ApplicationError::PathConflict {
            path: PathBuf::from("/w/a.b"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn internal_error_links_workspace_issue_tracker() {
        let err = ForgeError::Internal {
            message: "router lost its sink".into(),
        };
        let link = err
            .suggestions()
            .into_iter()
            .find(|s| s.contains("/issues"))
            .unwrap();
        assert!(link.contains(env!("CARGO_PKG_REPOSITORY")), "{link}");
        assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
    }
}
