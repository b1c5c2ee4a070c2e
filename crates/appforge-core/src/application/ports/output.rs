//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `appforge-adapters` crate provides implementations.

use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::PackageId;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appforge_adapters::filesystem::LocalFilesystem` (production)
/// - `appforge_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - `create_dir` is NOT recursive: the parent must already exist
/// - `is_dir` never fails; unreadable paths count as absent
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. Fails if the parent is missing.
    fn create_dir(&self, path: &Path) -> ForgeResult<()>;

    /// Remove a file; a missing file is not an error.
    fn remove_file_if_exists(&self, path: &Path) -> ForgeResult<()>;

    /// Create an empty file, truncating any existing content.
    fn create_file(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for package-id syntax validation.
///
/// Implemented by:
/// - `appforge_adapters::validator::ReverseHostValidator`
#[cfg_attr(test, automock)]
pub trait PackageIdValidator: Send + Sync {
    /// Validate a candidate identifier.
    ///
    /// - `Ok(Some(id))`: accepted
    /// - `Ok(None)`: the candidate is not an identifier at all
    /// - `Err(DomainError::InvalidPackageId)`: looks like one but is malformed
    fn validate(&self, candidate: &str) -> ForgeResult<Option<PackageId>>;
}

/// What a sink writes to. The router only ever swaps logfile-kind sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Terminal,
    Logfile,
}

/// Port for one destination of routed output.
///
/// Implemented by:
/// - `appforge_adapters::sinks::TerminalSink` (process-wide stdout)
/// - `appforge_adapters::sinks::LogfileSink` (append-mode file)
/// - `appforge_adapters::sinks::MemorySink` (testing)
///
/// Sinks are shared through `Arc`, so writes take `&self`.
pub trait LogSink: Send + Sync {
    fn kind(&self) -> SinkKind;

    /// Write one line; the sink appends the line terminator.
    fn write_line(&self, line: &str) -> ForgeResult<()>;

    fn flush(&self) -> ForgeResult<()>;

    /// File backing this sink, if any.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Port for binding a logfile sink to a path.
#[cfg_attr(test, automock)]
pub trait LogfileOpener: Send + Sync {
    fn open(&self, path: &Path) -> ForgeResult<Arc<dyn LogSink>>;
}
