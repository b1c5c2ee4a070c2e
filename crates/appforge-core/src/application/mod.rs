//! Application layer for AppForge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Application, ProjectScaffolder, DirectoryValidator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Router**: the terminal + logfile fan-out writer
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! path or id rules itself. Those live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod router;
pub mod services;

pub use context::AppContext;
pub use router::OutputRouter;
pub use services::{Application, DirectoryValidator, ProjectScaffolder};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LogSink, LogfileOpener, PackageIdValidator, SinkKind};

pub use error::ApplicationError;
