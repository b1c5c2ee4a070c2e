//! Infrastructure adapters for AppForge.
//!
//! This crate implements the ports defined in `appforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod context;
pub mod filesystem;
pub mod sinks;
pub mod validator;

// Re-export commonly used adapters
pub use context::{MemoryParts, local_context, memory_context};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use sinks::{LocalLogfileOpener, LogfileSink, MemoryLogfileOpener, MemorySink, TerminalSink};
pub use validator::ReverseHostValidator;
