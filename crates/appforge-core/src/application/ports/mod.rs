//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `appforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory checks and creation, logfile reset
//!   - `PackageIdValidator`: package-id syntax
//!   - `LogSink`: one destination for routed log lines
//!   - `LogfileOpener`: binds a `LogSink` to a file path
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `Application`)

pub mod output;

pub use output::{Filesystem, LogSink, LogfileOpener, PackageIdValidator, SinkKind};

#[cfg(test)]
pub use output::{MockFilesystem, MockLogfileOpener, MockPackageIdValidator};
