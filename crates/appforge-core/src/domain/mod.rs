//! Core domain layer for AppForge.
//!
//! This module contains pure business logic with ZERO I/O.
//! Filesystem checks, package-id syntax, and log sinks are reached through
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable values**: `PackageId` and `PathLayout` never change once built
pub mod error;
pub mod layout;
pub mod package_id;

pub use error::{DomainError, ErrorCategory};
pub use layout::PathLayout;
pub use package_id::PackageId;
