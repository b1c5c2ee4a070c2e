//! AppForge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the AppForge
//! project tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          appforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Application, ProjectScaffolder, ...)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Validator, Sinks)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, LogfileSink, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │         (PackageId, PathLayout)         │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use appforge_core::prelude::*;
//!
//! // 1. Build the process-wide context (adapters come from appforge-adapters)
//! let context = Arc::new(AppContext::new(config, terminal, filesystem, validator, logfiles));
//!
//! // 2. Create a brand-new project under /work ...
//! let app = Application::create(Arc::clone(&context), "/work", "com.example.foo").unwrap();
//!
//! // 3. ... or load one, passing the project root itself
//! let app = Application::load(context, "/work/com.example.foo").unwrap();
//! app.log("hello").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod config;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppContext, Application, DirectoryValidator, OutputRouter, ProjectScaffolder,
        ports::{Filesystem, LogSink, LogfileOpener, PackageIdValidator, SinkKind},
    };
    pub use crate::config::ForgeConfig;
    pub use crate::domain::{PackageId, PathLayout};
    pub use crate::error::{ErrorKind, ForgeError, ForgeResult};
}

