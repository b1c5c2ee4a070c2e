//! Ready-made [`AppContext`] assemblies.

use std::sync::Arc;

use appforge_core::{application::AppContext, config::ForgeConfig};

use crate::{
    LocalFilesystem, LocalLogfileOpener, MemoryFilesystem, MemoryLogfileOpener, MemorySink,
    ReverseHostValidator, TerminalSink,
};

/// Production wiring: local disk, stdout terminal, reverse-host ids.
pub fn local_context(config: Arc<ForgeConfig>) -> Arc<AppContext> {
    Arc::new(AppContext::new(
        config,
        TerminalSink::shared(),
        Box::new(LocalFilesystem::new()),
        Box::new(ReverseHostValidator::new()),
        Box::new(LocalLogfileOpener),
    ))
}

/// Handles onto the in-memory adapters inside a [`memory_context`].
#[derive(Debug, Clone)]
pub struct MemoryParts {
    pub filesystem: MemoryFilesystem,
    pub logfiles: MemoryLogfileOpener,
    pub terminal: Arc<MemorySink>,
}

/// Fully in-memory wiring, for tests and dry runs.
pub fn memory_context(config: Arc<ForgeConfig>) -> (Arc<AppContext>, MemoryParts) {
    let parts = MemoryParts {
        filesystem: MemoryFilesystem::new(),
        logfiles: MemoryLogfileOpener::new(),
        terminal: MemorySink::terminal(),
    };
    let context = AppContext::new(
        config,
        parts.terminal.clone(),
        Box::new(parts.filesystem.clone()),
        Box::new(ReverseHostValidator::new()),
        Box::new(parts.logfiles.clone()),
    );
    (Arc::new(context), parts)
}
