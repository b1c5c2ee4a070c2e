//! In-memory sinks for testing and dry runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use appforge_core::{
    application::ports::{LogSink, LogfileOpener, SinkKind},
    error::ForgeResult,
};

/// Records every line it receives.
///
/// A poisoned lock is recovered, never reported: the recorded lines stay
/// readable after a panicking writer.
#[derive(Debug)]
pub struct MemorySink {
    kind: SinkKind,
    location: Option<PathBuf>,
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// A stand-in for the terminal.
    pub fn terminal() -> Arc<Self> {
        Arc::new(Self {
            kind: SinkKind::Terminal,
            location: None,
            lines: Mutex::new(Vec::new()),
        })
    }

    /// A stand-in for a logfile at `path`.
    pub fn logfile(path: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            kind: SinkKind::Logfile,
            location: Some(path.into()),
            lines: Mutex::new(Vec::new()),
        })
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn kind(&self) -> SinkKind {
        self.kind
    }

    fn write_line(&self, line: &str) -> ForgeResult<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }

    fn flush(&self) -> ForgeResult<()> {
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }
}

/// Hands out [`MemorySink`]s and remembers the latest one per path.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogfileOpener {
    opened: Arc<Mutex<HashMap<PathBuf, Arc<MemorySink>>>>,
}

impl MemoryLogfileOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sink most recently opened for `path`.
    pub fn sink(&self, path: &Path) -> Option<Arc<MemorySink>> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }
}

impl LogfileOpener for MemoryLogfileOpener {
    fn open(&self, path: &Path) -> ForgeResult<Arc<dyn LogSink>> {
        let sink = MemorySink::logfile(path);
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), Arc::clone(&sink));
        Ok(sink as Arc<dyn LogSink>)
    }
}
