//! Process-wide context shared by every `Application` in a run.

use std::sync::Arc;

use crate::application::ports::{Filesystem, LogSink, LogfileOpener, PackageIdValidator};
use crate::config::ForgeConfig;

/// Everything an [`Application`](super::Application) needs from outside.
///
/// Built once at startup and shared behind an `Arc`. The application keeps
/// the `Arc` and reads configuration through it on every access.
pub struct AppContext {
    config: Arc<ForgeConfig>,
    terminal: Arc<dyn LogSink>,
    filesystem: Box<dyn Filesystem>,
    validator: Box<dyn PackageIdValidator>,
    logfiles: Box<dyn LogfileOpener>,
}

impl AppContext {
    pub fn new(
        config: Arc<ForgeConfig>,
        terminal: Arc<dyn LogSink>,
        filesystem: Box<dyn Filesystem>,
        validator: Box<dyn PackageIdValidator>,
        logfiles: Box<dyn LogfileOpener>,
    ) -> Self {
        Self {
            config,
            terminal,
            filesystem,
            validator,
            logfiles,
        }
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn terminal(&self) -> &Arc<dyn LogSink> {
        &self.terminal
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn validator(&self) -> &dyn PackageIdValidator {
        self.validator.as_ref()
    }

    pub fn logfiles(&self) -> &dyn LogfileOpener {
        self.logfiles.as_ref()
    }
}
