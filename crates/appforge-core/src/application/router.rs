//! Fan-out output router.
//!
//! Every line goes to the terminal sink and to exactly one logfile sink.
//! The logfile half is swapped by [`Application`](super::Application) when a
//! platform logfile is set or cleared; nobody else can re-point it.

use std::fmt;
use std::sync::Arc;

use crate::application::ports::LogSink;
use crate::error::ForgeResult;

/// Writes each line to a fixed terminal sink and a swappable logfile sink.
pub struct OutputRouter {
    terminal: Arc<dyn LogSink>,
    logfile: Arc<dyn LogSink>,
}

impl OutputRouter {
    pub fn new(terminal: Arc<dyn LogSink>, logfile: Arc<dyn LogSink>) -> Self {
        Self { terminal, logfile }
    }

    /// The always-on primary sink.
    pub fn terminal(&self) -> &Arc<dyn LogSink> {
        &self.terminal
    }

    /// The currently active secondary (logfile) sink.
    pub fn logfile(&self) -> &Arc<dyn LogSink> {
        &self.logfile
    }

    /// `true` if `sink` is the active secondary sink (pointer identity).
    pub fn routes_to(&self, sink: &Arc<dyn LogSink>) -> bool {
        Arc::ptr_eq(&self.logfile, sink)
    }

    /// Write `line` to the terminal, then to the active logfile.
    ///
    /// Both sinks are attempted; the first failure is returned.
    pub fn write_line(&self, line: &str) -> ForgeResult<()> {
        let terminal = self.terminal.write_line(line);
        let logfile = self.logfile.write_line(line);
        terminal.and(logfile)
    }

    pub fn flush(&self) -> ForgeResult<()> {
        let terminal = self.terminal.flush();
        let logfile = self.logfile.flush();
        terminal.and(logfile)
    }

    /// Re-point the secondary sink.
    pub(crate) fn redirect(&mut self, logfile: Arc<dyn LogSink>) {
        self.logfile = logfile;
    }
}

impl fmt::Debug for OutputRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputRouter")
            .field("terminal", &self.terminal.kind())
            .field("logfile", &self.logfile.location())
            .finish()
    }
}
