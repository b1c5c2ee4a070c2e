//! Process-wide terminal sink.

use std::sync::{Arc, OnceLock};

use appforge_core::{
    application::ports::{LogSink, SinkKind},
    error::ForgeResult,
};
use console::Term;

use super::sink_error;

static SHARED: OnceLock<Arc<TerminalSink>> = OnceLock::new();

/// Writes routed lines to stdout.
#[derive(Debug)]
pub struct TerminalSink {
    term: Term,
}

impl TerminalSink {
    /// The one terminal sink of this process, created on first use.
    pub fn shared() -> Arc<TerminalSink> {
        Arc::clone(SHARED.get_or_init(|| {
            Arc::new(TerminalSink {
                term: Term::stdout(),
            })
        }))
    }
}

impl LogSink for TerminalSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Terminal
    }

    fn write_line(&self, line: &str) -> ForgeResult<()> {
        self.term.write_line(line).map_err(sink_error)
    }

    fn flush(&self) -> ForgeResult<()> {
        self.term.flush().map_err(sink_error)
    }
}
