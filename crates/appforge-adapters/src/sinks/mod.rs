//! Log sink adapters and logfile openers.

mod logfile;
mod memory;
mod terminal;

pub use logfile::{LocalLogfileOpener, LogfileSink};
pub use memory::{MemoryLogfileOpener, MemorySink};
pub use terminal::TerminalSink;

use appforge_core::{application::ApplicationError, error::ForgeError};

fn sink_error(reason: impl std::fmt::Display) -> ForgeError {
    ApplicationError::LogSink {
        reason: reason.to_string(),
    }
    .into()
}
