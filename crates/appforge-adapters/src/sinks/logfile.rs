//! File-backed log sink.

use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use appforge_core::{
    application::ports::{LogSink, LogfileOpener, SinkKind},
    error::ForgeResult,
};
use tracing::debug;

use super::sink_error;
use crate::filesystem::map_io_error;

/// Appends lines to one file. Each line is flushed as it is written.
#[derive(Debug)]
pub struct LogfileSink {
    path: PathBuf,
    writer: Mutex<LineWriter<File>>,
}

impl LogfileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> ForgeResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| map_io_error(&path, e, "open logfile"))?;
        debug!(path = %path.display(), "Logfile opened");
        Ok(Self {
            path,
            writer: Mutex::new(LineWriter::new(file)),
        })
    }
}

impl LogSink for LogfileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Logfile
    }

    fn write_line(&self, line: &str) -> ForgeResult<()> {
        let mut writer = self.writer.lock().map_err(sink_error)?;
        writeln!(writer, "{line}").map_err(|e| map_io_error(&self.path, e, "write logfile"))
    }

    fn flush(&self) -> ForgeResult<()> {
        let mut writer = self.writer.lock().map_err(sink_error)?;
        writer
            .flush()
            .map_err(|e| map_io_error(&self.path, e, "flush logfile"))
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Opens [`LogfileSink`]s on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLogfileOpener;

impl LogfileOpener for LocalLogfileOpener {
    fn open(&self, path: &Path) -> ForgeResult<Arc<dyn LogSink>> {
        Ok(Arc::new(LogfileSink::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lines_are_appended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("common.log");
        std::fs::write(&path, "earlier\n").unwrap();

        let sink = LogfileSink::open(&path).unwrap();
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier\none\ntwo\n"
        );
    }

    #[test]
    fn opener_reports_location_and_kind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("android.log");

        let sink = LocalLogfileOpener.open(&path).unwrap();

        assert_eq!(sink.kind(), SinkKind::Logfile);
        assert_eq!(sink.location(), Some(path.as_path()));
        assert!(path.is_file());
    }

    #[test]
    fn open_in_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(LogfileSink::open(temp.path().join("nope").join("x.log")).is_err());
    }
}
