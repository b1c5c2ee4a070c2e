//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use appforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn remove_file_if_exists(&self, path: &Path) -> ForgeResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove file")),
        }
    }

    fn create_file(&self, path: &Path) -> ForgeResult<()> {
        std::fs::File::create(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }
}

pub(crate) fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> appforge_core::error::ForgeError {
    use appforge_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let nested = temp.path().join("a").join("b");
        assert!(fs.create_dir(&nested).is_err());
        assert!(!fs.is_dir(&nested));

        fs.create_dir(&temp.path().join("a")).unwrap();
        fs.create_dir(&nested).unwrap();
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn create_dir_fails_when_present() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.create_dir(temp.path()).is_err());
    }

    #[test]
    fn remove_missing_file_is_ok() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.remove_file_if_exists(&temp.path().join("nope.log"))
            .unwrap();
    }

    #[test]
    fn create_file_truncates() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("common.log");
        std::fs::write(&file, "old run").unwrap();

        fs.create_file(&file).unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn file_is_not_a_dir() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("f");
        std::fs::write(&file, "").unwrap();
        assert!(!fs.is_dir(&file));
    }
}
