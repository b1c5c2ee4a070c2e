//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use appforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle after boxing one
/// into an `AppContext`.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create `path` and every missing ancestor (testing and seeding helper).
    pub fn mkdir_all(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Remove a directory and everything below it (testing helper).
    pub fn remove_dir_all(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut inner = self.write();
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// Write a file without checking its parent (testing helper).
    pub fn put_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.write();
        inner.files.insert(path.into(), content.into());
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let inner = self.read();
        let mut dirs: Vec<_> = inner.directories.iter().cloned().collect();
        dirs.sort();
        dirs
    }

    // A panic mid-operation leaves the sets consistent, so a poisoned lock
    // is recovered rather than reported.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    fn create_dir(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write();

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "File exists".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn remove_file_if_exists(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write();
        inner.files.remove(path);
        Ok(())
    }

    fn create_file(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), String::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        fs.mkdir_all("/work");

        assert!(fs.create_dir(Path::new("/work/a/b")).is_err());
        fs.create_dir(Path::new("/work/a")).unwrap();
        fs.create_dir(Path::new("/work/a/b")).unwrap();
        assert!(fs.is_dir(Path::new("/work/a/b")));
    }

    #[test]
    fn create_dir_refuses_existing() {
        let fs = MemoryFilesystem::new();
        fs.mkdir_all("/work");
        assert!(fs.create_dir(Path::new("/work")).is_err());
    }

    #[test]
    fn create_file_truncates() {
        let fs = MemoryFilesystem::new();
        fs.mkdir_all("/work/log");
        fs.put_file("/work/log/common.log", "previous run");

        fs.create_file(Path::new("/work/log/common.log")).unwrap();

        assert_eq!(
            fs.read_file(Path::new("/work/log/common.log")).as_deref(),
            Some("")
        );
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::new();
        fs.mkdir_all("/work/a/b");
        fs.remove_dir_all("/work/a");
        assert!(fs.is_dir(Path::new("/work")));
        assert!(!fs.is_dir(Path::new("/work/a/b")));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let fs = MemoryFilesystem::new();
        fs.mkdir_all("/work");

        let poisoner = fs.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("panic while holding the lock");
        })
        .join();
        assert!(fs.inner.is_poisoned());

        assert!(fs.is_dir(Path::new("/work")));
        fs.create_dir(Path::new("/work/a")).unwrap();
        fs.create_file(Path::new("/work/a/x.log")).unwrap();
        assert_eq!(fs.read_file(Path::new("/work/a/x.log")).as_deref(), Some(""));
        assert!(fs.list_directories().contains(&PathBuf::from("/work/a")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.mkdir_all("/x");
        assert!(other.is_dir(Path::new("/x")));
    }
}
