//! Canonical on-disk layout of one project.
//!
//! ```text
//! <base>/
//! └── <package-id>/      root
//!     ├── app/
//!     ├── log/
//!     │   └── common.log
//!     ├── pkg/
//!     └── prj/
//! ```

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::PackageId;

/// File name of the per-run logfile inside `log/`.
pub const COMMON_LOGFILE: &str = "common.log";

/// The five directories of a project, derived from a base directory and a
/// package id by joining path segments. No filesystem access happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLayout {
    root: PathBuf,
    app: PathBuf,
    log: PathBuf,
    pkg: PathBuf,
    prj: PathBuf,
}

impl PathLayout {
    pub fn new(base: impl AsRef<Path>, package_id: &PackageId) -> Self {
        let root = base.as_ref().join(package_id.as_str());
        Self {
            app: root.join("app"),
            log: root.join("log"),
            pkg: root.join("pkg"),
            prj: root.join("prj"),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app(&self) -> &Path {
        &self.app
    }

    pub fn log(&self) -> &Path {
        &self.log
    }

    pub fn pkg(&self) -> &Path {
        &self.pkg
    }

    pub fn prj(&self) -> &Path {
        &self.prj
    }

    /// All five directories, parents first. This is also the creation order.
    pub fn directories(&self) -> [&Path; 5] {
        [&self.root, &self.app, &self.log, &self.pkg, &self.prj]
    }

    /// `log/common.log`.
    pub fn common_logfile(&self) -> PathBuf {
        self.log.join(COMMON_LOGFILE)
    }

    /// Per-platform logfile, `log/<platform>.log`.
    ///
    /// `None` unless `platform` passes [`is_platform_name`], so the file can
    /// only ever be a direct child of `log/`.
    pub fn platform_logfile(&self, platform: &str) -> Option<PathBuf> {
        is_platform_name(platform).then(|| self.log.join(format!("{platform}.log")))
    }
}

/// A platform name is a non-empty run of ASCII letters, digits, `-` and `_`.
pub fn is_platform_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lexical normal form of `path`: drops `.` components, resolves `..`
/// against preceding components, collapses repeated separators and strips a
/// trailing separator. Never touches the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// `true` when `path` is non-empty, absolute and byte-for-byte equal to its
/// own [`normalize`]d form.
pub fn is_normalized_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.is_absolute()
        && normalize(path).as_os_str() == path.as_os_str()
}
