//! Package identifier value object.
//!
//! A `PackageId` is only ever produced by a
//! [`PackageIdValidator`](crate::application::ports::PackageIdValidator);
//! the syntax rules live behind that port, not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A validated reverse-host identifier such as `com.example.foo`.
///
/// Doubles as the name of the project's root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Wrap an identifier that a validator has already accepted.
    pub fn from_validated(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment of `path`, the candidate id in "load" mode.
    ///
    /// Returns `None` for `/` or paths whose leaf is not valid UTF-8.
    pub fn candidate_from_dir(path: &Path) -> Option<&str> {
        path.file_name().and_then(|name| name.to_str())
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for PackageId {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
