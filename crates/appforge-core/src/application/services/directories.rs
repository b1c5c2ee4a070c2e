use std::path::{Path, PathBuf};

use crate::application::ports::Filesystem;

/// Existence checks over a set of directories.
///
/// Side-effect free; used for both pre- and post-conditions.
pub struct DirectoryValidator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryValidator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    pub fn is_directory(&self, path: &Path) -> bool {
        self.filesystem.is_dir(path)
    }

    /// Directories from `paths` that do not exist, in input order.
    pub fn missing<'p>(&self, paths: impl IntoIterator<Item = &'p Path>) -> Vec<PathBuf> {
        paths
            .into_iter()
            .filter(|p| !self.is_directory(p))
            .map(Path::to_path_buf)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn missing_keeps_input_order() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p == Path::new("/w/a.b") || p == Path::new("/w/a.b/log"));

        let validator = DirectoryValidator::new(&fs);
        let missing = validator.missing([
            Path::new("/w/a.b"),
            Path::new("/w/a.b/app"),
            Path::new("/w/a.b/log"),
            Path::new("/w/a.b/pkg"),
        ]);

        assert_eq!(
            missing,
            vec![PathBuf::from("/w/a.b/app"), PathBuf::from("/w/a.b/pkg")]
        );
    }

    #[test]
    fn nothing_missing_when_all_exist() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);

        let validator = DirectoryValidator::new(&fs);
        assert!(validator.missing([Path::new("/a"), Path::new("/b")]).is_empty());
    }
}
