//! Creates the five canonical directories of a brand-new project.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::PathLayout,
    error::ForgeResult,
};

/// Materializes a [`PathLayout`] on disk.
pub struct ProjectScaffolder<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ProjectScaffolder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create `root`, then `app`, `log`, `pkg`, `prj`.
    ///
    /// Fails with `PathConflict` if `root` is already a directory. A failing
    /// `create_dir` stops the sequence; directories made before it stay.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn create_project(&self, layout: &PathLayout) -> ForgeResult<()> {
        if self.filesystem.is_dir(layout.root()) {
            return Err(ApplicationError::PathConflict {
                path: layout.root().to_path_buf(),
            }
            .into());
        }

        for dir in layout.directories() {
            debug!(path = %dir.display(), "Creating directory");
            self.filesystem.create_dir(dir)?;
        }

        info!("Project directories created");
        Ok(())
    }
}
