//! Application - identity and lifecycle of one generated project.
//!
//! Construction is a two-mode protocol converging on one validated state:
//!
//! 1. Validate the working path (absolute, normalized, existing directory)
//! 2. Branch A, `create`: validate the supplied id, refuse an existing root,
//!    scaffold the five directories under the working path
//! 3. Branch B, `load`: derive the id from the working path's leaf and use
//!    its parent as the base. The working path is the project root here,
//!    not a base directory.
//! 4. Re-check that all five directories exist
//! 5. Reset `log/common.log` and build the output router

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        AppContext, ApplicationError, DirectoryValidator, OutputRouter, ProjectScaffolder,
        ports::{LogSink, SinkKind},
    },
    config::ForgeConfig,
    domain::{DomainError, PackageId, PathLayout, layout::is_normalized_absolute},
    error::ForgeResult,
};

/// A constructed, validated project.
///
/// Paths and the common logfile are fixed at construction. Only the platform
/// logfile override changes afterwards.
pub struct Application {
    context: Arc<AppContext>,
    package_id: PackageId,
    layout: PathLayout,
    logfile_output: Arc<dyn LogSink>,
    platform_logfile_output: Option<Arc<dyn LogSink>>,
    output: OutputRouter,
}

impl Application {
    /// Create a new project when `package_id` is given, otherwise load the
    /// project whose root is `cwd`.
    ///
    /// Note the asymmetry: with an id, `cwd` is the directory the project is
    /// created *in*; without one, `cwd` must be the project root itself.
    ///
    /// `cwd` must already be in lexical normal form, compared byte for byte:
    /// a trailing separator (`/work/`), `.`/`..` components and repeated
    /// separators are all `InvalidPath`, even though they name the same
    /// directory. Callers holding user input should canonicalise first.
    pub fn open(
        context: Arc<AppContext>,
        cwd: impl AsRef<Path>,
        package_id: Option<&str>,
    ) -> ForgeResult<Self> {
        match package_id {
            Some(id) => Self::create(context, cwd, id),
            None => Self::load(context, cwd),
        }
    }

    /// Branch A: create `cwd/<package_id>/{app,log,pkg,prj}`.
    ///
    /// `cwd` follows the strict normal-form rule described on [`Self::open`];
    /// `/work/` is rejected where `/work` is accepted.
    #[instrument(skip_all, fields(cwd = %cwd.as_ref().display(), package_id = %package_id))]
    pub fn create(
        context: Arc<AppContext>,
        cwd: impl AsRef<Path>,
        package_id: &str,
    ) -> ForgeResult<Self> {
        let cwd = cwd.as_ref();
        check_working_path(&context, cwd)?;

        let id = context
            .validator()
            .validate(package_id)?
            .ok_or_else(|| DomainError::InvalidPackageId {
                candidate: package_id.to_owned(),
                reason: "not a reverse-host identifier".into(),
            })?;

        let layout = PathLayout::new(cwd, &id);
        ProjectScaffolder::new(context.filesystem()).create_project(&layout)?;

        info!(root = %layout.root().display(), "Project created");
        Self::finish(context, id, layout)
    }

    /// Branch B: load the project whose root directory is `cwd`.
    ///
    /// Same normal-form rule as [`Self::open`], so no trailing separator.
    #[instrument(skip_all, fields(cwd = %cwd.as_ref().display()))]
    pub fn load(context: Arc<AppContext>, cwd: impl AsRef<Path>) -> ForgeResult<Self> {
        let cwd = cwd.as_ref();
        check_working_path(&context, cwd)?;

        let (candidate, base) = PackageId::candidate_from_dir(cwd)
            .zip(cwd.parent())
            .ok_or_else(|| ApplicationError::invalid_path(cwd, "not a project toplevel"))?;

        let id = context
            .validator()
            .validate(candidate)?
            .ok_or_else(|| ApplicationError::invalid_path(cwd, "not a project toplevel"))?;

        let layout = PathLayout::new(base, &id);
        debug!(package_id = %id, "Derived package id from working path");
        Self::finish(context, id, layout)
    }

    /// Shared tail of both branches: post-condition check, logging bootstrap.
    fn finish(
        context: Arc<AppContext>,
        package_id: PackageId,
        layout: PathLayout,
    ) -> ForgeResult<Self> {
        let missing = DirectoryValidator::new(context.filesystem()).missing(layout.directories());
        if let Some(first) = missing.first() {
            warn!(missing = missing.len(), "Project layout incomplete");
            return Err(ApplicationError::invalid_path(
                first.as_path(),
                "failed to load, invalid path",
            )
            .into());
        }

        let common_log = layout.common_logfile();
        let filesystem = context.filesystem();
        filesystem.remove_file_if_exists(&common_log)?;
        filesystem.create_file(&common_log)?;

        let logfile_output = context.logfiles().open(&common_log)?;
        let output =
            OutputRouter::new(Arc::clone(context.terminal()), Arc::clone(&logfile_output));

        info!(package_id = %package_id, root = %layout.root().display(), "Application ready");
        Ok(Self {
            context,
            package_id,
            layout,
            logfile_output,
            platform_logfile_output: None,
            output,
        })
    }

    // ── Read-only accessors ────────────────────────────────────────────────

    pub fn package_id(&self) -> &PackageId {
        &self.package_id
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    pub fn root_path(&self) -> &Path {
        self.layout.root()
    }

    pub fn app_path(&self) -> &Path {
        self.layout.app()
    }

    pub fn log_path(&self) -> &Path {
        self.layout.log()
    }

    pub fn pkg_path(&self) -> &Path {
        self.layout.pkg()
    }

    pub fn prj_path(&self) -> &Path {
        self.layout.prj()
    }

    /// Path of the per-platform logfile for `platform`, always a direct
    /// child of `log/`.
    ///
    /// A name outside `[A-Za-z0-9_-]+` is `InvalidPath`.
    pub fn platform_logfile_path(&self, platform: &str) -> ForgeResult<PathBuf> {
        self.layout.platform_logfile(platform).ok_or_else(|| {
            ApplicationError::invalid_path(
                self.layout.log().join(platform),
                "platform name may only contain letters, digits, '-' and '_'",
            )
            .into()
        })
    }

    /// The fan-out router (terminal + active logfile).
    pub fn output(&self) -> &OutputRouter {
        &self.output
    }

    /// The common logfile sink created at construction.
    pub fn logfile_output(&self) -> &Arc<dyn LogSink> {
        &self.logfile_output
    }

    /// Shared configuration, read through the context on every call.
    pub fn config(&self) -> &ForgeConfig {
        self.context.config()
    }

    pub fn platform_logfile_output(&self) -> Option<&Arc<dyn LogSink>> {
        self.platform_logfile_output.as_ref()
    }

    // ── Guarded writes ─────────────────────────────────────────────────────

    /// Route logfile output to `sink`, or back to the common logfile on `None`.
    ///
    /// Only logfile-kind sinks are accepted; anything else is `IllegalAccess`
    /// and leaves the routing untouched.
    pub fn set_platform_logfile_output(
        &mut self,
        sink: Option<Arc<dyn LogSink>>,
    ) -> ForgeResult<()> {
        match sink {
            Some(sink) if sink.kind() == SinkKind::Logfile => {
                debug!(location = ?sink.location(), "Routing to platform logfile");
                self.output.redirect(Arc::clone(&sink));
                self.platform_logfile_output = Some(sink);
            }
            Some(sink) => {
                return Err(ApplicationError::IllegalAccess {
                    property: "platform_logfile_output",
                    reason: format!("expected a logfile sink, got {:?}", sink.kind()),
                }
                .into());
            }
            None => {
                debug!("Routing back to common logfile");
                self.output.redirect(Arc::clone(&self.logfile_output));
                self.platform_logfile_output = None;
            }
        }
        Ok(())
    }

    /// Open `log/<platform>.log` and route logfile output to it.
    ///
    /// A rejected name opens nothing and leaves the routing untouched.
    pub fn use_platform_logfile(&mut self, platform: &str) -> ForgeResult<()> {
        let path = self.platform_logfile_path(platform)?;
        let sink = self.context.logfiles().open(&path)?;
        self.set_platform_logfile_output(Some(sink))
    }

    /// Always rejected: the router is owned by the application.
    pub fn set_output(&mut self, _output: OutputRouter) -> ForgeResult<()> {
        Err(ApplicationError::read_only("output").into())
    }

    /// Always rejected: configuration belongs to the shared context.
    pub fn set_config(&mut self, _config: ForgeConfig) -> ForgeResult<()> {
        Err(ApplicationError::read_only("config").into())
    }

    /// Write one line through the router.
    pub fn log(&self, line: &str) -> ForgeResult<()> {
        self.output.write_line(line)
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("package_id", &self.package_id)
            .field("layout", &self.layout)
            .field("output", &self.output)
            .field(
                "platform_logfile_output",
                &self.platform_logfile_output.as_ref().map(|s| s.location()),
            )
            .finish_non_exhaustive()
    }
}

/// The working path must be absolute, already normalized, and a directory.
fn check_working_path(context: &AppContext, cwd: &Path) -> ForgeResult<()> {
    if !is_normalized_absolute(cwd) {
        return Err(
            ApplicationError::invalid_path(cwd, "must be an absolute, normalized path").into(),
        );
    }
    if !context.filesystem().is_dir(cwd) {
        return Err(ApplicationError::invalid_path(cwd, "not an existing directory").into());
    }
    Ok(())
}
