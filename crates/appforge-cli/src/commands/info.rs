//! `appforge info` - load a project and describe it.

use std::path::PathBuf;
use std::sync::Arc;

use appforge_adapters::local_context;
use appforge_core::{application::Application, config::ForgeConfig};
use serde::Serialize;
use tracing::instrument;

use crate::{
    cli::{InfoArgs, OutputFormat},
    commands::resolve_dir,
    error::CliResult,
    output::OutputManager,
};

/// Serializable summary of a constructed project.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectReport {
    package_id: String,
    root: PathBuf,
    app: PathBuf,
    log: PathBuf,
    pkg: PathBuf,
    prj: PathBuf,
    common_log: PathBuf,
}

impl From<&Application> for ProjectReport {
    fn from(app: &Application) -> Self {
        Self {
            package_id: app.package_id().to_string(),
            root: app.root_path().to_path_buf(),
            app: app.app_path().to_path_buf(),
            log: app.log_path().to_path_buf(),
            pkg: app.pkg_path().to_path_buf(),
            prj: app.prj_path().to_path_buf(),
            common_log: app.layout().common_logfile(),
        }
    }
}

impl ProjectReport {
    /// Render as JSON or as aligned `label value` lines.
    pub(crate) fn show(&self, output: &OutputManager) -> CliResult<()> {
        if output.format() == OutputFormat::Json {
            output.json(self)?;
            return Ok(());
        }
        output.field("package id", &self.package_id)?;
        for (label, path) in [
            ("root", &self.root),
            ("app", &self.app),
            ("log", &self.log),
            ("pkg", &self.pkg),
            ("prj", &self.prj),
            ("common log", &self.common_log),
        ] {
            output.field(label, &path.display().to_string())?;
        }
        Ok(())
    }
}

/// Load the project rooted at `--dir` (or the current directory).
#[instrument(skip_all)]
pub fn execute(args: InfoArgs, config: Arc<ForgeConfig>, output: OutputManager) -> CliResult<()> {
    let root = resolve_dir(args.dir)?;
    let app = Application::load(local_context(config), &root)?;
    ProjectReport::from(&app).show(&output)
}
