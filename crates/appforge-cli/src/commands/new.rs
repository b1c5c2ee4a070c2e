//! Implementation of the `appforge new` command.
//!
//! Responsibility: resolve the base directory, confirm with the user, call
//! the core `create` branch and display the resulting layout.

use std::path::Path;
use std::sync::Arc;

use appforge_adapters::{local_context, memory_context};
use appforge_core::{application::Application, config::ForgeConfig};
use tracing::{debug, info, instrument};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    commands::{info::ProjectReport, resolve_dir},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `appforge new` command.
///
/// Dispatch sequence:
/// 1. Resolve `--dir` (default: current directory)
/// 2. Confirm with user unless `--yes`, `--quiet` or `--dry-run`
/// 3. Create the project, in memory for `--dry-run`
/// 4. Print the layout
#[instrument(skip_all, fields(package_id = %args.package_id))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: Arc<ForgeConfig>,
    output: OutputManager,
) -> CliResult<()> {
    let base = resolve_dir(args.dir)?;
    let root = base.join(&args.package_id);
    debug!(base = %base.display(), "Base directory resolved");

    if !global.quiet && !args.yes && !args.dry_run && !confirm(&root)? {
        return Err(CliError::Cancelled);
    }

    if args.dry_run {
        let (context, parts) = memory_context(config);
        // Mirror what is on disk so the dry run fails where the real one would.
        for existing in [&base, &root] {
            if existing.is_dir() {
                parts.filesystem.mkdir_all(existing);
            }
        }

        let app = Application::create(context, &base, &args.package_id)?;
        if output.format() != OutputFormat::Json {
            output.info(&format!("Dry run: would create {}", root.display()))?;
        }
        return ProjectReport::from(&app).show(&output);
    }

    let app = Application::create(local_context(config), &base, &args.package_id)?;
    info!(root = %app.root_path().display(), "Project created");

    if output.format() == OutputFormat::Json {
        return ProjectReport::from(&app).show(&output);
    }
    output.success(&format!("Created {}", app.package_id()))?;
    ProjectReport::from(&app).show(&output)?;
    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", app.root_path().display()))?;
        output.print("  appforge info")?;
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(root: &Path) -> CliResult<bool> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("Create {}?", root.display()))
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e.into(),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_root: &Path) -> CliResult<bool> {
    Ok(true)
}
