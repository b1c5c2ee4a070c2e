//! Command handlers. Each one turns parsed arguments into core calls and
//! renders the result; no layout rules live here.

use std::path::PathBuf;

use crate::error::{CliResult, IntoCli, current_dir};

pub mod completions;
pub mod config;
pub mod info;
pub mod init;
pub mod log;
pub mod new;

/// Resolve a `--dir` argument to the absolute, normalized path the core
/// expects. Existing directories are canonicalised; anything else is made
/// absolute and left for the core to reject.
pub(crate) fn resolve_dir(dir: Option<PathBuf>) -> CliResult<PathBuf> {
    let cwd = current_dir()?;
    let Some(dir) = dir else {
        return Ok(cwd);
    };
    let absolute = if dir.is_absolute() { dir } else { cwd.join(dir) };
    if absolute.is_dir() {
        absolute
            .canonicalize()
            .with_cli_context(|| format!("Failed to resolve '{}'", absolute.display()))
    } else {
        Ok(absolute)
    }
}
