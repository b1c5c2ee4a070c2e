//! `appforge log` - write one line through a project's output router.

use std::sync::Arc;

use appforge_adapters::local_context;
use appforge_core::{
    application::Application, config::ForgeConfig, domain::layout::is_platform_name,
};
use chrono::{Local, SecondsFormat};
use tracing::{debug, instrument};

use crate::{
    cli::LogArgs,
    commands::resolve_dir,
    error::{CliError, CliResult},
};

/// Load the project, pick the logfile, write the line.
///
/// Loading resets `log/common.log`, so every invocation starts that file
/// afresh; platform logfiles are appended to.
#[instrument(skip_all, fields(platform = args.platform.as_deref()))]
pub fn execute(args: LogArgs, config: Arc<ForgeConfig>) -> CliResult<()> {
    let root = resolve_dir(args.dir)?;
    let mut app = Application::load(local_context(config), &root)?;

    if let Some(platform) = args.platform.as_deref() {
        check_platform(&app, platform)?;
        app.use_platform_logfile(platform)?;
        debug!(platform, "Platform logfile selected");
    }

    let line = if app.config().logging.timestamps {
        format!(
            "{} {}",
            Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            args.message
        )
    } else {
        args.message
    };

    app.log(&line)?;
    app.output().flush()?;
    Ok(())
}

/// A platform name must be a plain file stem and, when `platforms.known` is
/// set, one of its entries.
fn check_platform(app: &Application, platform: &str) -> CliResult<()> {
    if !is_platform_name(platform) {
        return Err(CliError::InvalidInput {
            message: format!(
                "platform '{platform}' may only contain letters, digits, '-' and '_'"
            ),
        });
    }

    let platforms = &app.config().platforms;
    if !platforms.accepts(platform) {
        return Err(CliError::UnknownPlatform {
            platform: platform.to_owned(),
            known: platforms.known.clone(),
        });
    }
    Ok(())
}
