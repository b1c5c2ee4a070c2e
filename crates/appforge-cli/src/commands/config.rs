//! `appforge config` - inspect configuration values.

use appforge_core::config::ForgeConfig;
use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: &ForgeConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(
                &config::active_path(global.config.as_ref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `platforms.known` in the loaded config.
fn get_config_value(config: &ForgeConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(unknown)?;

    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Object(_) => return Err(unknown()),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = ForgeConfig::default();
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "human");
        assert_eq!(get_config_value(&cfg, "logging.timestamps").unwrap(), "true");
    }

    #[test]
    fn get_list_key() {
        let mut cfg = ForgeConfig::default();
        cfg.platforms.known = vec!["android".into(), "ios".into()];
        assert_eq!(
            get_config_value(&cfg, "platforms.known").unwrap(),
            r#"["android","ios"]"#
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = ForgeConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_section_is_error() {
        let cfg = ForgeConfig::default();
        assert!(get_config_value(&cfg, "output").is_err());
    }
}
