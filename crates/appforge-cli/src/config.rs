//! Configuration loading.
//!
//! The model lives in `appforge-core` as [`ForgeConfig`]; this module only
//! decides where the values come from. Loaded once at startup and shared
//! with the core through `AppContext`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `APPFORGE_*` environment variables, `__` between nested keys
//!    (`APPFORGE_OUTPUT__FORMAT=json`, `APPFORGE_PLATFORMS__KNOWN=android,ios`)
//! 3. Config file: `--config FILE` (must exist) or the platform config dir
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use appforge_core::config::ForgeConfig;
use ::config::{Config, Environment, File, FileFormat};
use tracing::debug;

const ENV_PREFIX: &str = "APPFORGE";

/// Load configuration from defaults, file and environment.
///
/// An explicit `--config FILE` must exist when `require_file` is set; the
/// default location is always optional.
pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<ForgeConfig> {
    let (path, required) = match config_file {
        Some(path) => (path.clone(), require_file),
        None => (config_path(), false),
    };
    load_from(&path, required, environment())
}

/// Path of the configuration file in effect: `--config FILE` when given,
/// otherwise the platform default.
pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
    config_file.cloned().unwrap_or_else(config_path)
}

/// Path to the default configuration file.
///
/// Uses `directories::ProjectDirs` for cross-platform correctness,
/// falling back to `.appforge.toml` in the current directory.
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "appforge", "appforge")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".appforge.toml"))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("platforms.known")
}

fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<ForgeConfig> {
    debug!(path = %path.display(), required, "Loading configuration");

    let settings = Config::builder()
        .add_source(
            Config::try_from(&ForgeConfig::default())
                .context("Failed to build default configuration")?,
        )
        .add_source(File::from(path).format(FileFormat::Toml).required(required))
        .add_source(env)
        .build()
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

    settings
        .try_deserialize()
        .context("Configuration has an unexpected shape")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = load_from(&temp.path().join("absent.toml"), false, env(&[])).unwrap();
        assert_eq!(cfg, ForgeConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(load_from(&temp.path().join("absent.toml"), true, env(&[])).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"json\"\n\n[platforms]\nknown = [\"android\"]\n",
        )
        .unwrap();

        let cfg = load_from(&path, true, env(&[])).unwrap();

        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.platforms.known, vec!["android".to_string()]);
        assert!(cfg.logging.timestamps);
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[logging]\ntimestamps = true\n").unwrap();

        let cfg = load_from(
            &path,
            true,
            env(&[
                ("APPFORGE_LOGGING__TIMESTAMPS", "false"),
                ("APPFORGE_PLATFORMS__KNOWN", "android,ios"),
            ]),
        )
        .unwrap();

        assert!(!cfg.logging.timestamps);
        assert_eq!(cfg.platforms.known, vec!["android", "ios"]);
    }

    #[test]
    fn active_path_prefers_flag() {
        let flag = PathBuf::from("/etc/appforge.toml");
        assert_eq!(active_path(Some(&flag)), flag);
        assert_eq!(active_path(None), config_path());
    }
}
