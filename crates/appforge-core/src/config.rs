//! Shared configuration model.
//!
//! [`ForgeConfig`] is plain data. The CLI loads it once at startup (file,
//! environment, defaults) and hands it to the core inside an
//! [`AppContext`](crate::application::AppContext); the core never reads
//! files or environment variables itself.

use serde::{Deserialize, Serialize};

/// Process-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Platform settings.
    pub platforms: PlatformConfig,
    /// Project log routing settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Platforms that may own a platform logfile. Empty means "any".
    pub known: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Prefix lines written by `appforge log` with an RFC 3339 timestamp.
    pub timestamps: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            timestamps: true,
        }
    }
}

impl PlatformConfig {
    /// `true` if `platform` may be used for a platform logfile.
    pub fn accepts(&self, platform: &str) -> bool {
        self.known.is_empty() || self.known.iter().any(|p| p == platform)
    }
}
