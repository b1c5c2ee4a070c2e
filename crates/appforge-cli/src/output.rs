//! Output management and formatting.
//!
//! Status messages for the person at the terminal. Lines that belong to a
//! project go through the project's own router instead.

use std::io::{self, IsTerminal};

use appforge_core::config::ForgeConfig;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// The `--output-format` flag wins over `output.format`; `auto` in either
    /// place resolves to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &ForgeConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        let is_tty = io::stdout().is_terminal();
        let resolved_format = match requested {
            OutputFormat::Auto if is_tty => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human
                || !is_tty,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `label: value` with the label dimmed.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {label:<12} {value}")
        } else {
            format!("  {:<12} {value}", label.dimmed())
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document. Printed even in quiet mode: it is the result,
    /// not chatter.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: format,
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::new(&args(true, OutputFormat::Plain), &ForgeConfig::default());
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn flag_beats_config_format() {
        let mut config = ForgeConfig::default();
        config.output.format = "json".into();

        let out = OutputManager::new(&args(false, OutputFormat::Plain), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut config = ForgeConfig::default();
        config.output.format = "json".into();

        let out = OutputManager::new(&args(false, OutputFormat::Auto), &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn json_is_written_in_quiet_mode() {
        let out = OutputManager::new(&args(true, OutputFormat::Json), &ForgeConfig::default());
        assert!(out.json(&serde_json::json!({ "ok": true })).is_ok());
    }
}
