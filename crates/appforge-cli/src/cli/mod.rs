//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appforge",
    bin_name = "appforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create and load generated-application project trees",
    long_about = "AppForge lays out a project as <base>/<package-id>/{app,log,pkg,prj} \
                  and routes its output to the terminal and a logfile.",
    after_help = "EXAMPLES:\n\
        \x20 appforge new com.example.foo --dir /work\n\
        \x20 appforge info --dir /work/com.example.foo\n\
        \x20 appforge log \"build started\" --platform android\n\
        \x20 appforge completions bash > /usr/share/bash-completion/completions/appforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project tree.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 appforge new com.example.foo\n\
            \x20 appforge new com.example.foo --dir /work --yes\n\
            \x20 appforge new com.example.foo --dry-run"
    )]
    New(NewArgs),

    /// Load an existing project and describe it.
    #[command(
        about = "Show a project's package id and paths",
        after_help = "EXAMPLES:\n\
            \x20 appforge info\n\
            \x20 appforge info --dir /work/com.example.foo --output-format json"
    )]
    Info(InfoArgs),

    /// Write a line through a project's output router.
    #[command(
        about = "Write a line to the terminal and the project logfile",
        after_help = "EXAMPLES:\n\
            \x20 appforge log \"packaging\"\n\
            \x20 appforge log \"gradle done\" --platform android"
    )]
    Log(LogArgs),

    /// Initialise an AppForge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 appforge init\n\
            \x20 appforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appforge completions bash > ~/.local/share/bash-completion/completions/appforge\n\
            \x20 appforge completions zsh  > ~/.zfunc/_appforge\n\
            \x20 appforge completions fish > ~/.config/fish/completions/appforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the AppForge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 appforge config get output.format\n\
            \x20 appforge config list\n\
            \x20 appforge config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `appforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Reverse-host package id, e.g. `com.example.foo`.
    #[arg(value_name = "PACKAGE_ID", help = "Package id of the new project")]
    pub package_id: String,

    /// Directory to create the project in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Base directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── info ──────────────────────────────────────────────────────────────────────

/// Arguments for `appforge info`.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Project root to load.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── log ───────────────────────────────────────────────────────────────────────

/// Arguments for `appforge log`.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Line to write.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Project root to load.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Route the line to `log/<NAME>.log` instead of `log/common.log`.
    #[arg(
        short = 'p',
        long = "platform",
        value_name = "NAME",
        help = "Write to the platform logfile"
    )]
    pub platform: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `appforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `appforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
