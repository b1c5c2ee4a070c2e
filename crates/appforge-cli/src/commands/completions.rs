//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "appforge";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    match args.shell {
        Shell::Bash => write_script(shells::Bash),
        Shell::Zsh => write_script(shells::Zsh),
        Shell::Fish => write_script(shells::Fish),
        Shell::PowerShell => write_script(shells::PowerShell),
        Shell::Elvish => write_script(shells::Elvish),
    }
    Ok(())
}

fn write_script(shell: impl Generator) {
    generate(shell, &mut Cli::command(), BIN_NAME, &mut std::io::stdout());
}
