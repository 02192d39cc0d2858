//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "seatbook";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if global.logger.shows_status() {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Instructions for installing the generated script.
fn install_hint(shell: Shell) -> Vec<String> {
    let target = match shell {
        Shell::Bash => "~/.local/share/bash-completion/completions/seatbook",
        Shell::Zsh => "~/.zsh/completions/_seatbook",
        Shell::Fish => "~/.config/fish/completions/seatbook.fish",
        Shell::PowerShell => "$PROFILE",
        _ => return Vec::new(),
    };
    vec![
        format!("Generating {shell} completion script"),
        "Install it with:".to_string(),
        format!("  {BIN_NAME} completions {shell} > {target}"),
    ]
}
