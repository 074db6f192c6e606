//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Name of the installed binary
const BIN_NAME: &str = "spray";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Where to put the script for `shell`, as comment lines.
fn install_hint(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "spray completions bash > ~/.local/share/bash-completion/completions/spray",
            "or in ~/.bashrc: eval \"$(spray completions bash)\"",
        ],
        Shell::Zsh => &[
            "spray completions zsh > ~/.zsh/completions/_spray",
            "(with ~/.zsh/completions in $fpath)",
        ],
        Shell::Fish => &["spray completions fish > ~/.config/fish/completions/spray.fish"],
        Shell::PowerShell => &["spray completions powershell | Out-String | Invoke-Expression"],
        _ => &[],
    }
}

impl CompletionsCommand {
    /// Write the completion script for this shell to `out`.
    fn render(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, out);
    }

    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
        }

        self.render(&mut io::stdout());
        Ok(())
    }
}
