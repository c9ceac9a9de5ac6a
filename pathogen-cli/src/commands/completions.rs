//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "pathogen";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Enable with:");
                    eprintln!("#   eval \"$(pathogen completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("# Install with:");
                    eprintln!("#   pathogen completions zsh > ~/.zsh/completions/_pathogen");
                }
                Shell::Fish => {
                    eprintln!("# Enable with:");
                    eprintln!("#   pathogen completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("# Enable with:");
                    eprintln!("#   pathogen completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
