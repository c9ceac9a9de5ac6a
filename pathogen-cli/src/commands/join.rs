//! Command to join relative paths onto a base path.

use crate::error::CliError;
use crate::utils::{format_path, load_factory, parse_path, parse_relative, GlobalOptions};
use clap::Args;

/// Append one or more relative paths to a base path.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Relative paths to append, in order
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Normalize the joined path
    #[arg(long)]
    pub normalize: bool,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let mut joined = parse_path(&factory, &self.base)?;

        for input in &self.paths {
            let relative = parse_relative(&factory, input)?;
            joined = joined.join(&relative)?;
        }

        if self.normalize {
            joined = joined.normalize();
        }

        println!("{}", format_path(&joined, config.output_format())?);
        Ok(())
    }
}
