//! Command to express a path relative to a base.

use crate::error::CliError;
use crate::utils::{format_path, load_factory, parse_path, GlobalOptions};
use clap::Args;

/// Express an absolute path relative to an absolute base.
#[derive(Args)]
pub struct RelativeToCommand {
    /// Absolute path to express
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base path
    #[arg(value_name = "BASE")]
    pub base: String,
}

impl RelativeToCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let path = parse_path(&factory, &self.path)?;
        let base = parse_path(&factory, &self.base)?;

        let relative = path.relative_to(&base)?;

        println!("{}", format_path(&relative, config.output_format())?);
        Ok(())
    }
}
