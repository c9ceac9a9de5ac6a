//! Command to show everything known about a path.

use crate::error::CliError;
use crate::utils::{format_report, load_factory, parse_path, GlobalOptions};
use clap::Args;

/// Show the atoms, name parts and normalized form of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let path = parse_path(&factory, &self.path)?;

        println!("{}", format_report(&path, config.output_format())?);
        Ok(())
    }
}
