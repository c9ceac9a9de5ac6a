//! Command to show the parent of a path.

use crate::error::CliError;
use crate::utils::{format_path, load_factory, parse_path, GlobalOptions};
use clap::Args;

/// Show the parent of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to show
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Number of levels to walk up
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub levels: u32,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let mut path = parse_path(&factory, &self.path)?;

        for _ in 0..self.levels {
            path = path.parent()?;
        }

        println!("{}", format_path(&path, config.output_format())?);
        Ok(())
    }
}
