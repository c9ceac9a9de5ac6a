//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{format_path, load_factory, parse_path, GlobalOptions};
use clap::Args;

/// Resolve `.` and `..` atoms without touching the filesystem.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Drop any trailing separator from the result
    #[arg(long)]
    pub strip_trailing: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let mut path = parse_path(&factory, &self.path)?.normalize();
        if self.strip_trailing {
            path = path.strip_trailing_slash();
        }

        println!("{}", format_path(&path, config.output_format())?);
        Ok(())
    }
}
