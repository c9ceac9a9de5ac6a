//! Command to resolve a path against a base.

use crate::error::CliError;
use crate::utils::{format_path, load_factory, parse_path, GlobalOptions};
use clap::Args;
use pathogen::PathResolver;

/// Resolve a path against an absolute base path.
///
/// Absolute paths are returned as they are; relative paths are joined onto
/// the base.
#[derive(Args)]
pub struct ResolveCommand {
    /// Absolute base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Keep `.` and `..` atoms in the result
    #[arg(long)]
    pub no_normalize: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let base = parse_path(&factory, &self.base)?;
        let path = parse_path(&factory, &self.path)?;

        let resolver = PathResolver::new().with_normalization(!self.no_normalize);
        let resolved = resolver.resolve(&base, &path)?;

        println!("{}", format_path(&resolved, config.output_format())?);
        Ok(())
    }
}
