//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, InspectCommand, JoinCommand, NormalizeCommand, ParentCommand,
    RelateCommand, RelativeToCommand, ResolveCommand, ValidateCommand,
};
use crate::utils::{parse_drive, GlobalOptions};
use clap::{Parser, Subcommand};
use pathogen::config::PlatformChoice;
use pathogen::{Drive, OutputFormat};
use std::path::PathBuf;

/// Command-line tool for platform-aware path arithmetic.
#[derive(Parser)]
#[command(name = "pathogen")]
#[command(version, about = "Parse, inspect and derive paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to use
    #[arg(long, value_enum, global = true)]
    pub platform: Option<PlatformChoice>,

    /// Default drive for absolute Windows paths built from atoms
    #[arg(long, value_name = "LETTER", value_parser = parse_drive, global = true)]
    pub drive: Option<Drive>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PATHOGEN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Collect the global options shared by all commands.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            platform: self.platform,
            drive: self.drive,
            format: self.format,
            config_dir: self.config_dir.clone(),
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show everything known about a path
    Inspect(InspectCommand),

    /// Resolve `.` and `..` atoms
    Normalize(NormalizeCommand),

    /// Append relative paths to a base path
    Join(JoinCommand),

    /// Show the parent of a path
    Parent(ParentCommand),

    /// Resolve a path against an absolute base
    Resolve(ResolveCommand),

    /// Show how two paths relate
    Relate(RelateCommand),

    /// Express a path relative to a base
    RelativeTo(RelativeToCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
