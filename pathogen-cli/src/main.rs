//! Main entry point for the pathogen CLI.
//!
//! Commands parse paths with the configured grammar and print derived
//! paths or reports:
//! - `inspect`: Show everything known about a path
//! - `normalize`, `parent`, `join`: Derive new paths
//! - `resolve`, `relative-to`, `relate`: Compare paths

use clap::Parser;
use pathogen_cli::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let global = cli.global_options();

    let logger = pathogen::init_logger(global.verbose, global.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("could not install logger: {e}"));
    }

    let result = match cli.command {
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Parent(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Relate(cmd) => cmd.execute(&global),
        Command::RelativeTo(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
