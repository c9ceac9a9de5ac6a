//! Build script for pathogen-cli.
//!
//! Generates the `pathogen.1` man page into `OUT_DIR` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathogen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, inspect and derive paths")
        .long_about(
            "Command-line tool for platform-aware path arithmetic on Unix-style and Windows paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Path grammar to use")
                .value_parser(["native", "generic", "windows"])
                .global(true),
        )
        .arg(
            Arg::new("drive")
                .long("drive")
                .help("Default drive for absolute Windows paths built from atoms")
                .value_name("LETTER")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("PATHOGEN_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show everything known about a path")
                .long_about("Print the atoms, name parts and normalized form of a path"),
            Command::new("normalize")
                .about("Resolve `.` and `..` atoms")
                .long_about("Normalize a path lexically without touching the filesystem"),
            Command::new("join")
                .about("Append relative paths to a base path")
                .long_about("Join one or more relative paths onto a base path, in order"),
            Command::new("parent")
                .about("Show the parent of a path")
                .long_about("Walk one or more levels up from a path"),
            Command::new("resolve")
                .about("Resolve a path against an absolute base")
                .long_about("Return absolute paths unchanged and join relative ones onto the base"),
            Command::new("relate")
                .about("Show how two paths relate")
                .long_about("Report whether one path is an ancestor, descendant or the same as another"),
            Command::new("relative-to")
                .about("Express a path relative to a base")
                .long_about("Compute the relative path leading from an absolute base to a path"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathogen configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathogen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
