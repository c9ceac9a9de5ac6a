//! Library exports for pathogen-cli.
//!
//! The binary and the integration tests share these modules.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
