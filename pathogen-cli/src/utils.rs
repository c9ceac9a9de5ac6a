//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading, path parsing and output.

use crate::error::CliError;
use pathogen::config::PlatformChoice;
use pathogen::{
    Config, ConfigBuilder, Drive, OutputFormat, OutputFormatter, PathFactory, PathReport,
    PlatformPathFactory, PurePath,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Platform grammar override.
    pub platform: Option<PlatformChoice>,

    /// Default drive override.
    pub drive: Option<Drive>,

    /// Output format override.
    pub format: Option<OutputFormat>,

    /// Directory holding the user configuration.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(Config {
        platform: global.platform,
        default_drive: global.drive,
        output_format: global.format,
    });

    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration and build its path factory.
pub fn load_factory(global: &GlobalOptions) -> Result<(Config, PlatformPathFactory), CliError> {
    let config = load_configuration(global)?;
    let factory = config.factory();
    Ok((config, factory))
}

/// Parse `input` with `factory`.
pub fn parse_path(factory: &impl PathFactory, input: &str) -> Result<PurePath, CliError> {
    factory.create(input).map_err(CliError::from)
}

/// Parse `input` and require a relative path.
pub fn parse_relative(factory: &impl PathFactory, input: &str) -> Result<PurePath, CliError> {
    let path = parse_path(factory, input)?;
    if path.is_absolute() {
        return Err(CliError::InvalidArguments(format!(
            "expected a relative path, got '{input}'"
        )));
    }
    Ok(path)
}

/// Parse a drive letter argument.
pub fn parse_drive(value: &str) -> Result<Drive, String> {
    value.parse::<Drive>().map_err(|e| e.to_string())
}

/// Render a derived path.
///
/// Text output is the bare path string; structured formats get the full
/// report.
pub fn format_path(path: &PurePath, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(path.to_string()),
        OutputFormat::Json | OutputFormat::Yaml => format_report(path, format),
    }
}

/// Render the full report for `path`.
pub fn format_report(path: &PurePath, format: OutputFormat) -> Result<String, CliError> {
    let report = PathReport::from(path);
    format
        .create_formatter()
        .format(&report)
        .map_err(CliError::from)
}
