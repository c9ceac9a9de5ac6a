//! Environment variable handling for configuration overrides.
//!
//! This module reads the `PATHOGEN_*` environment variables, which take
//! precedence over configuration files.

use crate::config::schema::{Config, PlatformChoice};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::Drive;
use std::env;

/// Selects the platform grammar (`generic`, `windows`, `native`).
pub const PLATFORM_ENV: &str = "PATHOGEN_PLATFORM";
/// Selects the default Windows drive letter.
pub const DEFAULT_DRIVE_ENV: &str = "PATHOGEN_DEFAULT_DRIVE";
/// Selects the output format (`text`, `json`, `yaml`).
pub const OUTPUT_FORMAT_ENV: &str = "PATHOGEN_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathogen::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if its value
    /// cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::read(PLATFORM_ENV) {
            let platform = value
                .parse::<PlatformChoice>()
                .map_err(|message| Self::invalid(PLATFORM_ENV, message))?;
            config.platform = Some(platform);
        }

        if let Some(value) = Self::read(DEFAULT_DRIVE_ENV) {
            let drive = value
                .parse::<Drive>()
                .map_err(|e| Self::invalid(DEFAULT_DRIVE_ENV, e.to_string()))?;
            config.default_drive = Some(drive);
        }

        if let Some(value) = Self::read(OUTPUT_FORMAT_ENV) {
            let format = value
                .parse::<OutputFormat>()
                .map_err(|message| Self::invalid(OUTPUT_FORMAT_ENV, message))?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn invalid(name: &str, message: String) -> Error {
        Error::Validation {
            field: name.into(),
            message,
        }
    }
}
