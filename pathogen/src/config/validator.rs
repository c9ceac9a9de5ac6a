//! Configuration validation.

use crate::config::schema::{Config, PlatformChoice};
use crate::error::{Error, Result};
use crate::path::Platform;

/// Validates a merged configuration.
///
/// Field values are already well-typed after deserialization, so only
/// combinations are checked here.
///
/// # Examples
///
/// ```
/// use pathogen::config::{Config, ConfigValidator, PlatformChoice};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config = Config {
///     platform: Some(PlatformChoice::Generic),
///     default_drive: Some('C'.try_into().unwrap()),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a default drive is configured for
    /// the generic platform.
    pub fn validate(config: &Config) -> Result<()> {
        if let (Some(PlatformChoice::Generic), Some(drive)) =
            (config.platform, config.default_drive)
        {
            return Err(Error::Validation {
                field: "default_drive".into(),
                message: format!("drive '{drive}' cannot be used with the generic platform"),
            });
        }

        if config.default_drive.is_some() && config.platform() != Platform::Windows {
            log::warn!("default_drive is ignored unless the platform is windows");
        }

        Ok(())
    }
}
