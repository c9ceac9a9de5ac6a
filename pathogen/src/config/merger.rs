//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathogen::config::{Config, ConfigMerger, PlatformChoice};
///
/// let low = Config { platform: Some(PlatformChoice::Generic), ..Default::default() };
/// let high = Config { platform: Some(PlatformChoice::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.platform, Some(PlatformChoice::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }
        if source.default_drive.is_some() {
            target.default_drive = source.default_drive;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
