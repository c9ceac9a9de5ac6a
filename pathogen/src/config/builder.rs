//! Builder that assembles the final configuration from all sources.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] by layering files, environment and overrides.
///
/// # Examples
///
/// ```
/// use pathogen::config::{Config, ConfigBuilder};
/// use pathogen::OutputFormat;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Json),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory where project config discovery starts. Defaults to the
    /// current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`. Defaults to
    /// `~/.pathogen`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PATHOGEN_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match &mut self.overrides {
            Some(existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, the current directory is unavailable, or the
    /// merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                log::debug!(
                    "configuration source {} (precedence {})",
                    source.path.display(),
                    source.precedence
                );
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlatformChoice, PROJECT_CONFIG_FILE};
    use crate::error::Error;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_accumulate() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                platform: Some(PlatformChoice::Windows),
                ..Default::default()
            })
            .with_config(Config {
                output_format: Some(OutputFormat::Yaml),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.platform, Some(PlatformChoice::Windows));
        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_files_are_layered() {
        let config_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        fs::write(
            config_dir.path().join("config.yaml"),
            "platform: windows\noutput_format: yaml\n",
        )
        .unwrap();
        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "output_format: json\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project_dir.path())
            .with_config_dir(config_dir.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.platform, Some(PlatformChoice::Windows));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_override_beats_files() {
        let project_dir = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();
        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "platform: windows\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project_dir.path())
            .with_config_dir(config_dir.path())
            .skip_env()
            .with_config(Config {
                platform: Some(PlatformChoice::Generic),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.platform, Some(PlatformChoice::Generic));
    }

    #[test]
    fn test_build_validates() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                platform: Some(PlatformChoice::Generic),
                default_drive: Some('C'.try_into().unwrap()),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
