//! Configuration schema definitions.
//!
//! This module defines the structure of pathogen configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::factory::{PlatformPathFactory, WindowsPathFactory};
use crate::output::OutputFormat;
use crate::path::{Drive, Platform};

/// Complete pathogen configuration.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the next source and finally to built-in defaults.
///
/// # Examples
///
/// ```
/// use pathogen::config::{Config, PlatformChoice};
///
/// let yaml = "platform: windows\ndefault_drive: D\noutput_format: json\n";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.platform, Some(PlatformChoice::Windows));
/// assert_eq!(config.default_drive.map(|d| d.letter()), Some('D'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which path grammar to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformChoice>,

    /// Drive given to absolute Windows paths built from atoms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_drive: Option<Drive>,

    /// How reports are rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured platform, resolving `native` and the default.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default().resolve()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Build the path factory this configuration describes.
    ///
    /// The default drive only applies to the Windows grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::config::{Config, PlatformChoice};
    /// use pathogen::PathFactory;
    ///
    /// let config = Config {
    ///     platform: Some(PlatformChoice::Windows),
    ///     default_drive: Some('E'.try_into().unwrap()),
    ///     ..Default::default()
    /// };
    /// let path = config.factory().create_from_atoms(["tmp"], None, None).unwrap();
    /// assert_eq!(path.to_string(), "E:/tmp");
    /// ```
    #[must_use]
    pub fn factory(&self) -> PlatformPathFactory {
        match (self.platform(), self.default_drive) {
            (Platform::Windows, Some(drive)) => {
                PlatformPathFactory::from_windows(WindowsPathFactory::with_drive(drive))
            }
            (platform, _) => PlatformPathFactory::for_platform(platform),
        }
    }
}

/// Platform selection as written in configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
    /// Whatever platform the program runs on.
    #[default]
    Native,
    /// POSIX-style paths.
    #[serde(alias = "posix")]
    #[value(alias = "posix")]
    Generic,
    /// Windows paths.
    Windows,
}

impl PlatformChoice {
    /// Resolve to a concrete platform.
    #[must_use]
    pub const fn resolve(self) -> Platform {
        match self {
            Self::Native => Platform::native(),
            Self::Generic => Platform::Generic,
            Self::Windows => Platform::Windows,
        }
    }
}

impl From<Platform> for PlatformChoice {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Generic => Self::Generic,
            Platform::Windows => Self::Windows,
        }
    }
}

impl fmt::Display for PlatformChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Generic => write!(f, "generic"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PlatformChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "generic" | "posix" => Ok(Self::Generic),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}
