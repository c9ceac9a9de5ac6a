//! Output formatting for path reports.
//!
//! A [`PathReport`] is a flat, serializable description of one path. The
//! CLI renders reports in the configured [`OutputFormat`].

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::PurePath;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for rendering path reports.
pub trait OutputFormatter {
    /// Render `report` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &PathReport) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use pathogen::OutputFormat;
///
/// let format: OutputFormat = serde_yaml::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable `key: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

/// A serializable description of a path.
///
/// # Examples
///
/// ```
/// use pathogen::{GenericPathFactory, PathFactory, PathReport};
///
/// let path = GenericPathFactory::new().create("/srv/./www/site.tar.gz").unwrap();
/// let report = PathReport::from(&path);
///
/// assert_eq!(report.extension.as_deref(), Some("gz"));
/// assert_eq!(report.name_suffix.as_deref(), Some("tar.gz"));
/// assert_eq!(report.normalized, "/srv/www/site.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The rendered path.
    pub path: String,
    /// Platform grammar of the path.
    pub platform: String,
    /// Whether the path is absolute.
    pub absolute: bool,
    /// Drive letter, for Windows paths that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<char>,
    /// The atoms of the path.
    pub atoms: Vec<String>,
    /// Whether the path ends with a separator.
    pub has_trailing_separator: bool,
    /// The last atom.
    pub name: String,
    /// Text after the last `.` of the name.
    pub extension: Option<String>,
    /// The name up to its first `.`.
    pub name_prefix: String,
    /// Text after the first `.` of the name.
    pub name_suffix: Option<String>,
    /// The normalized path.
    pub normalized: String,
}

impl From<&PurePath> for PathReport {
    fn from(path: &PurePath) -> Self {
        Self {
            path: path.to_string(),
            platform: path.platform().to_string(),
            absolute: path.is_absolute(),
            drive: path.drive().map(|d| d.letter()),
            atoms: path.atoms().to_vec(),
            has_trailing_separator: path.has_trailing_separator(),
            name: path.name().to_string(),
            extension: path.extension().map(str::to_string),
            name_prefix: path.name_prefix().to_string(),
            name_suffix: path.name_suffix().map(str::to_string),
            normalized: path.normalize().to_string(),
        }
    }
}
