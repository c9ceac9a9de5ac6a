//! Error types for the pathogen library.
//!
//! Path construction and derivation never touch the filesystem, so most of
//! these errors are validation failures raised eagerly at the point where an
//! invariant would be violated. The remaining variants cover the
//! configuration layer.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathogen error.
///
/// # Examples
///
/// ```
/// use pathogen::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathogen library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path atom was the empty string.
    #[error("path atoms must not be empty")]
    EmptyAtom,

    /// A path atom contained a separator character for its platform.
    #[error("path atom '{atom}' contains a separator")]
    AtomContainsSeparator {
        /// The offending atom.
        atom: String,
    },

    /// `parent()` was called on a path with no atoms.
    #[error("the root path has no parent")]
    RootParent,

    /// A path was asked to take on a shape it cannot have.
    #[error("invalid path state: {reason}")]
    InvalidPathState {
        /// Why the requested state is invalid.
        reason: String,
    },

    /// A drive specifier was not a single ASCII letter.
    #[error("invalid drive specifier '{value}': must be a single ASCII letter")]
    InvalidDrive {
        /// The rejected drive text.
        value: String,
    },

    /// A configuration file could not be parsed or emitted.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error was caused by an invalid path atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::Error;
    ///
    /// assert!(Error::EmptyAtom.is_invalid_atom());
    /// assert!(!Error::RootParent.is_invalid_atom());
    /// ```
    #[must_use]
    pub fn is_invalid_atom(&self) -> bool {
        matches!(self, Self::EmptyAtom | Self::AtomContainsSeparator { .. })
    }

    /// Check if error indicates the parent of a root path was requested.
    #[must_use]
    pub fn is_root_parent(&self) -> bool {
        matches!(self, Self::RootParent)
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidPathState {
            reason: reason.into(),
        }
    }
}
