//! Factory for Windows paths.
//!
//! A Windows path string may start with a drive specifier, a single ASCII
//! letter followed by `:`. A drive makes the path absolute, so `C:` and
//! `C:/` are both the root of drive `C`. Without a drive a path is
//! absolute when it starts with `/` or `\`.

use super::{collapse_self, split, PathFactory};
use crate::error::{Error, Result};
use crate::path::{Drive, PathKind, Platform, PurePath};

/// Builds Windows paths.
///
/// A default drive, if set, is given to absolute paths built from atoms.
/// Parsed strings keep whatever drive they spell out.
///
/// # Examples
///
/// ```
/// use pathogen::{PathFactory, WindowsPathFactory};
///
/// let factory = WindowsPathFactory::with_default_drive('X').unwrap();
/// assert_eq!(factory.default_drive().map(|d| d.letter()), Some('X'));
///
/// let built = factory.create_from_atoms(["foo"], None, None).unwrap();
/// assert_eq!(built.to_string(), "X:/foo");
///
/// let parsed = factory.create("/foo").unwrap();
/// assert_eq!(parsed.drive(), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPathFactory {
    default_drive: Option<Drive>,
}

impl WindowsPathFactory {
    /// Create a factory with no default drive.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_drive: None,
        }
    }

    /// Create a factory that assigns `drive` to absolute paths built from
    /// atoms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDrive`] if `drive` is not an ASCII letter.
    pub fn with_default_drive(drive: char) -> Result<Self> {
        Ok(Self::with_drive(Drive::try_from(drive)?))
    }

    /// Create a factory with an already validated default drive.
    #[must_use]
    pub const fn with_drive(drive: Drive) -> Self {
        Self {
            default_drive: Some(drive),
        }
    }

    /// Returns the default drive.
    #[must_use]
    pub const fn default_drive(&self) -> Option<Drive> {
        self.default_drive
    }

    /// Build a path from atoms with an explicit drive.
    ///
    /// `is_absolute` defaults to `true` and `has_trailing_separator` to
    /// `false`. The default drive is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] if a drive is given for a
    /// relative path, [`Error::InvalidDrive`] if the drive is not an ASCII
    /// letter, or an atom error for the first invalid atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{Error, WindowsPathFactory};
    ///
    /// let factory = WindowsPathFactory::new();
    /// let path = factory
    ///     .create_from_drive_and_atoms(["foo"], Some('C'), None, None)
    ///     .unwrap();
    /// assert_eq!(path.to_string(), "C:/foo");
    ///
    /// let result = factory.create_from_drive_and_atoms(Vec::<String>::new(), Some('C'), Some(false), None);
    /// assert!(matches!(result, Err(Error::InvalidPathState { .. })));
    /// ```
    pub fn create_from_drive_and_atoms<I, S>(
        &self,
        atoms: I,
        drive: Option<char>,
        is_absolute: Option<bool>,
        has_trailing_separator: Option<bool>,
    ) -> Result<PurePath>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let is_absolute = is_absolute.unwrap_or(true);
        let kind = match (is_absolute, drive) {
            (true, drive) => PathKind::WindowsAbsolute {
                drive: drive.map(Drive::try_from).transpose()?,
            },
            (false, None) => PathKind::WindowsRelative,
            (false, Some(_)) => {
                return Err(Error::invalid_state(
                    "path cannot be relative and have a drive specifier",
                ))
            }
        };
        PurePath::new(kind, atoms, has_trailing_separator.unwrap_or(false))
    }
}

impl PathFactory for WindowsPathFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create(&self, path: &str) -> Result<PurePath> {
        let (drive, rest) = split_drive(path);
        let parts = split(Platform::Windows, rest);
        let (kind, atoms) = if drive.is_some() || parts.is_rooted {
            (PathKind::WindowsAbsolute { drive }, parts.atoms)
        } else {
            (PathKind::WindowsRelative, collapse_self(parts.atoms))
        };
        log::debug!(
            "parsed windows path '{path}' into {} atom(s), drive {drive:?}",
            atoms.len()
        );
        PurePath::new(kind, atoms, parts.has_trailing_separator)
    }

    fn create_from_atoms<I, S>(
        &self,
        atoms: I,
        is_absolute: Option<bool>,
        has_trailing_separator: Option<bool>,
    ) -> Result<PurePath>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = if is_absolute.unwrap_or(true) {
            PathKind::WindowsAbsolute {
                drive: self.default_drive,
            }
        } else {
            PathKind::WindowsRelative
        };
        PurePath::new(kind, atoms, has_trailing_separator.unwrap_or(false))
    }
}

// Splits a leading `X:` off `path`.
fn split_drive(path: &str) -> (Option<Drive>, &str) {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
            (Drive::try_from(letter).ok(), &path[2..])
        }
        _ => (None, path),
    }
}
