//! Core types for path values.
//!
//! A [`PurePath`] is an ordered list of atoms plus a trailing-separator flag,
//! tagged with a [`PathKind`]. The kind is a closed set of four shapes, and
//! only the Windows absolute shape has room for a [`Drive`], so a relative
//! path carrying a drive cannot be represented at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::atom::{self, SELF_ATOM};
use crate::error::{Error, Result};

/// The path grammar a value follows.
///
/// # Examples
///
/// ```
/// use pathogen::Platform;
///
/// assert!(Platform::Windows.is_separator('\\'));
/// assert!(!Platform::Generic.is_separator('\\'));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// POSIX-style paths separated by `/`.
    Generic,
    /// Drive-letter paths separated by `/` or `\`.
    Windows,
}

impl Platform {
    /// The separator emitted when rendering paths.
    pub const SEPARATOR: char = '/';

    /// Returns the platform the code is running on.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Generic
        }
    }

    /// Returns the separator characters accepted when parsing.
    #[must_use]
    pub const fn separators(self) -> &'static [char] {
        match self {
            Self::Generic => &['/'],
            Self::Windows => &['/', '\\'],
        }
    }

    /// Returns `true` if `c` separates atoms on this platform.
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// A Windows drive designator: a single ASCII letter.
///
/// The letter is stored as given; `c` and `C` are different drives as far
/// as equality is concerned.
///
/// # Examples
///
/// ```
/// use pathogen::Drive;
///
/// let drive = Drive::try_from('C').unwrap();
/// assert_eq!(drive.letter(), 'C');
/// assert!(Drive::try_from('1').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Drive(char);

impl Drive {
    /// Returns the drive letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Drive {
    type Error = Error;

    fn try_from(value: char) -> Result<Self> {
        if value.is_ascii_alphabetic() {
            Ok(Self(value))
        } else {
            Err(Error::InvalidDrive {
                value: value.to_string(),
            })
        }
    }
}

impl FromStr for Drive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::InvalidDrive {
                value: s.to_string(),
            }),
        }
    }
}

impl From<Drive> for char {
    fn from(drive: Drive) -> Self {
        drive.0
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The variant of a path: absolute or relative, per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Generic absolute path, e.g. `/usr/lib`.
    Absolute,
    /// Generic relative path, e.g. `src/lib.rs`.
    Relative,
    /// Windows absolute path, with or without a drive.
    WindowsAbsolute {
        /// The drive, if one was specified.
        drive: Option<Drive>,
    },
    /// Windows relative path.
    WindowsRelative,
}

impl PathKind {
    /// Returns the absolute kind for `platform` with no drive.
    #[must_use]
    pub const fn absolute(platform: Platform) -> Self {
        match platform {
            Platform::Generic => Self::Absolute,
            Platform::Windows => Self::WindowsAbsolute { drive: None },
        }
    }

    /// Returns the relative kind for `platform`.
    #[must_use]
    pub const fn relative(platform: Platform) -> Self {
        match platform {
            Platform::Generic => Self::Relative,
            Platform::Windows => Self::WindowsRelative,
        }
    }

    /// Returns the platform this kind belongs to.
    #[must_use]
    pub const fn platform(self) -> Platform {
        match self {
            Self::Absolute | Self::Relative => Platform::Generic,
            Self::WindowsAbsolute { .. } | Self::WindowsRelative => Platform::Windows,
        }
    }

    /// Returns `true` for the absolute kinds.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute | Self::WindowsAbsolute { .. })
    }

    /// Returns the drive of a Windows absolute kind.
    #[must_use]
    pub const fn drive(self) -> Option<Drive> {
        match self {
            Self::WindowsAbsolute { drive } => drive,
            _ => None,
        }
    }
}

/// An immutable, structured path.
///
/// Every operation that "changes" a path returns a new value. Atoms are
/// validated once, at construction.
///
/// # Examples
///
/// ```
/// use pathogen::{PathKind, PurePath};
///
/// let path = PurePath::new(PathKind::Absolute, ["usr", "lib"], false).unwrap();
/// assert_eq!(path.atoms(), ["usr", "lib"]);
/// assert_eq!(path.to_string(), "/usr/lib");
///
/// // A relative path with no atoms is the self path.
/// let empty = PurePath::new(PathKind::Relative, Vec::<String>::new(), false).unwrap();
/// assert_eq!(empty.atoms(), ["."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PurePath {
    atoms: Vec<String>,
    trailing_separator: bool,
    kind: PathKind,
}

impl PurePath {
    /// Create a path from candidate atoms.
    ///
    /// Atoms are checked left to right and the first invalid one is
    /// reported. A relative path given no atoms becomes the self path `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAtom`] or [`Error::AtomContainsSeparator`] if
    /// any atom is invalid for the kind's platform, and
    /// [`Error::InvalidPathState`] if a Windows relative path starts with a
    /// drive-like atom such as `C:`.
    pub fn new<I, S>(kind: PathKind, atoms: I, has_trailing_separator: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = atom::validate_all(kind.platform(), atoms)?;
        if kind == PathKind::WindowsRelative {
            if let Some(first) = atoms.first().filter(|a| atom::is_drive_like(a)) {
                return Err(Error::invalid_state(format!(
                    "relative path cannot start with drive-like atom '{first}'"
                )));
            }
        }
        Ok(Self::from_validated(kind, atoms, has_trailing_separator))
    }

    /// Build a path from atoms that are already known to be valid.
    ///
    /// A Windows relative path whose first atom is drive-like is kept
    /// behind a leading `.`.
    pub(crate) fn from_validated(
        kind: PathKind,
        mut atoms: Vec<String>,
        trailing_separator: bool,
    ) -> Self {
        if !kind.is_absolute() && atoms.is_empty() {
            atoms.push(SELF_ATOM.to_string());
        }
        if kind == PathKind::WindowsRelative
            && atoms.first().is_some_and(|a| atom::is_drive_like(a))
        {
            atoms.insert(0, SELF_ATOM.to_string());
        }
        Self {
            atoms,
            trailing_separator,
            kind,
        }
    }

    /// The root path of `platform`, with no drive.
    #[must_use]
    pub fn root(platform: Platform) -> Self {
        Self::from_validated(PathKind::absolute(platform), Vec::new(), false)
    }

    /// The relative self path `.` of `platform`.
    #[must_use]
    pub fn self_path(platform: Platform) -> Self {
        Self::from_validated(PathKind::relative(platform), Vec::new(), false)
    }

    /// Returns the atoms of this path.
    #[must_use]
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Returns `true` if this path ends with a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Returns the variant of this path.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Returns the platform grammar of this path.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.kind.platform()
    }

    /// Returns `true` for absolute paths.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.kind.is_absolute()
    }

    /// Returns `true` for relative paths.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.kind.is_absolute()
    }

    /// Returns the drive of a Windows absolute path.
    #[must_use]
    pub fn drive(&self) -> Option<Drive> {
        self.kind.drive()
    }

    /// Returns `true` for an absolute path with no atoms.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_absolute() && self.atoms.is_empty()
    }

    /// Renders the path with `/` separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{Drive, PathKind, PurePath};
    ///
    /// let drive = Some(Drive::try_from('C').unwrap());
    /// let path = PurePath::new(PathKind::WindowsAbsolute { drive }, ["foo"], true).unwrap();
    /// assert_eq!(path.string(), "C:/foo/");
    /// ```
    #[must_use]
    pub fn string(&self) -> String {
        let mut out = String::new();
        if let Some(drive) = self.drive() {
            out.push(drive.letter());
            out.push(':');
        }
        if self.is_absolute() {
            out.push(Platform::SEPARATOR);
        }
        out.push_str(&self.atoms.join("/"));
        if self.trailing_separator && !self.atoms.is_empty() {
            out.push(Platform::SEPARATOR);
        }
        out
    }

    pub(crate) fn with_atoms(&self, atoms: Vec<String>, trailing_separator: bool) -> Self {
        Self::from_validated(self.kind, atoms, trailing_separator)
    }
}

impl fmt::Display for PurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}
