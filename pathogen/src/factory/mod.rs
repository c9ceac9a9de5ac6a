//! Factories that build paths from strings and atom lists.
//!
//! Each platform has its own grammar:
//!
//! | Platform | Root | With drive | Separators accepted | Separator emitted |
//! |---|---|---|---|---|
//! | Generic | `/` | n/a | `/` | `/` |
//! | Windows | `/` or `C:/` | `C:/foo` | `/` and `\` | `/` |
//!
//! Runs of separators collapse, so `/foo//bar` has two atoms. An empty
//! string and `.` both parse to the relative self path.
//!
//! # Examples
//!
//! ```
//! use pathogen::{GenericPathFactory, PathFactory, WindowsPathFactory};
//!
//! let path = GenericPathFactory::new().create("/foo//bar/").unwrap();
//! assert_eq!(path.atoms(), ["foo", "bar"]);
//! assert!(path.is_absolute());
//! assert!(path.has_trailing_separator());
//!
//! let path = WindowsPathFactory::new().create("C:\\foo\\bar.tar.gz").unwrap();
//! assert_eq!(path.drive().map(|d| d.letter()), Some('C'));
//! assert_eq!(path.extension(), Some("gz"));
//! ```

mod generic;
mod platform;
mod windows;

pub use generic::GenericPathFactory;
pub use platform::PlatformPathFactory;
pub use windows::WindowsPathFactory;

use crate::error::Result;
use crate::path::atom::SELF_ATOM;
use crate::path::{Platform, PurePath};

/// Builds paths for one platform grammar.
pub trait PathFactory {
    /// The platform whose grammar this factory implements.
    fn platform(&self) -> Platform;

    /// Parse a path from its string representation.
    ///
    /// # Errors
    ///
    /// Returns an atom error if the parsed atoms are invalid, which the
    /// grammar should never produce.
    fn create(&self, path: &str) -> Result<PurePath>;

    /// Build a path from atoms.
    ///
    /// `is_absolute` defaults to `true` and `has_trailing_separator` to
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns an atom error for the first invalid atom.
    fn create_from_atoms<I, S>(
        &self,
        atoms: I,
        is_absolute: Option<bool>,
        has_trailing_separator: Option<bool>,
    ) -> Result<PurePath>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;
}

/// The result of splitting a path string on separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Split {
    pub is_rooted: bool,
    pub atoms: Vec<String>,
    pub has_trailing_separator: bool,
}

/// Split `path` on the separators of `platform`, dropping empty pieces.
pub(crate) fn split(platform: Platform, path: &str) -> Split {
    let is_separator = |c: char| platform.is_separator(c);

    let atoms: Vec<String> = path
        .split(is_separator)
        .filter(|atom| !atom.is_empty())
        .map(str::to_string)
        .collect();

    Split {
        is_rooted: path.starts_with(is_separator),
        has_trailing_separator: !atoms.is_empty() && path.ends_with(is_separator),
        atoms,
    }
}

/// Collapse relative atoms made only of `.` to the single self atom.
pub(crate) fn collapse_self(atoms: Vec<String>) -> Vec<String> {
    if atoms.len() > 1 && atoms.iter().all(|atom| atom == SELF_ATOM) {
        vec![SELF_ATOM.to_string()]
    } else {
        atoms
    }
}
