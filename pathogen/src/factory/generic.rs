//! Factory for generic (POSIX-style) paths.

use super::{collapse_self, split, PathFactory};
use crate::error::Result;
use crate::path::{PathKind, Platform, PurePath};

/// Builds generic paths: `/` is the only separator and there are no drives.
///
/// # Examples
///
/// ```
/// use pathogen::{GenericPathFactory, PathFactory};
///
/// let factory = GenericPathFactory::new();
/// let path = factory.create("").unwrap();
/// assert!(path.is_relative());
/// assert!(path.is_self());
///
/// let path = factory.create_from_atoms(["etc", "hosts"], None, None).unwrap();
/// assert_eq!(path.to_string(), "/etc/hosts");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericPathFactory;

impl GenericPathFactory {
    /// Create a new generic path factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PathFactory for GenericPathFactory {
    fn platform(&self) -> Platform {
        Platform::Generic
    }

    fn create(&self, path: &str) -> Result<PurePath> {
        let parts = split(Platform::Generic, path);
        let (kind, atoms) = if parts.is_rooted {
            (PathKind::Absolute, parts.atoms)
        } else {
            (PathKind::Relative, collapse_self(parts.atoms))
        };
        log::debug!("parsed generic path '{path}' into {} atom(s)", atoms.len());
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
            PathKind::Absolute
        } else {
            PathKind::Relative
        };
        PurePath::new(kind, atoms, has_trailing_separator.unwrap_or(false))
    }
}
