//! Resolution of paths against a base path.
//!
//! This module provides the `PathResolver` type, which turns a possibly
//! relative path into an absolute one by joining it onto a base, and
//! [`PurePath::relative_to`], which does the reverse.

use super::atom::PARENT_ATOM;
use super::types::{PathKind, PurePath};
use crate::error::{Error, Result};

/// Resolves paths against an absolute base path.
///
/// Absolute paths resolve to themselves. Relative paths are joined onto the
/// base and, unless disabled, normalized.
///
/// # Examples
///
/// ```
/// use pathogen::{GenericPathFactory, PathFactory, PathResolver};
///
/// let factory = GenericPathFactory::new();
/// let base = factory.create("/srv/app").unwrap();
/// let resolver = PathResolver::new();
///
/// let resolved = resolver.resolve(&base, &factory.create("../logs").unwrap()).unwrap();
/// assert_eq!(resolved.to_string(), "/srv/logs");
///
/// let absolute = factory.create("/etc/hosts").unwrap();
/// assert_eq!(resolver.resolve(&base, &absolute).unwrap(), absolute);
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Whether joined results are normalized.
    normalize: bool,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl PathResolver {
    /// Create a new path resolver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether resolved relative paths are normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory, PathResolver};
    ///
    /// let factory = GenericPathFactory::new();
    /// let resolver = PathResolver::new().with_normalization(false);
    /// let resolved = resolver
    ///     .resolve(&factory.create("/a").unwrap(), &factory.create("./b").unwrap())
    ///     .unwrap();
    /// assert_eq!(resolved.to_string(), "/a/./b");
    /// ```
    #[must_use]
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Resolve `path` against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] if `base` is relative, or if a
    /// relative `path` belongs to a different platform than `base`.
    pub fn resolve(&self, base: &PurePath, path: &PurePath) -> Result<PurePath> {
        if path.is_absolute() {
            return Ok(path.clone());
        }
        if base.is_relative() {
            return Err(Error::invalid_state(format!(
                "cannot resolve against relative base '{base}'"
            )));
        }

        let joined = base.join(path)?;
        log::debug!("resolved '{path}' against '{base}' to '{joined}'");

        Ok(if self.normalize {
            joined.normalize()
        } else {
            joined
        })
    }
}

impl PurePath {
    /// Returns the relative path that leads from `base` to this path.
    ///
    /// Both paths are normalized first. The result climbs out of `base`
    /// with `..` as far as needed and then descends; a path relative to
    /// itself is `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] unless both paths are absolute
    /// and share platform and drive.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let f = GenericPathFactory::new();
    /// let target = f.create("/a/b/c").unwrap();
    /// let base = f.create("/a/d").unwrap();
    /// assert_eq!(target.relative_to(&base).unwrap().to_string(), "../b/c");
    /// ```
    pub fn relative_to(&self, base: &Self) -> Result<Self> {
        if self.is_relative() || base.is_relative() {
            return Err(Error::invalid_state(
                "relative_to requires two absolute paths",
            ));
        }
        if self.kind() != base.kind() {
            return Err(Error::invalid_state(format!(
                "'{self}' and '{base}' do not share a platform and drive"
            )));
        }

        let target = self.normalize();
        let base = base.normalize();
        let common = target
            .atoms()
            .iter()
            .zip(base.atoms())
            .take_while(|(a, b)| a == b)
            .count();

        let atoms: Vec<String> = std::iter::repeat(PARENT_ATOM.to_string())
            .take(base.atoms().len() - common)
            .chain(target.atoms()[common..].iter().cloned())
            .collect();

        Ok(Self::from_validated(
            PathKind::relative(self.platform()),
            atoms,
            false,
        ))
    }
}
