//! Path relationship checking.
//!
//! Relationships are decided on normalized atoms, so `/a/b/..` and `/a` are
//! the same path and `/a/./b` is a descendant of `/a`. Paths only relate if
//! they share variant, platform and drive.

use std::fmt;

use serde::Serialize;

use super::atom::{PARENT_ATOM, SELF_ATOM};
use super::types::PurePath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathogen::{GenericPathFactory, PathFactory, PathRelationship};
///
/// let factory = GenericPathFactory::new();
/// let parent = factory.create("/home/user").unwrap();
/// let child = factory.create("/home/user/project").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators are ignored. A relative path that climbs out of
    /// another with `..` is unrelated to it, so `.` is an ancestor of `a`
    /// but not of `../a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory, PathRelationship};
    ///
    /// let f = GenericPathFactory::new();
    /// let rel = |a: &str, b: &str| {
    ///     PathRelationship::between(&f.create(a).unwrap(), &f.create(b).unwrap())
    /// };
    ///
    /// assert_eq!(rel("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(rel("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(rel("/a/b/..", "/a/"), PathRelationship::Same);
    /// assert_eq!(rel("/a", "/b"), PathRelationship::Unrelated);
    /// assert_eq!(rel("/a", "a"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &PurePath, path2: &PurePath) -> Self {
        if path1.kind() != path2.kind() {
            return Self::Unrelated;
        }

        let p1 = atoms_for_comparison(path1);
        let p2 = atoms_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if descends(&p1, &p2) {
            return Self::Ancestor;
        }

        if descends(&p2, &p1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &PurePath, directory: &PurePath) -> bool {
        let rel = Self::between(path, directory);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &PurePath, other: &PurePath) -> bool {
        let rel = Self::between(path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory, PathRelationship};
    ///
    /// let f = GenericPathFactory::new();
    /// let (p1, p2) = (f.create("/a").unwrap(), f.create("/a/b").unwrap());
    ///
    /// let desc = PathRelationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &PurePath, path2: &PurePath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

impl PurePath {
    /// Returns `true` if `other` lies strictly beneath this path.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        PathRelationship::between(self, other) == PathRelationship::Ancestor
    }

    /// Returns `true` if `other` lies exactly one atom beneath this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let f = GenericPathFactory::new();
    /// let root = f.create("/").unwrap();
    /// assert!(root.is_parent_of(&f.create("/etc").unwrap()));
    /// assert!(!root.is_parent_of(&f.create("/etc/hosts").unwrap()));
    /// ```
    #[must_use]
    pub fn is_parent_of(&self, other: &Self) -> bool {
        self.is_ancestor_of(other)
            && atoms_for_comparison(other).len() == atoms_for_comparison(self).len() + 1
    }
}

// Normalized atoms with the self path reduced to nothing.
fn atoms_for_comparison(path: &PurePath) -> Vec<String> {
    let mut atoms = path.normalize().atoms().to_vec();
    if atoms == [SELF_ATOM] {
        atoms.clear();
    }
    atoms
}

// `descendant` extends `ancestor` without climbing back out of it.
fn descends(ancestor: &[String], descendant: &[String]) -> bool {
    descendant.len() > ancestor.len()
        && descendant.starts_with(ancestor)
        && descendant[ancestor.len()] != PARENT_ATOM
}
