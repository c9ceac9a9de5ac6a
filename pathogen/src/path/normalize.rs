//! Path normalization.
//!
//! Normalization resolves the `.` and `..` pseudo-atoms of a path in a
//! single left-to-right pass:
//! - `.` contributes nothing
//! - `..` cancels the preceding real atom
//! - a relative path keeps any `..` it has nothing to cancel
//! - an absolute path silently drops `..` at its root
//!
//! A relative path that normalizes to nothing becomes the self path `.`.

use super::atom::{PARENT_ATOM, SELF_ATOM};
use super::types::PurePath;

/// Resolve `.` and `..` atoms.
///
/// `is_absolute` decides what happens to a `..` with nothing left to
/// cancel: absolute paths drop it, relative paths keep it.
///
/// # Examples
///
/// ```
/// use pathogen::path::normalize::normalize_atoms;
///
/// assert_eq!(normalize_atoms(&["a", "..", "b", "."], false), ["b"]);
/// assert_eq!(normalize_atoms(&["..", ".."], false), ["..", ".."]);
/// assert_eq!(normalize_atoms(&["..", "a"], true), ["a"]);
/// assert_eq!(normalize_atoms(&["a", ".."], false), ["."]);
/// assert!(normalize_atoms(&["a", ".."], true).is_empty());
/// ```
#[must_use]
pub fn normalize_atoms<S: AsRef<str>>(atoms: &[S], is_absolute: bool) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::with_capacity(atoms.len());

    for atom in atoms {
        match atom.as_ref() {
            SELF_ATOM => {}
            PARENT_ATOM => match resolved.last() {
                Some(last) if last != PARENT_ATOM => {
                    resolved.pop();
                }
                _ if is_absolute => {
                    log::debug!("dropping '..' above the root of an absolute path");
                }
                _ => resolved.push(PARENT_ATOM.to_string()),
            },
            other => resolved.push(other.to_string()),
        }
    }

    if !is_absolute && resolved.is_empty() {
        resolved.push(SELF_ATOM.to_string());
    }

    resolved
}

impl PurePath {
    /// Returns the normalized form of this path.
    ///
    /// Variant, platform, drive and trailing separator are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let factory = GenericPathFactory::new();
    /// let path = factory.create("/a/./b/../c/").unwrap();
    /// assert_eq!(path.normalize().to_string(), "/a/c/");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let atoms = normalize_atoms(self.atoms(), self.is_absolute());
        self.with_atoms(atoms, self.has_trailing_separator())
    }

    /// Returns `true` if this is a relative path that normalizes to `.`.
    ///
    /// Absolute paths are never the self path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let factory = GenericPathFactory::new();
    /// assert!(factory.create("").unwrap().is_self());
    /// assert!(factory.create("foo/..").unwrap().is_self());
    /// assert!(!factory.create("/").unwrap().is_self());
    /// ```
    #[must_use]
    pub fn is_self(&self) -> bool {
        self.is_relative() && normalize_atoms(self.atoms(), false) == [SELF_ATOM]
    }
}
