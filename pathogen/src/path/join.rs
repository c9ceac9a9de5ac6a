//! Structural derivations: parent, joins and trailing separators.
//!
//! These operate on the atom sequence as a whole. None of them normalize;
//! call [`PurePath::normalize`] on the result when `.` and `..` should be
//! resolved.

use super::atom;
use super::types::PurePath;
use crate::error::{Error, Result};

impl PurePath {
    /// Returns this path without its last atom.
    ///
    /// The parent never has a trailing separator. A relative path whose
    /// only atom is dropped becomes the self path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootParent`] if the path has no atoms.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let factory = GenericPathFactory::new();
    /// let parent = factory.create("/foo/bar/").unwrap().parent().unwrap();
    /// assert_eq!(parent.to_string(), "/foo");
    ///
    /// assert!(factory.create("/").unwrap().parent().is_err());
    /// ```
    pub fn parent(&self) -> Result<Self> {
        let atoms = self.atoms();
        if atoms.is_empty() {
            return Err(Error::RootParent);
        }
        Ok(self.with_atoms(atoms[..atoms.len() - 1].to_vec(), false))
    }

    /// Returns this path without a trailing separator.
    #[must_use]
    pub fn strip_trailing_slash(&self) -> Self {
        if !self.has_trailing_separator() {
            return self.clone();
        }
        self.with_atoms(self.atoms().to_vec(), false)
    }

    /// Returns this path with a trailing separator.
    #[must_use]
    pub fn join_trailing_slash(&self) -> Self {
        if self.has_trailing_separator() {
            return self.clone();
        }
        self.with_atoms(self.atoms().to_vec(), true)
    }

    /// Returns this path with one more atom.
    ///
    /// # Errors
    ///
    /// Returns an atom error if `atom` is empty or contains a separator.
    pub fn join_atom(&self, atom: &str) -> Result<Self> {
        self.join_atoms([atom])
    }

    /// Returns this path with the given atoms appended.
    ///
    /// The result has no trailing separator. Atoms are validated left to
    /// right and nothing is appended if any of them is invalid.
    ///
    /// # Errors
    ///
    /// Returns an atom error for the first invalid atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let base = GenericPathFactory::new().create("/srv/").unwrap();
    /// let joined = base.join_atoms(["www", "index.html"]).unwrap();
    /// assert_eq!(joined.to_string(), "/srv/www/index.html");
    /// ```
    pub fn join_atoms<I, S>(&self, atoms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let appended = atom::validate_all(self.platform(), atoms)?;
        Ok(self.append(appended, false))
    }

    /// Returns this path with the atoms of a relative path appended.
    ///
    /// The receiver keeps its variant and drive. The trailing separator of
    /// the result is that of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] if `path` is absolute or belongs
    /// to a different platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{PathFactory, WindowsPathFactory};
    ///
    /// let factory = WindowsPathFactory::new();
    /// let base = factory.create("C:\\Users").unwrap();
    /// let joined = base.join(&factory.create("me\\Desktop\\").unwrap()).unwrap();
    /// assert_eq!(joined.to_string(), "C:/Users/me/Desktop/");
    /// ```
    pub fn join(&self, path: &Self) -> Result<Self> {
        if path.is_absolute() {
            return Err(Error::invalid_state(format!(
                "cannot join absolute path '{path}'"
            )));
        }
        if path.platform() != self.platform() {
            return Err(Error::invalid_state(format!(
                "cannot join a {} path onto a {} path",
                path.platform(),
                self.platform()
            )));
        }
        Ok(self.append(path.atoms().to_vec(), path.has_trailing_separator()))
    }

    fn append(&self, appended: Vec<String>, trailing_separator: bool) -> Self {
        let mut atoms = self.atoms().to_vec();
        atoms.extend(appended);
        self.with_atoms(atoms, trailing_separator)
    }
}
