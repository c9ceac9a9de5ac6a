//! Name and extension handling for the last atom of a path.
//!
//! Two ways of splitting a name are offered. The *prefix/suffix* split
//! happens at the first `.`, so `bar.tar.gz` has prefix `bar` and suffix
//! `tar.gz`. The *extension* split happens at the last `.`, so the same
//! name has extension `gz` and is `bar.tar` without it.

use super::atom::{self, EXTENSION_SEPARATOR};
use super::types::PurePath;
use crate::error::Result;

impl PurePath {
    /// Returns the last atom, or `""` if the path has no atoms.
    #[must_use]
    pub fn name(&self) -> &str {
        self.atoms().last().map_or("", String::as_str)
    }

    /// Returns the name up to its first `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let path = GenericPathFactory::new().create("/foo/bar.tar.gz").unwrap();
    /// assert_eq!(path.name_prefix(), "bar");
    /// assert_eq!(path.name_suffix(), Some("tar.gz"));
    /// ```
    #[must_use]
    pub fn name_prefix(&self) -> &str {
        atom::split_first_extension(self.name()).0
    }

    /// Returns everything after the first `.` of the name.
    #[must_use]
    pub fn name_suffix(&self) -> Option<&str> {
        atom::split_first_extension(self.name()).1
    }

    /// Returns the name without its last extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let path = GenericPathFactory::new().create("/foo/bar.tar.gz").unwrap();
    /// assert_eq!(path.name_without_extension(), "bar.tar");
    /// assert_eq!(path.extension(), Some("gz"));
    /// ```
    #[must_use]
    pub fn name_without_extension(&self) -> &str {
        atom::split_last_extension(self.name()).0
    }

    /// Returns the text after the last `.` of the name.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        atom::split_last_extension(self.name()).1
    }

    /// Returns `true` if the name contains a `.`.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// Returns a path with the last extension removed from the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAtom`](crate::Error::EmptyAtom) if nothing of
    /// the name would remain, as with `.bashrc`.
    pub fn strip_extension(&self) -> Result<Self> {
        if !self.has_extension() {
            return Ok(self.clone());
        }
        let stem = self.name_without_extension().to_string();
        self.replace_name(stem)
    }

    /// Returns a path with every extension removed from the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAtom`](crate::Error::EmptyAtom) if the name
    /// starts with a `.`.
    pub fn strip_name_suffix(&self) -> Result<Self> {
        if self.name_suffix().is_none() {
            return Ok(self.clone());
        }
        let prefix = self.name_prefix().to_string();
        self.replace_name(prefix)
    }

    /// Returns a path with `.extension` appended to the name.
    ///
    /// # Errors
    ///
    /// Returns an atom error if the extension is empty or contains a
    /// separator.
    pub fn join_extension(&self, extension: &str) -> Result<Self> {
        self.join_extensions([extension])
    }

    /// Returns a path with each extension appended to the name in turn.
    ///
    /// # Errors
    ///
    /// Returns an atom error for the first extension that is empty or
    /// contains a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen::{GenericPathFactory, PathFactory};
    ///
    /// let path = GenericPathFactory::new().create("dist/app").unwrap();
    /// assert_eq!(path.join_extensions(["tar", "gz"]).unwrap().to_string(), "dist/app.tar.gz");
    /// ```
    pub fn join_extensions<I, S>(&self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name = self.name().to_string();
        for extension in extensions {
            let extension = extension.as_ref();
            atom::validate(self.platform(), extension)?;
            name.push(EXTENSION_SEPARATOR);
            name.push_str(extension);
        }
        self.replace_name(name)
    }

    /// Returns a path with `suffix` appended to the name.
    ///
    /// # Errors
    ///
    /// Returns an atom error if the new name is empty or contains a
    /// separator.
    pub fn suffix_name(&self, suffix: &str) -> Result<Self> {
        self.replace_name(format!("{}{suffix}", self.name()))
    }

    /// Returns a path with `prefix` prepended to the name.
    ///
    /// # Errors
    ///
    /// Returns an atom error if the new name is empty or contains a
    /// separator.
    pub fn prefix_name(&self, prefix: &str) -> Result<Self> {
        self.replace_name(format!("{prefix}{}", self.name()))
    }

    // A root path has no name to replace, so the new name becomes its only atom.
    fn replace_name(&self, name: String) -> Result<Self> {
        atom::validate(self.platform(), &name)?;
        let mut atoms = self.atoms().to_vec();
        match atoms.last_mut() {
            Some(last) => *last = name,
            None => atoms.push(name),
        }
        Ok(self.with_atoms(atoms, self.has_trailing_separator()))
    }
}
