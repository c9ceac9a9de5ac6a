//! Atom validation and name splitting.
//!
//! An atom is one non-empty, separator-free segment of a path. Everything
//! else about an atom (whitespace, case, dots) is preserved verbatim.

use super::types::Platform;
use crate::error::{Error, Result};

/// The self atom, `.`.
pub const SELF_ATOM: &str = ".";

/// The parent atom, `..`.
pub const PARENT_ATOM: &str = "..";

/// Separates a name from its extensions.
pub const EXTENSION_SEPARATOR: char = '.';

/// Check a single atom against the rules of `platform`.
///
/// # Errors
///
/// Returns [`Error::EmptyAtom`] for an empty atom and
/// [`Error::AtomContainsSeparator`] if the atom contains any separator the
/// platform accepts.
///
/// # Examples
///
/// ```
/// use pathogen::path::atom::validate;
/// use pathogen::Platform;
///
/// assert!(validate(Platform::Generic, "foo").is_ok());
/// assert!(validate(Platform::Generic, "").is_err());
/// assert!(validate(Platform::Windows, "foo\\bar").is_err());
/// ```
pub fn validate(platform: Platform, atom: &str) -> Result<()> {
    if atom.is_empty() {
        return Err(Error::EmptyAtom);
    }
    if atom.contains(platform.separators()) {
        return Err(Error::AtomContainsSeparator {
            atom: atom.to_string(),
        });
    }
    Ok(())
}

/// Validate a sequence of atoms, collecting them on success.
///
/// # Errors
///
/// Returns the error for the first invalid atom, scanning left to right.
pub fn validate_all<I, S>(platform: Platform, atoms: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    atoms
        .into_iter()
        .map(|atom| {
            let atom = atom.into();
            validate(platform, &atom)?;
            Ok(atom)
        })
        .collect()
}

/// Returns `true` if `atom` starts with a drive specifier such as `C:`.
///
/// On Windows such an atom cannot lead a relative path, because the
/// rendered string would parse back as a drive-absolute path.
///
/// # Examples
///
/// ```
/// use pathogen::path::atom::is_drive_like;
///
/// assert!(is_drive_like("C:"));
/// assert!(is_drive_like("d:foo"));
/// assert!(!is_drive_like("1:"));
/// assert!(!is_drive_like("foo:"));
/// ```
#[must_use]
pub fn is_drive_like(atom: &str) -> bool {
    let bytes = atom.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Split a name at its first `.`.
///
/// Returns the text before the dot and, if there was a dot, everything
/// after it.
///
/// # Examples
///
/// ```
/// use pathogen::path::atom::split_first_extension;
///
/// assert_eq!(split_first_extension("bar.tar.gz"), ("bar", Some("tar.gz")));
/// assert_eq!(split_first_extension("bar"), ("bar", None));
/// ```
#[must_use]
pub fn split_first_extension(name: &str) -> (&str, Option<&str>) {
    match name.split_once(EXTENSION_SEPARATOR) {
        Some((prefix, suffix)) => (prefix, Some(suffix)),
        None => (name, None),
    }
}

/// Split a name at its last `.`.
///
/// # Examples
///
/// ```
/// use pathogen::path::atom::split_last_extension;
///
/// assert_eq!(split_last_extension("bar.tar.gz"), ("bar.tar", Some("gz")));
/// assert_eq!(split_last_extension(".bashrc"), ("", Some("bashrc")));
/// ```
#[must_use]
pub fn split_last_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once(EXTENSION_SEPARATOR) {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_atoms_are_valid() {
        assert!(validate(Platform::Generic, " foo bar ").is_ok());
        assert!(validate(Platform::Windows, " ").is_ok());
    }

    #[test]
    fn test_generic_allows_backslash() {
        assert!(validate(Platform::Generic, "a\\b").is_ok());
    }

    #[test]
    fn test_validate_all_reports_first_failure() {
        let err = validate_all(Platform::Generic, ["a", "b/c", "d/e"]).unwrap_err();
        match err {
            Error::AtomContainsSeparator { atom } => assert_eq!(atom, "b/c"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_drive_like_atoms() {
        assert!(is_drive_like("Z:"));
        assert!(is_drive_like("c:file.txt"));
        assert!(!is_drive_like("C"));
        assert!(!is_drive_like(":C"));
        assert!(!is_drive_like("."));
    }

    #[test]
    fn test_split_empty_name() {
        assert_eq!(split_first_extension(""), ("", None));
        assert_eq!(split_last_extension(""), ("", None));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split_last_extension("foo."), ("foo", Some("")));
        assert_eq!(split_first_extension("foo."), ("foo", Some("")));
    }
}
