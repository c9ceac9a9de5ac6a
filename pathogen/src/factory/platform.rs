//! The factory for whichever platform the program is running on.

use std::sync::OnceLock;

use super::{GenericPathFactory, PathFactory, WindowsPathFactory};
use crate::error::Result;
use crate::path::{Platform, PurePath};

#[derive(Debug, Clone, Copy)]
enum Inner {
    Generic(GenericPathFactory),
    Windows(WindowsPathFactory),
}

/// A factory that dispatches to the generic or Windows grammar.
///
/// [`PlatformPathFactory::new`] picks the grammar of the host; use
/// [`PlatformPathFactory::for_platform`] to choose one explicitly.
///
/// # Examples
///
/// ```
/// use pathogen::{PathFactory, Platform, PlatformPathFactory};
///
/// let factory = PlatformPathFactory::for_platform(Platform::Windows);
/// let path = factory.create("D:\\data").unwrap();
/// assert_eq!(path.to_string(), "D:/data");
///
/// assert_eq!(PlatformPathFactory::shared().platform(), Platform::native());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlatformPathFactory {
    inner: Inner,
}

impl Default for PlatformPathFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPathFactory {
    /// Create a factory for the host platform.
    #[must_use]
    pub fn new() -> Self {
        Self::for_platform(Platform::native())
    }

    /// Create a factory for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let inner = match platform {
            Platform::Generic => Inner::Generic(GenericPathFactory::new()),
            Platform::Windows => Inner::Windows(WindowsPathFactory::new()),
        };
        Self { inner }
    }

    /// Wrap a configured Windows factory, keeping its default drive.
    #[must_use]
    pub fn from_windows(factory: WindowsPathFactory) -> Self {
        Self {
            inner: Inner::Windows(factory),
        }
    }

    /// Returns a process-wide factory for the host platform.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<PlatformPathFactory> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }
}

impl PathFactory for PlatformPathFactory {
    fn platform(&self) -> Platform {
        match &self.inner {
            Inner::Generic(f) => f.platform(),
            Inner::Windows(f) => f.platform(),
        }
    }

    fn create(&self, path: &str) -> Result<PurePath> {
        match &self.inner {
            Inner::Generic(f) => f.create(path),
            Inner::Windows(f) => f.create(path),
        }
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
        match &self.inner {
            Inner::Generic(f) => f.create_from_atoms(atoms, is_absolute, has_trailing_separator),
            Inner::Windows(f) => f.create_from_atoms(atoms, is_absolute, has_trailing_separator),
        }
    }
}

impl From<GenericPathFactory> for PlatformPathFactory {
    fn from(factory: GenericPathFactory) -> Self {
        Self {
            inner: Inner::Generic(factory),
        }
    }
}

impl From<WindowsPathFactory> for PlatformPathFactory {
    fn from(factory: WindowsPathFactory) -> Self {
        Self::from_windows(factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_native() {
        assert_eq!(PlatformPathFactory::new().platform(), Platform::native());
    }

    #[test]
    fn test_for_platform_dispatches() {
        let generic = PlatformPathFactory::for_platform(Platform::Generic);
        assert_eq!(generic.create("a\\b").unwrap().atoms(), ["a\\b"]);

        let windows = PlatformPathFactory::for_platform(Platform::Windows);
        assert_eq!(windows.create("a\\b").unwrap().atoms(), ["a", "b"]);
    }

    #[test]
    fn test_from_windows_keeps_default_drive() {
        let factory =
            PlatformPathFactory::from_windows(WindowsPathFactory::with_default_drive('Z').unwrap());
        let path = factory.create_from_atoms(["x"], None, None).unwrap();
        assert_eq!(path.to_string(), "Z:/x");
    }

    #[test]
    fn test_shared_is_singleton() {
        let a = PlatformPathFactory::shared();
        let b = PlatformPathFactory::shared();
        assert!(std::ptr::eq(a, b));
    }
}
