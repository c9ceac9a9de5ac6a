//! Common test utilities for integration tests.

use pathogen::{GenericPathFactory, PathFactory, PurePath, WindowsPathFactory};

/// Parses `s` with the generic grammar.
#[allow(dead_code)]
pub fn generic(s: &str) -> PurePath {
    GenericPathFactory::new()
        .create(s)
        .unwrap_or_else(|e| panic!("failed to parse generic path '{s}': {e}"))
}

/// Parses `s` with the Windows grammar.
#[allow(dead_code)]
pub fn windows(s: &str) -> PurePath {
    WindowsPathFactory::new()
        .create(s)
        .unwrap_or_else(|e| panic!("failed to parse windows path '{s}': {e}"))
}

/// Writes `content` to `dir/name` and returns the full path.
#[allow(dead_code)]
pub fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
