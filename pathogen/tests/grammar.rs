//! Table-driven tests for the generic and Windows path grammars.

mod common;

use common::{generic, windows};
use pathogen::{Error, GenericPathFactory, PathFactory, PathKind, WindowsPathFactory};

struct Case {
    name: &'static str,
    input: &'static str,
    drive: Option<char>,
    atoms: &'static [&'static str],
    absolute: bool,
    trailing: bool,
}

const fn case(
    name: &'static str,
    input: &'static str,
    drive: Option<char>,
    atoms: &'static [&'static str],
    absolute: bool,
    trailing: bool,
) -> Case {
    Case {
        name,
        input,
        drive,
        atoms,
        absolute,
        trailing,
    }
}

const WINDOWS_CASES: &[Case] = &[
    case("root", "/", None, &[], true, false),
    case("absolute", "/foo/bar", None, &["foo", "bar"], true, false),
    case("absolute trailing", "/foo/bar/", None, &["foo", "bar"], true, true),
    case("absolute empty atoms", "/foo//bar", None, &["foo", "bar"], true, false),
    case("absolute empty atoms at start", "//foo", None, &["foo"], true, false),
    case("absolute empty atoms at end", "/foo//", None, &["foo"], true, true),
    case(
        "absolute whitespace atoms",
        "/ foo bar / baz qux ",
        None,
        &[" foo bar ", " baz qux "],
        true,
        false,
    ),
    case("absolute backslashes", "\\foo\\bar\\", None, &["foo", "bar"], true, true),
    case("drive root", "C:/", Some('C'), &[], true, false),
    case("drive root without slash", "C:", Some('C'), &[], true, false),
    case("drive absolute", "C:/foo/bar", Some('C'), &["foo", "bar"], true, false),
    case("drive trailing", "C:/foo/bar/", Some('C'), &["foo", "bar"], true, true),
    case("drive empty atoms", "C:/foo//bar", Some('C'), &["foo", "bar"], true, false),
    case("drive empty atoms at start", "C://foo", Some('C'), &["foo"], true, false),
    case("drive empty atoms at end", "C:/foo//", Some('C'), &["foo"], true, true),
    case(
        "drive whitespace atoms",
        "C:/ foo bar / baz qux ",
        Some('C'),
        &[" foo bar ", " baz qux "],
        true,
        false,
    ),
    case("drive backslashes", "C:\\foo\\bar\\", Some('C'), &["foo", "bar"], true, true),
    case("empty", "", None, &["."], false, false),
    case("self", ".", None, &["."], false, false),
    case("all dots", "./.", None, &["."], false, false),
    case("all dots backslashes trailing", ".\\.\\", None, &["."], false, true),
    case("drive-like atom behind self", "./C:/x", None, &[".", "C:", "x"], false, false),
    case("relative", "foo/bar", None, &["foo", "bar"], false, false),
    case("relative trailing", "foo/bar/", None, &["foo", "bar"], false, true),
    case("relative empty atoms", "foo//bar", None, &["foo", "bar"], false, false),
    case("relative empty atoms at end", "foo/bar//", None, &["foo", "bar"], false, true),
    case(
        "relative whitespace atoms",
        " foo bar / baz qux ",
        None,
        &[" foo bar ", " baz qux "],
        false,
        false,
    ),
    case("relative backslashes", "foo\\bar\\", None, &["foo", "bar"], false, true),
];

const GENERIC_CASES: &[Case] = &[
    case("root", "/", None, &[], true, false),
    case("absolute", "/foo/bar", None, &["foo", "bar"], true, false),
    case("absolute trailing", "/foo/bar/", None, &["foo", "bar"], true, true),
    case("absolute empty atoms", "/foo//bar/", None, &["foo", "bar"], true, true),
    case("absolute empty atoms at start", "//foo", None, &["foo"], true, false),
    case(
        "absolute whitespace atoms",
        "/ foo bar / baz qux ",
        None,
        &[" foo bar ", " baz qux "],
        true,
        false,
    ),
    case("backslash is an ordinary character", "/foo\\bar", None, &["foo\\bar"], true, false),
    case("drive is an ordinary atom", "C:/foo", None, &["C:", "foo"], false, false),
    case("empty", "", None, &["."], false, false),
    case("self", ".", None, &["."], false, false),
    case("all dots", "./.", None, &["."], false, false),
    case("all dots trailing", "././", None, &["."], false, true),
    case("relative", "foo/bar", None, &["foo", "bar"], false, false),
    case("relative trailing", "foo/bar/", None, &["foo", "bar"], false, true),
    case("parents", "../..", None, &["..", ".."], false, false),
];

#[test]
fn test_windows_create() {
    for case in WINDOWS_CASES {
        let path = windows(case.input);
        assert_eq!(path.atoms(), case.atoms, "{}", case.name);
        assert_eq!(path.is_absolute(), case.absolute, "{}", case.name);
        assert_eq!(path.drive().map(|d| d.letter()), case.drive, "{}", case.name);
        assert_eq!(path.has_trailing_separator(), case.trailing, "{}", case.name);
    }
}

#[test]
fn test_windows_create_from_atoms_uses_default_drive() {
    let factory = WindowsPathFactory::with_default_drive('X').unwrap();
    for case in WINDOWS_CASES {
        let path = factory
            .create_from_atoms(case.atoms.iter().copied(), Some(case.absolute), Some(case.trailing))
            .unwrap();
        assert_eq!(path.atoms(), case.atoms, "{}", case.name);
        assert_eq!(path.is_absolute(), case.absolute, "{}", case.name);
        let expected_drive = case.absolute.then_some('X');
        assert_eq!(path.drive().map(|d| d.letter()), expected_drive, "{}", case.name);
        assert_eq!(path.has_trailing_separator(), case.trailing, "{}", case.name);
    }
}

#[test]
fn test_windows_create_from_drive_and_atoms() {
    let factory = WindowsPathFactory::with_default_drive('X').unwrap();
    for case in WINDOWS_CASES {
        let path = factory
            .create_from_drive_and_atoms(
                case.atoms.iter().copied(),
                case.drive,
                Some(case.absolute),
                Some(case.trailing),
            )
            .unwrap();
        assert_eq!(path.atoms(), case.atoms, "{}", case.name);
        assert_eq!(path.is_absolute(), case.absolute, "{}", case.name);
        assert_eq!(path.drive().map(|d| d.letter()), case.drive, "{}", case.name);
        assert_eq!(path.has_trailing_separator(), case.trailing, "{}", case.name);
    }
}

#[test]
fn test_windows_factory_defaults() {
    assert!(WindowsPathFactory::new().default_drive().is_none());

    let path = WindowsPathFactory::with_default_drive('X')
        .unwrap()
        .create_from_atoms(Vec::<String>::new(), None, None)
        .unwrap();
    assert!(path.is_absolute());
    assert!(!path.has_trailing_separator());
}

#[test]
fn test_windows_relative_cannot_start_with_drive_atom() {
    let factory = WindowsPathFactory::new();
    let result = factory.create_from_atoms(["C:", "x"], Some(false), None);
    assert!(matches!(result, Err(Error::InvalidPathState { .. })));

    let path = factory.create_from_atoms([".", "C:", "x"], Some(false), None).unwrap();
    assert_eq!(windows(&path.to_string()), path);
}

#[test]
fn test_windows_relative_with_drive_fails() {
    let result = WindowsPathFactory::new().create_from_drive_and_atoms(
        Vec::<String>::new(),
        Some('C'),
        Some(false),
        None,
    );
    assert!(matches!(result, Err(Error::InvalidPathState { .. })));
}

#[test]
fn test_generic_create() {
    for case in GENERIC_CASES {
        let path = generic(case.input);
        assert_eq!(path.atoms(), case.atoms, "{}", case.name);
        assert_eq!(path.is_absolute(), case.absolute, "{}", case.name);
        assert_eq!(path.drive(), None, "{}", case.name);
        assert_eq!(path.has_trailing_separator(), case.trailing, "{}", case.name);
    }
}

#[test]
fn test_generic_create_from_atoms() {
    let factory = GenericPathFactory::new();
    for case in GENERIC_CASES {
        let path = factory
            .create_from_atoms(case.atoms.iter().copied(), Some(case.absolute), Some(case.trailing))
            .unwrap();
        assert_eq!(path, generic(case.input), "{}", case.name);
    }
}

#[test]
fn test_kinds() {
    assert_eq!(generic("/a").kind(), PathKind::Absolute);
    assert_eq!(generic("a").kind(), PathKind::Relative);
    assert_eq!(windows("a").kind(), PathKind::WindowsRelative);
    assert_eq!(windows("/a").kind(), PathKind::WindowsAbsolute { drive: None });
}

#[test]
fn test_rendering_is_canonical() {
    for (input, expected) in [
        ("//foo//bar//", "/foo/bar/"),
        ("", "."),
        ("./", "./"),
        ("a/./b", "a/./b"),
    ] {
        assert_eq!(generic(input).to_string(), expected, "{input}");
    }
    for (input, expected) in [
        ("C:", "C:/"),
        ("c:\\x", "c:/x"),
        ("\\\\foo", "/foo"),
        ("foo\\", "foo/"),
    ] {
        assert_eq!(windows(input).to_string(), expected, "{input}");
    }
}
