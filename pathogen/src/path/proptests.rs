//! Property-based tests for path values.
//!
//! The normalize module already has property tests for normalization.
//! This module covers parsing, joins, relationships and the resolver.

use super::relationship::PathRelationship;
use super::resolver::PathResolver;
use super::types::{Drive, PathKind, Platform, PurePath};
use crate::factory::{collapse_self, GenericPathFactory, PathFactory, WindowsPathFactory};
use proptest::prelude::*;

fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-z0-9_-]{1,8}(\\.[a-z]{1,3})?",
        1 => "[A-Za-z]:[a-z0-9]{0,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn plain_atoms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9_-]{1,8}", 0..6)
}

fn kind_strategy() -> impl Strategy<Value = PathKind> {
    prop_oneof![
        Just(PathKind::Absolute),
        Just(PathKind::Relative),
        Just(PathKind::WindowsRelative),
        prop::option::of(prop::char::range('A', 'Z')).prop_map(|letter| {
            PathKind::WindowsAbsolute {
                drive: letter.and_then(|c| Drive::try_from(c).ok()),
            }
        }),
    ]
}

fn path_strategy() -> impl Strategy<Value = PurePath> {
    (
        kind_strategy(),
        prop::collection::vec(atom_strategy(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(kind, atoms, trailing)| {
            let trailing = trailing && !atoms.is_empty();
            let atoms = if kind.is_absolute() { atoms } else { collapse_self(atoms) };
            PurePath::from_validated(kind, atoms, trailing)
        })
}

fn relative_strategy(platform: Platform) -> impl Strategy<Value = PurePath> {
    (prop::collection::vec(atom_strategy(), 0..4), any::<bool>()).prop_map(
        move |(atoms, trailing)| {
            PurePath::from_validated(PathKind::relative(platform), atoms, trailing)
        },
    )
}

fn parse(path: &PurePath) -> PurePath {
    let rendered = path.to_string();
    match path.platform() {
        Platform::Generic => GenericPathFactory::new().create(&rendered),
        Platform::Windows => WindowsPathFactory::new().create(&rendered),
    }
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rendering then parsing gives the same path back.
    #[test]
    fn string_round_trip(path in path_strategy()) {
        prop_assert_eq!(parse(&path), path);
    }

    // Windows parsing accepts backslashes wherever slashes are emitted.
    #[test]
    fn windows_backslashes_equivalent(atoms in plain_atoms_strategy()) {
        let factory = WindowsPathFactory::new();
        let forward = format!("C:/{}", atoms.join("/"));
        let backward = format!("C:\\{}", atoms.join("\\"));
        prop_assert_eq!(factory.create(&forward).unwrap(), factory.create(&backward).unwrap());
    }

    // Joining relative paths is associative.
    #[test]
    fn join_associative(
        base in path_strategy().prop_filter("generic", |p| p.platform() == Platform::Generic),
        b in relative_strategy(Platform::Generic),
        c in relative_strategy(Platform::Generic),
    ) {
        let left = base.join(&b).unwrap().join(&c).unwrap();
        let right = base.join(&b.join(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    // Joining an atom and taking the parent restores the atoms.
    #[test]
    fn join_atom_then_parent(path in path_strategy(), atom in "[a-z]{1,8}") {
        let parent = path.join_atom(&atom).unwrap().parent().unwrap();
        prop_assert_eq!(parent.atoms(), path.atoms());
        prop_assert_eq!(parent.kind(), path.kind());
    }

    // Every path is the same as itself.
    #[test]
    fn relationship_reflexive(path in path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Swapping the arguments mirrors the relationship.
    #[test]
    fn relationship_antisymmetric(a in path_strategy(), b in path_strategy()) {
        let forward = PathRelationship::between(&a, &b);
        let backward = PathRelationship::between(&b, &a);
        let mirrored = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, mirrored);
    }

    // A path is an ancestor of anything built by joining plain atoms onto it.
    #[test]
    fn joined_paths_are_descendants(
        path in path_strategy(),
        extra in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let child = path.join_atoms(extra).unwrap();
        prop_assert!(path.is_ancestor_of(&child));
    }

    // relative_to and resolve are inverse on absolute paths.
    #[test]
    fn relative_to_inverts_resolve(
        target in plain_atoms_strategy(),
        base in plain_atoms_strategy(),
    ) {
        let factory = GenericPathFactory::new();
        let target = factory.create_from_atoms(target, None, None).unwrap();
        let base = factory.create_from_atoms(base, None, None).unwrap();

        let relative = target.relative_to(&base).unwrap();
        prop_assert!(relative.is_relative());
        prop_assert_eq!(PathResolver::new().resolve(&base, &relative).unwrap(), target);
    }
}
