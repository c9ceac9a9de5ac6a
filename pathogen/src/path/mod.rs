//! Immutable path values and the algorithms that derive new ones.
//!
//! # Key Concepts
//!
//! ## Atoms
//!
//! A path is an ordered list of atoms, each a non-empty string with no
//! separator in it, plus a cosmetic trailing-separator flag. The leftmost
//! atom is closest to the root.
//!
//! ## Variants
//!
//! [`PathKind`] is one of four shapes: absolute or relative, for the
//! generic (POSIX) or Windows grammar. Only Windows absolute paths carry a
//! [`Drive`].
//!
//! ## Normalization
//!
//! Normalization resolves `.` and `..` atoms. It is never applied
//! implicitly by joins; relationships and the resolver normalize their
//! inputs.
//!
//! # Examples
//!
//! ```
//! use pathogen::{GenericPathFactory, PathFactory};
//!
//! let factory = GenericPathFactory::new();
//! let path = factory.create("/var/log/../www/index.html").unwrap();
//!
//! assert_eq!(path.extension(), Some("html"));
//! assert_eq!(path.normalize().to_string(), "/var/www/index.html");
//! assert_eq!(path.parent().unwrap().to_string(), "/var/log/../www");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use pathogen::{GenericPathFactory, PathFactory, PathRelationship};
//!
//! let factory = GenericPathFactory::new();
//! let parent = factory.create("/home/user").unwrap();
//! let child = factory.create("/home/user/project").unwrap();
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod atom;
mod join;
mod name;
pub mod normalize;
pub mod relationship;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use resolver::PathResolver;
pub use types::{Drive, PathKind, Platform, PurePath};
