#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathogen
//!
//! Pure, platform-aware path values.
//!
//! A path is an immutable list of atoms plus a variant (absolute or
//! relative, generic or Windows) and a trailing-separator flag. Nothing in
//! this crate touches the filesystem: every operation derives a new path
//! value from existing ones.
//!
//! ## Core Types
//!
//! - [`PurePath`], [`PathKind`], [`Platform`] and [`Drive`]: path values
//! - [`PathFactory`] and its implementations: parsing and construction
//! - [`PathRelationship`] and [`PathResolver`]: comparing and resolving
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathogen::{GenericPathFactory, PathFactory};
//!
//! let factory = GenericPathFactory::new();
//! let path = factory.create("/foo/bar.tar.gz").unwrap();
//!
//! assert_eq!(path.name(), "bar.tar.gz");
//! assert_eq!(path.strip_extension().unwrap().to_string(), "/foo/bar.tar");
//! assert_eq!(path.parent().unwrap().join_atom("baz").unwrap().to_string(), "/foo/baz");
//! ```
//!
//! Windows paths accept both separators and always render with `/`:
//!
//! ```
//! use pathogen::{PathFactory, WindowsPathFactory};
//!
//! let path = WindowsPathFactory::new().create("C:\\Users\\me\\").unwrap();
//! assert_eq!(path.to_string(), "C:/Users/me/");
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use factory::{GenericPathFactory, PathFactory, PlatformPathFactory, WindowsPathFactory};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, PathReport};
pub use path::{Drive, PathKind, PathRelationship, PathResolver, Platform, PurePath};
