//! CLI command implementations.
//!
//! - `inspect`: Show everything known about a path
//! - `normalize`: Resolve `.` and `..` atoms
//! - `join`: Append relative paths to a base path
//! - `parent`: Show the parent of a path
//! - `resolve`: Resolve a path against an absolute base
//! - `relate`: Show how two paths relate
//! - `relative_to`: Express a path relative to a base
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod inspect;
pub mod join;
pub mod normalize;
pub mod parent;
pub mod relate;
pub mod relative_to;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use relate::RelateCommand;
pub use relative_to::RelativeToCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
