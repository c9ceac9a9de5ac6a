//! Configuration system for pathogen.
//!
//! Settings choose the path grammar, the default Windows drive, and how
//! reports are rendered.
//!
//! # Configuration Precedence
//!
//! Sources are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHOGEN_*`)
//! 3. Project config (the nearest `pathogen.yaml`)
//! 4. User config (`~/.pathogen/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathogen::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("platform: {}", config.platform());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathogen::config::{Config, ConfigBuilder, PlatformChoice};
//! use pathogen::{PathFactory, Platform};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         platform: Some(PlatformChoice::Windows),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.factory().platform(), Platform::Windows);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, PlatformChoice};
pub use validator::ConfigValidator;
