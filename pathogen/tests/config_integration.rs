//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked `#[serial]`;
//! environment variables are process-global.

mod common;

use common::write_file;
use pathogen::config::{Config, ConfigBuilder, PlatformChoice, PROJECT_CONFIG_FILE};
use pathogen::{Error, OutputFormat, PathFactory, Platform};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 3] = [
    "PATHOGEN_PLATFORM",
    "PATHOGEN_DEFAULT_DRIVE",
    "PATHOGEN_OUTPUT_FORMAT",
];

/// Clears the `PATHOGEN_*` variables, sets `vars`, runs `f`, then restores.
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let saved: Vec<_> = ENV_VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
    for key in ENV_VARS {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }
    f();
    for (key, value) in saved {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }
}

struct Dirs {
    _user: TempDir,
    _project: TempDir,
    user_dir: std::path::PathBuf,
    project_dir: std::path::PathBuf,
}

fn dirs(user_yaml: Option<&str>, project_yaml: Option<&str>) -> Dirs {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    if let Some(yaml) = user_yaml {
        write_file(user.path(), "config.yaml", yaml);
    }
    if let Some(yaml) = project_yaml {
        write_file(project.path(), PROJECT_CONFIG_FILE, yaml);
    }
    Dirs {
        user_dir: user.path().to_path_buf(),
        project_dir: project.path().to_path_buf(),
        _user: user,
        _project: project,
    }
}

fn builder(dirs: &Dirs) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_config_dir(&dirs.user_dir)
        .with_working_dir(&dirs.project_dir)
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let dirs = dirs(
        Some("platform: generic\noutput_format: text\n"),
        Some("platform: windows\ndefault_drive: D\noutput_format: json\n"),
    );

    with_env(&[("PATHOGEN_OUTPUT_FORMAT", "yaml")], || {
        let config = builder(&dirs)
            .with_config(Config {
                default_drive: Some('Z'.try_into().unwrap()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.platform, Some(PlatformChoice::Windows));
        assert_eq!(config.output_format(), OutputFormat::Yaml);
        assert_eq!(config.default_drive.map(|d| d.letter()), Some('Z'));
    });
}

#[test]
#[serial]
fn test_project_config_found_from_subdirectory() {
    let dirs = dirs(None, Some("platform: windows\n"));
    let nested = dirs.project_dir.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    with_env(&[], || {
        let config = ConfigBuilder::new()
            .with_config_dir(&dirs.user_dir)
            .with_working_dir(&nested)
            .build()
            .unwrap();
        assert_eq!(config.platform(), Platform::Windows);
    });
}

#[test]
#[serial]
fn test_factory_from_configuration() {
    let dirs = dirs(None, Some("platform: windows\ndefault_drive: Q\n"));

    with_env(&[], || {
        let factory = builder(&dirs).build().unwrap().factory();
        let path = factory.create_from_atoms(["data"], None, None).unwrap();
        assert_eq!(path.to_string(), "Q:/data");
        assert_eq!(factory.create("data").unwrap().to_string(), "data");
    });
}

#[test]
#[serial]
fn test_env_platform_switches_grammar() {
    let dirs = dirs(None, None);

    with_env(&[("PATHOGEN_PLATFORM", "generic")], || {
        let factory = builder(&dirs).build().unwrap().factory();
        let path = factory.create("a\\b").unwrap();
        assert_eq!(path.atoms(), ["a\\b"]);
    });

    with_env(&[("PATHOGEN_PLATFORM", "windows")], || {
        let factory = builder(&dirs).build().unwrap().factory();
        let path = factory.create("a\\b").unwrap();
        assert_eq!(path.atoms(), ["a", "b"]);
    });
}

#[test]
#[serial]
fn test_invalid_env_is_reported() {
    let dirs = dirs(None, None);
    with_env(&[("PATHOGEN_DEFAULT_DRIVE", "9")], || {
        let result = builder(&dirs).build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    });
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let dirs = dirs(None, None);
    with_env(&[("PATHOGEN_OUTPUT_FORMAT", "json")], || {
        let config = builder(&dirs).skip_env().build().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);
    });
}

#[test]
fn test_invalid_yaml_is_reported() {
    let dirs = dirs(None, Some("platform: [windows\n"));
    let result = builder(&dirs).skip_env().build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_unknown_field_is_reported() {
    let dirs = dirs(Some("colour: blue\n"), None);
    let result = builder(&dirs).skip_env().build();
    assert!(result.is_err());
}

#[test]
fn test_generic_with_drive_fails_validation() {
    let dirs = dirs(Some("platform: generic\ndefault_drive: C\n"), None);
    match builder(&dirs).skip_env().build() {
        Err(Error::Validation { field, .. }) => assert_eq!(field, "default_drive"),
        other => panic!("expected validation error, got {other:?}"),
    }
}
