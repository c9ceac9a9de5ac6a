//! Command to show how two paths relate.

use crate::error::CliError;
use crate::utils::{load_factory, parse_path, GlobalOptions};
use clap::Args;
use pathogen::{Error as LibError, OutputFormat, PathRelationship};
use serde::Serialize;

/// Show whether one path is an ancestor, descendant or the same as another.
#[derive(Args)]
pub struct RelateCommand {
    /// First path
    #[arg(value_name = "PATH1")]
    pub path1: String,

    /// Second path
    #[arg(value_name = "PATH2")]
    pub path2: String,

    /// Fail with exit code 1 unless the paths relate this way
    #[arg(long, value_enum, value_name = "RELATIONSHIP")]
    pub expect: Option<PathRelationship>,
}

#[derive(Serialize)]
struct RelationReport {
    path1: String,
    path2: String,
    relationship: PathRelationship,
}

impl RelateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, factory) = load_factory(global)?;
        let path1 = parse_path(&factory, &self.path1)?;
        let path2 = parse_path(&factory, &self.path2)?;

        let relationship = PathRelationship::between(&path1, &path2);

        if let Some(expected) = self.expect {
            if expected != relationship {
                return Err(CliError::SemanticFailure(format!(
                    "expected {expected}, but {}",
                    relationship.description(&path1, &path2)
                )));
            }
        }

        let report = RelationReport {
            path1: path1.to_string(),
            path2: path2.to_string(),
            relationship,
        };
        let output = match config.output_format() {
            OutputFormat::Text => relationship.description(&path1, &path2),
            OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(LibError::from)?,
            OutputFormat::Yaml => serde_yaml::to_string(&report)
                .map_err(LibError::from)?
                .trim_end()
                .to_string(),
        };

        if !global.quiet || self.expect.is_none() {
            println!("{output}");
        }
        Ok(())
    }
}
