//! Output formatter implementations.

use super::{OutputFormatter, PathReport};
use crate::Result;

/// Formatter for human-readable output.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let optional = |value: Option<&str>| value.unwrap_or("-").to_string();

        let mut lines = vec![
            format!("path: {}", report.path),
            format!("platform: {}", report.platform),
            format!("absolute: {}", report.absolute),
        ];
        if let Some(drive) = report.drive {
            lines.push(format!("drive: {drive}"));
        }
        lines.push(format!("atoms: [{}]", report.atoms.join(", ")));
        lines.push(format!(
            "trailing separator: {}",
            report.has_trailing_separator
        ));
        lines.push(format!("name: {}", report.name));
        lines.push(format!(
            "extension: {}",
            optional(report.extension.as_deref())
        ));
        lines.push(format!("name prefix: {}", report.name_prefix));
        lines.push(format!(
            "name suffix: {}",
            optional(report.name_suffix.as_deref())
        ));
        lines.push(format!("normalized: {}", report.normalized));

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let yaml = serde_yaml::to_string(report)?;
        Ok(yaml.trim_end().to_string())
    }
}
