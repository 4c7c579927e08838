use crate::conf::types::Origin;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    fn error(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            origin: origin.clone(),
            help,
        });
    }

    fn warning(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            origin: origin.clone(),
            help,
        });
    }

    fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        })
    }

    pub fn render_plain(&self, out: &mut impl Write) -> fmt::Result {
        for issue in self.issues() {
            writeln!(
                out,
                "{}: {}: {}",
                issue.origin,
                issue.severity.label(),
                issue.message
            )?;

            if let Some(help) = &issue.help {
                writeln!(out, "  help: {}", help)?;
            }
        }
        Ok(())
    }

    pub fn render_pretty(&self, out: &mut impl Write) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(
                out,
                "configuration validation failed ({} errors, {} warnings)\n",
                self.errors.len(),
                self.warnings.len()
            )?;
        }

        let mut by_file: BTreeMap<&Path, Vec<&ValidationIssue>> = BTreeMap::new();
        for issue in self.issues() {
            by_file.entry(issue.origin.file()).or_default().push(issue);
        }

        for (file, issues) in by_file {
            writeln!(out, "{}", file.display())?;

            for issue in issues {
                match issue.severity {
                    Severity::Error => {
                        writeln!(out, "  {}: {}", "error".red().bold(), issue.message)?;
                    }
                    Severity::Warning => {
                        writeln!(out, "  {}: {}", "warning".yellow().bold(), issue.message)?;
                    }
                }

                if let Some(help) = &issue.help {
                    writeln!(out, "  {}: {}", "help".cyan(), help)?;
                }

                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Logging Spec Validation
impl ValidationReport {
    pub fn invalid_log_tag(&mut self, tag: &str, origin: &Origin) {
        self.error(
            format!("invalid log tag: {:?}", tag),
            origin,
            Some("Use a short, non-empty tag without whitespace, e.g. \"qul\".".to_string()),
        );
    }

    pub fn invalid_log_level(&mut self, level: &str, reason: &str, origin: &Origin) {
        self.error(
            format!("invalid log level '{}': {}", level, reason),
            origin,
            None,
        );
    }

    pub fn unknown_time_zone(&mut self, zone: &str, origin: &Origin) {
        self.error(
            format!("unknown time zone: {}", zone),
            origin,
            Some("Use \"local\", \"utc\" or a fixed offset such as \"+02:00\".".to_string()),
        );
    }

    pub fn unknown_log_format(&mut self, format: &str, origin: &Origin) {
        self.error(
            format!("unknown log format: {}", format),
            origin,
            Some("Use \"prefix\" or \"json\".".to_string()),
        );
    }

    pub fn log_directory_does_not_exist(&mut self, dir: &Path, origin: &Origin) {
        self.error(
            format!("log directory does not exist: {}", dir.display()),
            origin,
            None,
        );
    }

    pub fn log_directory_not_a_dir(&mut self, dir: &Path, origin: &Origin) {
        self.error(
            format!("log directory is not a directory: {}", dir.display()),
            origin,
            None,
        );
    }
}

/// Host Alias Spec Validation
impl ValidationReport {
    pub fn alias_rejected(&mut self, alias: &str, origin: &Origin) {
        self.warning(
            format!("host alias is neither a hostname nor a valid regex: {}", alias),
            origin,
            Some("The alias is ignored. Use a hostname, a URL or a valid regular expression.".to_string()),
        );
    }

    pub fn duplicate_alias(&mut self, alias: &str, origin: &Origin) {
        self.warning(format!("duplicate host alias: {}", alias), origin, None);
    }
}
