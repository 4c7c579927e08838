use crate::alias::parse_alias;
use crate::conf::types::{ConfigSpec, LogFormat, LoggingSpec};
use crate::conf::validation::ValidationReport;
use crate::time::Zone;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

pub fn validate_spec(spec: &ConfigSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_logging(&spec.logging, &mut report);
    validate_aliases(spec, &mut report);

    report
}

fn validate_logging(logging: &LoggingSpec, report: &mut ValidationReport) {
    let origin = &logging.origin;

    if logging.tag.is_empty() || logging.tag.chars().any(|c| c.is_whitespace() || c.is_control()) {
        report.invalid_log_tag(&logging.tag, origin);
    }

    if let Err(e) = EnvFilter::try_new(&logging.level) {
        report.invalid_log_level(&logging.level, &e.to_string(), origin);
    }

    if logging.zone.parse::<Zone>().is_err() {
        report.unknown_time_zone(&logging.zone, origin);
    }

    if LogFormat::from_name(&logging.format).is_none() {
        report.unknown_log_format(&logging.format, origin);
    }

    if let Some(dir) = &logging.directory {
        if !dir.exists() {
            report.log_directory_does_not_exist(dir, origin);
        } else if !dir.is_dir() {
            report.log_directory_not_a_dir(dir, origin);
        }
    }
}

fn validate_aliases(spec: &ConfigSpec, report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (i, alias) in spec.aliases.iter().enumerate() {
        let origin = spec.aliases_origin.at(i);

        if !seen.insert(alias.as_str()) {
            report.duplicate_alias(alias, &origin);
            continue;
        }

        if parse_alias(alias).is_empty() {
            report.alias_rejected(alias, &origin);
        }
    }
}
