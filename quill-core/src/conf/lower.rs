use crate::alias::AliasSet;
use crate::conf::types::{ConfigSpec, LogFormat, LoggingConfig, RuntimeConfig};
use std::collections::HashSet;

/// Turn a spec that passed `validate_spec` into runtime configuration.
pub fn lower_config(spec: ConfigSpec) -> RuntimeConfig {
    let logging = spec.logging;
    let mut seen = HashSet::new();
    let unique = spec.aliases.iter().filter(|a| seen.insert(a.as_str()));
    let (aliases, _rejected) = AliasSet::compile(unique);

    RuntimeConfig {
        logging: LoggingConfig {
            zone: logging.zone.parse().unwrap_or_default(),
            format: LogFormat::from_name(&logging.format).unwrap_or_default(),
            tag: logging.tag,
            level: logging.level,
            directory: logging.directory,
        },
        aliases,
    }
}
