use crate::conf::types::Origin;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file as written by the operator, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSpec {
    #[serde(default)]
    pub logging: LoggingSpec,

    /// Host aliases: hostnames, URLs or regexes.
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(skip)]
    pub aliases_origin: Origin,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSpec {
    /// Short marker opening every log line.
    #[serde(default = "default_tag")]
    pub tag: String,

    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    /// `local`, `utc` or a fixed offset such as `+02:00`.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// `prefix` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Write daily-rotated files here instead of stdout.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(skip)]
    pub origin: Origin,
}

impl Default for LoggingSpec {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            level: default_level(),
            zone: default_zone(),
            format: default_format(),
            directory: None,
            origin: Origin::default(),
        }
    }
}

fn default_tag() -> String {
    "qul".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_zone() -> String {
    "local".to_string()
}

fn default_format() -> String {
    "prefix".to_string()
}
