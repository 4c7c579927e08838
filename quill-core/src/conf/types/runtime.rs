use crate::alias::AliasSet;
use crate::time::Zone;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub logging: LoggingConfig,
    pub aliases: AliasSet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One line per event behind the cached timestamp prefix.
    #[default]
    Prefix,
    Json,
}

impl LogFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "prefix" => Some(LogFormat::Prefix),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Prefix => f.write_str("prefix"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub tag: String,
    pub level: String,
    pub zone: Zone,
    pub format: LogFormat,
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tag: "qul".to_string(),
            level: "info".to_string(),
            zone: Zone::Local,
            format: LogFormat::Prefix,
            directory: None,
        }
    }
}
