mod error;
mod loader;
mod lower;
mod parse;
pub mod types;
pub(crate) mod validation;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE, load_config, resolve_config_path};
pub use types::{ConfigSpec, LogFormat, LoggingConfig, LoggingSpec, Origin, RuntimeConfig};
pub use validation::{Severity, ValidatedConfig, ValidationIssue, ValidationReport};
