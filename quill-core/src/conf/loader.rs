use crate::conf::ConfigError;
use crate::conf::lower::lower_config;
use crate::conf::parse::parse_config;
use crate::conf::validation::{ValidatedConfig, validate_spec};
use std::path::{Path, PathBuf};

/// File looked up when the config path is a directory.
pub const CONFIG_FILE: &str = "quill.hcl";

pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let path = resolve_config_path(path);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let spec = parse_config(&path)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    let report = validate_spec(&spec);
    if !report.errors.is_empty() {
        return Err(ConfigError::Validation { report });
    }

    //--------------------------------------------------------------------------
    // Build runtime config
    //--------------------------------------------------------------------------
    let config = lower_config(spec);

    Ok(ValidatedConfig { config, report })
}
