use crate::conf::ConfigError;
use crate::conf::types::{ConfigSpec, Origin};
use std::fs;
use std::path::Path;

pub fn parse_config(path: &Path) -> Result<ConfigSpec, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut parsed: ConfigSpec = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    //-------------------------------------------------------------------------
    // Inject origin metadata
    //-------------------------------------------------------------------------
    parsed.logging.origin = Origin::new(path, "logging", None);
    parsed.aliases_origin = Origin::new(path, "aliases", None);

    Ok(parsed)
}
