use crate::conf::types::RuntimeConfig;
use crate::conf::validation::report::ValidationReport;

#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: RuntimeConfig,
    /// Warnings only; errors abort loading.
    pub report: ValidationReport,
}
