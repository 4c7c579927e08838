mod origin;
mod runtime;
mod specification;

pub use origin::Origin;
pub use runtime::{LogFormat, LoggingConfig, RuntimeConfig};
pub use specification::{ConfigSpec, LoggingSpec};
