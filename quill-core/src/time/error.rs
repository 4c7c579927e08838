use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("invalid {field} '{input}': {reason}")]
    Parse {
        field: String,
        input: String,
        reason: String,
    },
}

impl TimeFormatError {
    pub fn parse(field: &str, input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            field: field.to_owned(),
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("unknown time zone '{zone}' (expected local, utc or an offset like +02:00)")]
    Unknown { zone: String },
}
