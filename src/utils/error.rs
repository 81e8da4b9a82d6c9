use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown customer tier: {tag:?}")]
    UnknownTierError { tag: String },

    #[error("{worker} does not support {capability}")]
    UnsupportedCapabilityError {
        worker: &'static str,
        capability: &'static str,
    },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, KataError>;
