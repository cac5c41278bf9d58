use thiserror::Error;

/// Errors raised while building or validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("win threshold {value}% is out of range [{min}, {max}]")]
    ThresholdOutOfRange { value: u32, min: u32, max: u32 },

    #[error("win threshold {input:?} is not a whole number")]
    ThresholdNotANumber {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigError>;
