use thiserror::Error;

use crate::speech::Capability;

pub type Result<T, E = LevoError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LevoError {
    /// Empty or whitespace-only submission. The turn is dropped.
    #[error("input is empty after trimming")]
    InvalidInput,

    #[error("{0} is not available on this host")]
    CapabilityUnavailable(Capability),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("playback failed: {0}")]
    Playback(String),

    #[error("interaction controller is no longer running")]
    ControllerClosed,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
