//! Error types for the feed service

use pulse_types::PulseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Pulse(#[from] PulseError),
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::ConfigFile(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for FeedError {
    fn from(err: toml::de::Error) -> Self {
        FeedError::ConfigFile(err.to_string())
    }
}

impl From<toml::ser::Error> for FeedError {
    fn from(err: toml::ser::Error) -> Self {
        FeedError::SerializationError(err.to_string())
    }
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
