use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The one failure a page fetch can produce.
///
/// Transport problems and undecodable bodies share this type and differ only
/// in their message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Cause is reachable through `source()`, not repeated in the message.
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::with_source("failed to fetch data", source)
    }

    pub fn invalid_json(host: &str, source: serde_json::Error) -> Self {
        Self::with_source(format!("received invalid JSON from {host}"), source)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
