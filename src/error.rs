//! Error types for randomcard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Upstream record has no usable `name`. The message is part of the
    /// public response body and must stay exactly `Error`.
    #[error("Error")]
    MissingName,

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected upstream payload: {0}")]
    UnexpectedPayload(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
