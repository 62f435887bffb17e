use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Everything that can go wrong on the model-backed path. Callers are
/// expected to log these and fall back to the rule-based translator.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{var} environment variable is not set")]
    MissingApiKey { var: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("{backend} API error (status {status}): {message}")]
    Api {
        backend: &'static str,
        status: u16,
        message: String,
    },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("model returned an empty answer")]
    EmptyResponse,

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("could not read instructions from {path}: {source}")]
    Instructions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ModelError::Malformed(err.to_string())
        } else {
            ModelError::Network(err.to_string())
        }
    }
}
