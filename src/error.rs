//! Common error type and result alias.
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{service} returned {status}: {body}")]
    Upstream {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("unexpected response from {service}: {detail}")]
    UnexpectedResponse { service: &'static str, detail: String },

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("prompt construction error: {0}")]
    PromptConstruction(String),

    #[error("catalog has no {0} to choose from")]
    EmptyCatalog(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
