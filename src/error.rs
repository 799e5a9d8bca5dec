use thiserror::Error;

/// Errors returned by image generation operations.
#[derive(Error, Debug)]
pub enum DalleError {
    /// The prompt was empty or whitespace-only. Rejected before any I/O.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// Network-level request failure with context.
    #[error("{context}: {source}")]
    Network {
        context: String,
        source: reqwest::Error,
    },

    /// The backend returned a non-success HTTP status.
    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("response body was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response JSON had no string `photo` field. Carries the full
    /// received object for diagnostics.
    #[error("response missing 'photo' field, got: {0}")]
    MissingPhoto(String),

    /// The `photo` field was not valid standard base64.
    #[error("failed to decode 'photo' as base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Failed to persist the decoded image bytes.
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),

    /// Anything not otherwise classified.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DalleError>;
