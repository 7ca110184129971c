use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, VerifierError>;

#[derive(thiserror::Error, Debug)]
pub enum VerifierError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service responded with {status} for {endpoint}")]
    Status { endpoint: String, status: StatusCode },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing to analyze: article text is empty")]
    EmptyContent,
}
