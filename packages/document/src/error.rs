use thiserror::Error;

/// Errors that can occur while ingesting a contract document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document error: {0}")]
    Generic(String),
}

impl From<String> for DocumentError {
    fn from(s: String) -> Self {
        DocumentError::Generic(s)
    }
}

impl From<&str> for DocumentError {
    fn from(s: &str) -> Self {
        DocumentError::Generic(s.to_string())
    }
}
