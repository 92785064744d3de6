//! Error types for the mock store domain.

/// Failure to interpret a collect request body
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Body is valid JSON but not an object
    #[error("Invalid JSON: expected an object, found {0}")]
    NotAnObject(&'static str),
}

impl CollectError {
    /// Error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "MALFORMED_JSON",
            Self::NotAnObject(_) => "UNEXPECTED_JSON_TYPE",
        }
    }
}
