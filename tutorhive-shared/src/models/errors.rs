use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side error taxonomy for REST interactions.
///
/// Every variant is local to one interaction and recoverable by retrying the
/// action; nothing here is fatal to the application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The action requires a signed-in identity and none is present.
    #[error("sign in required")]
    Unauthenticated,

    /// The remote entity does not exist, e.g. a deleted tutor id.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The request payload was rejected by the backend.
    #[error("{0}")]
    ValidationFailed(String),

    /// The request could not complete at the transport level.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// A non-2xx status outside the mapped set.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Wire error envelope returned by the backend on failed requests.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,
    /// Optional additional details about the error.
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_messages() {
        assert_eq!(ApiError::Unauthenticated.to_string(), "sign in required");
        assert_eq!(ApiError::NotFound("tutor").to_string(), "tutor not found");
        assert_eq!(
            ApiError::ValidationFailed("price must be positive".to_string()).to_string(),
            "price must be positive"
        );
        assert_eq!(
            ApiError::UnexpectedStatus(502).to_string(),
            "unexpected status 502"
        );
    }

    #[test]
    fn error_response_display() {
        assert_eq!(ErrorResponse::new("rejected").to_string(), "rejected");
        assert_eq!(
            ErrorResponse::with_details("rejected", "price must be positive").to_string(),
            "rejected: price must be positive"
        );
    }

    #[test]
    fn error_response_missing_details_deserializes() {
        let envelope: ErrorResponse = serde_json::from_str(r#"{"message":"bad request"}"#).unwrap();
        assert_eq!(envelope, ErrorResponse::new("bad request"));
    }
}
