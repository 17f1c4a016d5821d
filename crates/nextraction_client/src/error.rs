use nextraction_core::{FailureKind, RequestFailure};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid api base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("Error {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps the client error onto the failure taxonomy the views understand.
    pub fn to_failure(&self) -> RequestFailure {
        match self {
            ApiError::HttpStatus { status, body } => {
                RequestFailure::new(FailureKind::HttpStatus(*status), body.clone())
            }
            ApiError::Decode(message) => RequestFailure::new(FailureKind::Decode, message.clone()),
            ApiError::InvalidBaseUrl { .. } | ApiError::Network(_) | ApiError::Timeout(_) => {
                RequestFailure::new(FailureKind::Network, self.to_string())
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout(err.to_string());
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}
