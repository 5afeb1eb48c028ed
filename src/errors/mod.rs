//! Error handling module for the sitecap backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const MALFORMED_RANGE: &str = "MALFORMED_RANGE";
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    pub const ATTRIBUTE_PARSE: &str = "ATTRIBUTE_PARSE";
    pub const SESSION_NOT_FOUND: &str = "SESSION_NOT_FOUND";
    pub const SUBMISSION_FAILED: &str = "SUBMISSION_FAILED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Path-qualified parse failure for one embedded attribute bag.
///
/// `uri` is the slash-joined field path from the document root, e.g.
/// `sites/0/storages/1/areas/0/other_attributes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeError {
    pub uri: String,
    pub message: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// A downtime `date_range` does not split into two parsable timestamps
    MalformedRange(String),
    /// The locator found no resource for an add/edit
    ResourceNotFound(String),
    /// Embedded attribute bags failed to parse; blocks submission
    AttributeParse(Vec<AttributeError>),
    /// No edit session with the given id
    SessionNotFound(String),
    /// The external persistence collaborator reported failure
    Submission(String),
    /// Validation error
    Validation(String),
    /// Bad request
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedRange(_) => StatusCode::BAD_REQUEST,
            AppError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::AttributeParse(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Submission(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedRange(_) => codes::MALFORMED_RANGE,
            AppError::ResourceNotFound(_) => codes::RESOURCE_NOT_FOUND,
            AppError::AttributeParse(_) => codes::ATTRIBUTE_PARSE,
            AppError::SessionNotFound(_) => codes::SESSION_NOT_FOUND,
            AppError::Submission(_) => codes::SUBMISSION_FAILED,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    ///
    /// For accumulated attribute errors only the first is rendered; the full
    /// list travels in the response details.
    pub fn message(&self) -> String {
        match self {
            AppError::MalformedRange(msg) => msg.clone(),
            AppError::ResourceNotFound(msg) => msg.clone(),
            AppError::AttributeParse(errors) => match errors.first() {
                Some(first) => format!(
                    "The field {} failed validation: {}",
                    first.uri, first.message
                ),
                None => "attribute validation failed".to_string(),
            },
            AppError::SessionNotFound(msg) => msg.clone(),
            AppError::Submission(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::AttributeParse(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_parse_message_uses_first_error() {
        let err = AppError::AttributeParse(vec![
            AttributeError {
                uri: "sites/0/other_attributes".to_string(),
                message: "expected value at line 1 column 2".to_string(),
            },
            AttributeError {
                uri: "sites/1/other_attributes".to_string(),
                message: "unexpected end of input".to_string(),
            },
        ]);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().starts_with("The field sites/0/other_attributes"));

        let body = ErrorResponse::new(&err);
        let details = body.error.details.expect("details should carry all errors");
        assert_eq!(details.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ResourceNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Submission("upstream".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::MalformedRange("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
