//! Mapping from crate errors to HTTP responses.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::DocVerifyError;

use super::types::ErrorResponse;

/// An error rendered as a JSON [`ErrorResponse`].
///
/// - `Validation` → 422 (missing upload, malformed multipart body)
/// - everything else, OCR provider failures included → 500
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

fn error_type(error: &DocVerifyError) -> &'static str {
    match error {
        DocVerifyError::Io(_) => "IoError",
        DocVerifyError::Ocr { .. } => "OcrError",
        DocVerifyError::Credentials { .. } => "CredentialsError",
        DocVerifyError::Validation { .. } => "ValidationError",
        DocVerifyError::Serialization { .. } => "SerializationError",
        DocVerifyError::Other(_) => "Error",
    }
}

impl ApiError {
    fn new(status: StatusCode, error: DocVerifyError) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error_type: error_type(&error).to_string(),
                message: error.to_string(),
                status_code: status.as_u16(),
            },
        }
    }

    /// Malformed request.
    pub fn validation(error: DocVerifyError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error)
    }

    /// Upload larger than the configured per-file limit.
    pub fn payload_too_large(error: DocVerifyError) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, error)
    }

    /// Unhandled failure while serving the request.
    pub fn internal(error: DocVerifyError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl From<DocVerifyError> for ApiError {
    fn from(error: DocVerifyError) -> Self {
        match error {
            DocVerifyError::Validation { .. } => Self::validation(error),
            other => Self::internal(other),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        let status = error.status();
        let error = DocVerifyError::validation_with_source(error.body_text(), error);
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::payload_too_large(error)
        } else {
            Self::validation(error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error_type = %self.body.error_type, "{}", self.body.message);
        } else {
            tracing::debug!(status = %self.status, "{}", self.body.message);
        }

        (self.status, Json(self.body)).into_response()
    }
}
