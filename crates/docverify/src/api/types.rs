//! API request and response types.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{VerifyConfig, fields::LicenceFields, ocr::OcrBackend};

/// Message returned when identity verification cannot find both fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Could not extract required fields.";

/// API server size limit configuration.
///
/// Controls maximum sizes for request bodies and individual uploads.
/// Both default to 20 MB, comfortably above what the Vision API accepts for a
/// single image.
///
/// # Configuration via Environment Variables
///
/// ```bash
/// # In bytes:
/// export DOCVERIFY_MAX_REQUEST_BODY_BYTES=20971520     # 20 MB
/// export DOCVERIFY_MAX_MULTIPART_FIELD_BYTES=10485760  # 10 MB
///
/// # In MB (applies to both limits):
/// export DOCVERIFY_MAX_UPLOAD_SIZE_MB=20
/// ```
///
/// # Examples
///
/// ```
/// use docverify::api::ApiSizeLimits;
///
/// let limits = ApiSizeLimits::default();
/// assert_eq!(limits.max_request_body_bytes, 20 * 1024 * 1024);
///
/// let limits = ApiSizeLimits::from_mb(50, 10);
/// assert_eq!(limits.max_multipart_field_bytes, 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiSizeLimits {
    /// Maximum size of the entire request body in bytes.
    pub max_request_body_bytes: usize,

    /// Maximum size of a single uploaded file in bytes.
    pub max_multipart_field_bytes: usize,
}

impl Default for ApiSizeLimits {
    fn default() -> Self {
        Self::from_mb(20, 20)
    }
}

impl ApiSizeLimits {
    /// Create new size limits with custom values.
    pub fn new(max_request_body_bytes: usize, max_multipart_field_bytes: usize) -> Self {
        Self {
            max_request_body_bytes,
            max_multipart_field_bytes,
        }
    }

    /// Create size limits from MB values (convenience method).
    pub fn from_mb(max_request_body_mb: usize, max_multipart_field_mb: usize) -> Self {
        Self {
            max_request_body_bytes: max_request_body_mb * 1024 * 1024,
            max_multipart_field_bytes: max_multipart_field_mb * 1024 * 1024,
        }
    }
}

/// Successful `POST /verify-identity` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    /// Holder name read from the Aadhaar card
    pub aadhaar_name: String,
    /// Date of birth read from the PAN card, `YYYY-MM-DD`
    pub pan_dob: String,
    /// Always `true`
    pub success: bool,
}

/// `POST /verify-identity` response when a required field is missing (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityErrorResponse {
    /// Human-readable reason
    pub error: String,
}

impl IdentityErrorResponse {
    /// Response used when the name or date of birth could not be read.
    pub fn missing_fields() -> Self {
        Self {
            error: MISSING_FIELDS_MESSAGE.to_string(),
        }
    }
}

/// `POST /verify-driving-licence` response.
///
/// Always returned with HTTP 200; callers must branch on `success`.
/// Missing fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceResponse {
    /// `true` only when all three fields were found
    pub success: bool,
    /// Licence number with whitespace removed
    pub licence_number: Option<String>,
    /// First date on the licence, `YYYY-MM-DD`
    pub issue_date: Option<String>,
    /// Second date on the licence, `YYYY-MM-DD`
    pub valid_till: Option<String>,
}

impl From<LicenceFields> for LicenceResponse {
    fn from(fields: LicenceFields) -> Self {
        Self {
            success: fields.success(),
            licence_number: fields.licence_number,
            issue_date: fields.issue_date,
            valid_till: fields.valid_till,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// API version
    pub version: String,
}

/// Server information response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    /// API version
    pub version: String,
    /// Name of the configured OCR backend
    pub ocr_backend: String,
}

/// Error response for malformed requests and provider failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type name
    pub error_type: String,
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
}

/// API server state.
///
/// Built once before serving. The OCR backend is shared by every request and
/// never reinitialized.
#[derive(Clone)]
pub struct ApiState {
    /// OCR provider client
    pub ocr: Arc<dyn OcrBackend>,
    /// Service configuration
    pub config: Arc<VerifyConfig>,
    /// Upload limits
    pub limits: ApiSizeLimits,
}
