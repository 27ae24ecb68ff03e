//! API request handlers.

use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    DocVerifyError,
    fields::{extract_dob, extract_licence, extract_name},
    ocr::extract_text,
};

use super::{
    error::ApiError,
    types::{
        ApiSizeLimits, ApiState, HealthResponse, IdentityErrorResponse, IdentityResponse, InfoResponse,
        LicenceResponse,
    },
};

/// Uploaded files of one request, keyed by form field name.
struct Uploads {
    files: HashMap<String, Bytes>,
}

impl Uploads {
    /// Drain the multipart stream, keeping the first file of each field.
    async fn read(mut multipart: Multipart, limits: ApiSizeLimits) -> Result<Self, ApiError> {
        let mut files = HashMap::new();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            let data = field.bytes().await?;

            if data.len() > limits.max_multipart_field_bytes {
                return Err(ApiError::payload_too_large(DocVerifyError::validation(format!(
                    "Upload '{}' is {} bytes, limit is {} bytes",
                    name,
                    data.len(),
                    limits.max_multipart_field_bytes
                ))));
            }

            files.entry(name).or_insert(data);
        }

        Ok(Self { files })
    }

    fn take(&mut self, name: &str) -> Result<Bytes, ApiError> {
        self.files.remove(name).ok_or_else(|| {
            ApiError::validation(DocVerifyError::validation(format!("Missing required upload '{}'", name)))
        })
    }
}

/// Identity verification handler.
///
/// POST /verify-identity
///
/// Accepts multipart form data with:
/// - `aadhaar_file`: Aadhaar card image
/// - `pan_file`: PAN card image
///
/// Both images are OCR'd concurrently. Returns 200 with the Aadhaar name and
/// PAN date of birth, or 400 `{"error": "Could not extract required fields."}`
/// if either field is missing. A missing upload is 422; an OCR provider failure
/// is 500.
pub async fn verify_identity_handler(
    State(state): State<ApiState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut uploads = Uploads::read(multipart, state.limits).await?;
    let aadhaar_image = uploads.take("aadhaar_file")?;
    let pan_image = uploads.take("pan_file")?;

    let ocr = state.ocr.as_ref();
    let ocr_config = &state.config.ocr;

    let (aadhaar_text, pan_text) = tokio::try_join!(
        extract_text(ocr, &aadhaar_image, ocr_config),
        extract_text(ocr, &pan_image, ocr_config),
    )?;

    let aadhaar_name = extract_name(&aadhaar_text);
    let pan_dob = extract_dob(&pan_text);

    match (aadhaar_name, pan_dob) {
        (Some(aadhaar_name), Some(pan_dob)) => {
            tracing::info!("Identity verification succeeded");
            Ok(Json(IdentityResponse {
                aadhaar_name,
                pan_dob,
                success: true,
            })
            .into_response())
        }
        (name, dob) => {
            tracing::info!(
                name_found = name.is_some(),
                dob_found = dob.is_some(),
                "Identity verification could not extract required fields"
            );
            Ok((StatusCode::BAD_REQUEST, Json(IdentityErrorResponse::missing_fields())).into_response())
        }
    }
}

/// Driving licence verification handler.
///
/// POST /verify-driving-licence
///
/// Accepts multipart form data with `licence_file`. Always answers 200 once OCR
/// succeeds; failure to find fields is reported through `success: false` and
/// `null` values.
pub async fn verify_licence_handler(
    State(state): State<ApiState>,
    multipart: Multipart,
) -> Result<Json<LicenceResponse>, ApiError> {
    let mut uploads = Uploads::read(multipart, state.limits).await?;
    let licence_image = uploads.take("licence_file")?;

    let text = extract_text(state.ocr.as_ref(), &licence_image, &state.config.ocr).await?;
    let response = LicenceResponse::from(extract_licence(&text));

    tracing::info!(
        success = response.success,
        number_found = response.licence_number.is_some(),
        "Driving licence verification complete"
    );

    Ok(Json(response))
}

/// Health check endpoint handler.
///
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Server info endpoint handler.
///
/// GET /info
pub async fn info_handler(State(state): State<ApiState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        ocr_backend: state.ocr.name().to_string(),
    })
}
