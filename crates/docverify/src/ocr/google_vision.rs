//! Google Cloud Vision `TEXT_DETECTION` backend.
//!
//! Talks to the REST `images:annotate` endpoint with a service-account bearer
//! token. One backend instance (and its HTTP connection pool) is built at
//! startup and reused for every request.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use serde::{Deserialize, Serialize};

use crate::core::config::OcrConfig;
use crate::ocr::backend::OcrBackend;
use crate::ocr::credentials::CredentialSource;
use crate::ocr::types::TextAnnotation;
use crate::{DocVerifyError, Result};

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const TEXT_DETECTION: &str = "TEXT_DETECTION";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchAnnotateRequest<'a> {
    requests: Vec<AnnotateImageRequest<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageRequest<'a> {
    image: ImageContent,
    features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_context: Option<ImageContext<'a>>,
}

#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageContext<'a> {
    language_hints: &'a [String],
}

#[derive(Debug, Default, Deserialize)]
struct BatchAnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

fn build_request<'a>(image_bytes: &[u8], config: &'a OcrConfig) -> BatchAnnotateRequest<'a> {
    let image_context = (!config.language_hints.is_empty()).then(|| ImageContext {
        language_hints: &config.language_hints,
    });

    BatchAnnotateRequest {
        requests: vec![AnnotateImageRequest {
            image: ImageContent {
                content: STANDARD.encode(image_bytes),
            },
            features: vec![Feature { kind: TEXT_DETECTION }],
            image_context,
        }],
    }
}

/// Turn a batch response for a single image into ranked annotations.
fn parse_response(body: &[u8]) -> Result<Vec<TextAnnotation>> {
    let batch: BatchAnnotateResponse = serde_json::from_slice(body)
        .map_err(|e| DocVerifyError::ocr_with_source("Malformed response from Vision API", e))?;

    let Some(response) = batch.responses.into_iter().next() else {
        return Ok(Vec::new());
    };

    if let Some(status) = response.error.filter(|status| status.code != 0) {
        return Err(DocVerifyError::ocr(format!(
            "Vision API rejected image (code {}): {}",
            status.code, status.message
        )));
    }

    Ok(response
        .text_annotations
        .into_iter()
        .map(|annotation| TextAnnotation {
            description: annotation.description,
            locale: annotation.locale,
        })
        .collect())
}

/// Google Cloud Vision OCR backend.
pub struct GoogleVisionBackend {
    client: reqwest::Client,
    auth: Arc<CustomServiceAccount>,
}

impl GoogleVisionBackend {
    /// Build the backend from a resolved credential source.
    ///
    /// # Errors
    ///
    /// - `DocVerifyError::Credentials` - the service-account key is unreadable or invalid
    /// - `DocVerifyError::Ocr` - the HTTP client could not be constructed
    pub fn new(source: &CredentialSource) -> Result<Self> {
        let auth = match source {
            CredentialSource::Inline(blob) => CustomServiceAccount::from_json(blob)
                .map_err(|e| DocVerifyError::credentials_with_source("Invalid service-account JSON", e))?,
            CredentialSource::File(path) => CustomServiceAccount::from_file(path).map_err(|e| {
                DocVerifyError::credentials_with_source(
                    format!("Failed to load service-account file {}", path.display()),
                    e,
                )
            })?,
        };

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DocVerifyError::ocr_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            auth: Arc::new(auth),
        })
    }

    /// Build the backend from `GOOGLE_CREDENTIALS` / `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn from_env() -> Result<Self> {
        Self::new(&CredentialSource::from_env()?)
    }
}

#[async_trait]
impl OcrBackend for GoogleVisionBackend {
    fn name(&self) -> &str {
        "google-vision"
    }

    async fn detect_text(&self, image_bytes: &[u8], config: &OcrConfig) -> Result<Vec<TextAnnotation>> {
        let token = self
            .auth
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| DocVerifyError::ocr_with_source("Failed to obtain Vision API access token", e))?;

        let request = build_request(image_bytes, config);

        tracing::debug!(
            endpoint = %config.endpoint,
            image_bytes = image_bytes.len(),
            "Sending text detection request"
        );

        let response = self
            .client
            .post(&config.endpoint)
            .bearer_auth(token.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(DocVerifyError::ocr(format!(
                "Vision API returned status {}: {}",
                status,
                String::from_utf8_lossy(&body)
            )));
        }

        let annotations = parse_response(&body)?;
        tracing::debug!(annotations = annotations.len(), "Text detection complete");
        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_build_request_encodes_image_and_feature() {
        let config = OcrConfig::default();
        let request = build_request(b"fake-image", &config);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["requests"][0]["image"]["content"], STANDARD.encode(b"fake-image"));
        assert_eq!(value["requests"][0]["features"][0]["type"], "TEXT_DETECTION");
        assert!(value["requests"][0].get("imageContext").is_none());
    }

    #[test]
    fn test_build_request_includes_language_hints() {
        let config = OcrConfig {
            language_hints: vec!["en".to_string(), "hi".to_string()],
            ..OcrConfig::default()
        };
        let value = serde_json::to_value(build_request(b"x", &config)).unwrap();

        assert_eq!(
            value["requests"][0]["imageContext"]["languageHints"],
            json!(["en", "hi"])
        );
    }

    #[test]
    fn test_parse_response_keeps_provider_ranking() {
        let body = json!({
            "responses": [{
                "textAnnotations": [
                    {"locale": "en", "description": "INCOME TAX DEPARTMENT\nRAHUL KUMAR\n15/07/1985\n"},
                    {"description": "INCOME"},
                    {"description": "TAX"}
                ]
            }]
        });

        let annotations = parse_response(body.to_string().as_bytes()).unwrap();
        assert_eq!(annotations.len(), 3);
        assert!(annotations[0].description.starts_with("INCOME TAX DEPARTMENT"));
        assert_eq!(annotations[0].locale.as_deref(), Some("en"));
        assert_eq!(annotations[1].description, "INCOME");
    }

    #[test]
    fn test_parse_response_without_annotations() {
        let annotations = parse_response(br#"{"responses": [{}]}"#).unwrap();
        assert!(annotations.is_empty());

        let annotations = parse_response(br#"{}"#).unwrap();
        assert!(annotations.is_empty());
    }

    #[test]
    fn test_parse_response_surfaces_image_error() {
        let body = json!({
            "responses": [{
                "error": {"code": 3, "message": "Bad image data."}
            }]
        });

        let err = parse_response(body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, DocVerifyError::Ocr { .. }));
        assert!(err.to_string().contains("Bad image data."));
    }

    #[test]
    fn test_parse_response_rejects_malformed_json() {
        let err = parse_response(b"<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, DocVerifyError::Ocr { .. }));
    }

    #[test]
    fn test_invalid_inline_credentials() {
        let err = GoogleVisionBackend::new(&CredentialSource::Inline("not json".to_string()))
            .err()
            .expect("invalid key must be rejected");
        assert!(matches!(err, DocVerifyError::Credentials { .. }));
    }

    #[test]
    fn test_missing_credentials_file() {
        let source = CredentialSource::File("/nonexistent/service-account.json".into());
        let err = GoogleVisionBackend::new(&source).err().expect("missing file must be rejected");
        assert!(matches!(err, DocVerifyError::Credentials { .. }));
    }

    #[test]
    fn test_request_shape_is_camel_case() {
        let config = OcrConfig {
            language_hints: vec!["en".to_string()],
            ..OcrConfig::default()
        };
        let value: Value = serde_json::to_value(build_request(b"", &config)).unwrap();
        let request = &value["requests"][0];
        assert!(request.get("imageContext").is_some());
        assert!(request.get("image_context").is_none());
    }
}
