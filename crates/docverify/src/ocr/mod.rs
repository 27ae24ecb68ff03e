//! Text extraction through an external OCR provider.
//!
//! - [`OcrBackend`]: the provider seam
//! - [`extract_text`]: image bytes in, primary detected text block out
//! - [`CredentialSource`]: startup credential resolution
//! - [`GoogleVisionBackend`]: Google Cloud Vision implementation (`google-vision` feature)

mod backend;
pub mod credentials;
#[cfg(feature = "google-vision")]
pub mod google_vision;
mod types;

pub use backend::OcrBackend;
pub use credentials::CredentialSource;
#[cfg(feature = "google-vision")]
pub use google_vision::GoogleVisionBackend;
pub use types::TextAnnotation;

use crate::Result;
use crate::core::config::OcrConfig;

/// Extract the full text of one document image.
///
/// Makes exactly one provider call and returns the first (aggregate) annotation.
/// Returns an empty string when the provider detects nothing. Nothing is cached:
/// identical images are sent to the provider again.
///
/// # Errors
///
/// Provider failures propagate unchanged as `DocVerifyError::Ocr`; there is no
/// retry or fallback.
pub async fn extract_text(backend: &dyn OcrBackend, image_bytes: &[u8], config: &OcrConfig) -> Result<String> {
    let annotations = backend.detect_text(image_bytes, config).await?;

    Ok(annotations
        .into_iter()
        .next()
        .map(|annotation| annotation.description)
        .unwrap_or_default())
}
