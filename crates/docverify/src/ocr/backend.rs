//! OCR backend trait.
//!
//! The rest of the crate only talks to OCR providers through [`OcrBackend`], so the
//! HTTP layer can be driven by any implementation (the Google Vision client in
//! production, a canned backend in tests).

use crate::Result;
use crate::core::config::OcrConfig;
use crate::ocr::types::TextAnnotation;
use async_trait::async_trait;

/// Trait for text-detection providers.
///
/// Backends must be thread-safe (`Send + Sync`): a single instance is built at
/// startup and shared by every request.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use docverify::{OcrConfig, Result};
/// use docverify::ocr::{OcrBackend, TextAnnotation};
///
/// struct Utf8Backend;
///
/// #[async_trait]
/// impl OcrBackend for Utf8Backend {
///     fn name(&self) -> &str {
///         "utf8"
///     }
///
///     async fn detect_text(&self, image_bytes: &[u8], _config: &OcrConfig) -> Result<Vec<TextAnnotation>> {
///         let text = String::from_utf8_lossy(image_bytes);
///         Ok(vec![TextAnnotation::new(text)])
///     }
/// }
/// ```
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Short identifier used in logs and `/info`.
    fn name(&self) -> &str;

    /// Run text detection on raw image bytes.
    ///
    /// Returns the provider's ranked annotations; an empty vector means nothing
    /// was detected.
    ///
    /// # Errors
    ///
    /// - `DocVerifyError::Ocr` - provider rejected the request or could not be reached
    async fn detect_text(&self, image_bytes: &[u8], config: &OcrConfig) -> Result<Vec<TextAnnotation>>;
}
