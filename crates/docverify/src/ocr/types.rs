use serde::{Deserialize, Serialize};

/// A single text detection returned by an OCR provider.
///
/// Providers rank their detections with the aggregate full-page text first,
/// followed by individual words or blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Detected text
    pub description: String,

    /// Detected locale of the text, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl TextAnnotation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            locale: None,
        }
    }
}
