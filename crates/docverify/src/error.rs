//! Error types for docverify.
//!
//! Every fallible operation in the crate returns [`DocVerifyError`]:
//!
//! - `Io` - file system errors (config files, credential files). These always bubble up unchanged.
//! - `Ocr` - the OCR provider failed (network, auth, quota, malformed image, bad response).
//! - `Credentials` - no usable provider credentials at startup. Fatal.
//! - `Validation` - invalid configuration or a malformed request.
//! - `Serialization` - JSON encoding/decoding failures.
//!
//! A field that could not be found in OCR output is **not** an error; extractors
//! return `None` for that.
//!
//! # Example
//!
//! ```rust
//! use docverify::{DocVerifyError, Result};
//!
//! fn load(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.is_empty() {
//!         return Err(DocVerifyError::validation(format!("File is empty: {}", path)));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `DocVerifyError`.
pub type Result<T> = std::result::Result<T, DocVerifyError>;

/// Main error type for all docverify operations.
#[derive(Debug, Error)]
pub enum DocVerifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Credentials error: {message}")]
    Credentials {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DocVerifyError {
    fn from(err: serde_json::Error) -> Self {
        DocVerifyError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "google-vision")]
impl From<reqwest::Error> for DocVerifyError {
    fn from(err: reqwest::Error) -> Self {
        DocVerifyError::Ocr {
            message: format!("OCR provider request failed: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DocVerifyError {
    error_constructor!(ocr, Ocr);
    error_constructor!(credentials, Credentials);
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DocVerifyError = io_err.into();
        assert!(matches!(err, DocVerifyError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_ocr_error() {
        let err = DocVerifyError::ocr("quota exceeded");
        assert_eq!(err.to_string(), "OCR error: quota exceeded");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_ocr_error_with_source() {
        let source = std::io::Error::other("connection reset");
        let err = DocVerifyError::ocr_with_source("Vision request failed", source);
        assert_eq!(err.to_string(), "OCR error: Vision request failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_credentials_error() {
        let err = DocVerifyError::credentials("Google Cloud Vision credentials not found");
        assert_eq!(
            err.to_string(),
            "Credentials error: Google Cloud Vision credentials not found"
        );
    }

    #[test]
    fn test_validation_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad field");
        let err = DocVerifyError::validation_with_source("Missing upload", source);
        assert_eq!(err.to_string(), "Validation error: Missing upload");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DocVerifyError = json_err.into();
        assert!(matches!(err, DocVerifyError::Serialization { .. }));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_other_error() {
        let err = DocVerifyError::Other("unexpected".to_string());
        assert_eq!(err.to_string(), "unexpected");
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_credentials() -> Result<String> {
            let content = std::fs::read_to_string("/nonexistent/service-account.json")?;
            Ok(content)
        }

        assert!(matches!(read_credentials().unwrap_err(), DocVerifyError::Io(_)));
    }
}
