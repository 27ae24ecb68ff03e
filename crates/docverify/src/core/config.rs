//! Configuration loading and management.
//!
//! Service configuration can be loaded from TOML or JSON files, or discovered by
//! walking up from the current directory looking for `docverify.toml`.
//! Provider credentials are never read from these files; see
//! [`crate::ocr::CredentialSource`].

use crate::{DocVerifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default Google Cloud Vision annotate endpoint.
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Name of the file searched for by [`VerifyConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "docverify.toml";

/// Main service configuration.
///
/// # Example
///
/// ```rust
/// use docverify::VerifyConfig;
///
/// let config = VerifyConfig::default();
/// assert!(config.ocr.language_hints.is_empty());
///
/// // let config = VerifyConfig::from_toml_file("docverify.toml")?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// OCR provider settings
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// OCR provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Images annotate endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// BCP-47 language hints forwarded to the provider (empty = auto-detect)
    #[serde(default)]
    pub language_hints: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language_hints: Vec::new(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_VISION_ENDPOINT.to_string()
}

impl VerifyConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DocVerifyError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DocVerifyError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DocVerifyError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| DocVerifyError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a file, choosing the format by extension.
    ///
    /// `.json` files are parsed as JSON; anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Discover configuration file in parent directories.
    ///
    /// Searches for `docverify.toml` in current directory and parent directories.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(DocVerifyError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = VerifyConfig::default();
        assert_eq!(config.ocr.endpoint, DEFAULT_VISION_ENDPOINT);
        assert!(config.ocr.language_hints.is_empty());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docverify.toml");

        fs::write(
            &config_path,
            r#"
[ocr]
endpoint = "http://localhost:9090/v1/images:annotate"
language_hints = ["en", "hi"]
        "#,
        )
        .unwrap();

        let config = VerifyConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config.ocr.endpoint, "http://localhost:9090/v1/images:annotate");
        assert_eq!(config.ocr.language_hints, vec!["en".to_string(), "hi".to_string()]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docverify.toml");

        fs::write(
            &config_path,
            r#"
[ocr]
language_hints = ["en"]
        "#,
        )
        .unwrap();

        let config = VerifyConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config.ocr.endpoint, DEFAULT_VISION_ENDPOINT);
        assert_eq!(config.ocr.language_hints.len(), 1);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docverify.json");

        fs::write(&config_path, r#"{"ocr": {"language_hints": ["en"]}}"#).unwrap();

        let config = VerifyConfig::from_file(&config_path).unwrap();
        assert_eq!(config.ocr.language_hints, vec!["en".to_string()]);
    }

    #[test]
    fn test_invalid_toml_is_validation_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docverify.toml");
        fs::write(&config_path, "[ocr\nendpoint = ").unwrap();

        let err = VerifyConfig::from_toml_file(&config_path).unwrap_err();
        assert!(matches!(err, DocVerifyError::Validation { .. }));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let err = VerifyConfig::from_toml_file("/nonexistent/docverify.toml").unwrap_err();
        assert!(matches!(err, DocVerifyError::Validation { .. }));
    }

    #[test]
    #[serial]
    fn test_discover_docverify_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_path,
            r#"
[ocr]
language_hints = ["hi"]
        "#,
        )
        .unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&dir).unwrap();

        let result = std::panic::catch_unwind(|| {
            let config = VerifyConfig::discover().unwrap();
            assert!(config.is_some());
            assert_eq!(config.unwrap().ocr.language_hints, vec!["hi".to_string()]);
        });

        std::env::set_current_dir(&original_dir).unwrap();

        if let Err(e) = result {
            std::panic::resume_unwind(e);
        }
    }
}
