//! Provider credential resolution.
//!
//! Credentials are resolved once at process startup from the environment:
//!
//! 1. `GOOGLE_CREDENTIALS` - the service-account JSON itself (hosted deployments)
//! 2. `GOOGLE_APPLICATION_CREDENTIALS` - path to a service-account JSON file (local development)
//!
//! If neither is set the service must not start.

use crate::{DocVerifyError, Result};
use std::path::PathBuf;

/// Environment variable holding an inline service-account JSON blob.
pub const INLINE_CREDENTIALS_ENV: &str = "GOOGLE_CREDENTIALS";

/// Environment variable holding a path to a service-account JSON file.
pub const CREDENTIALS_FILE_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Where the OCR provider's service-account key comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Service-account JSON supplied directly
    Inline(String),
    /// Path to a service-account JSON file
    File(PathBuf),
}

impl CredentialSource {
    /// Resolve credentials from the process environment.
    ///
    /// The inline blob wins when both variables are set. Empty values are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// `DocVerifyError::Credentials` when neither variable provides a value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(blob) = non_empty(INLINE_CREDENTIALS_ENV) {
            tracing::info!("Using OCR credentials from {}", INLINE_CREDENTIALS_ENV);
            return Ok(Self::Inline(blob));
        }

        if let Some(path) = non_empty(CREDENTIALS_FILE_ENV) {
            tracing::info!("Using OCR credentials file from {}: {}", CREDENTIALS_FILE_ENV, path);
            return Ok(Self::File(PathBuf::from(path)));
        }

        Err(DocVerifyError::credentials(format!(
            "Google Cloud Vision credentials not found: set {} or {}",
            INLINE_CREDENTIALS_ENV, CREDENTIALS_FILE_ENV
        )))
    }
}

// Never print key material.
impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline(_) => f.debug_tuple("Inline").field(&"<redacted>").finish(),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_inline_credentials_take_precedence() {
        let source = CredentialSource::from_lookup(lookup(&[
            (INLINE_CREDENTIALS_ENV, r#"{"type":"service_account"}"#),
            (CREDENTIALS_FILE_ENV, "/etc/keys/vision.json"),
        ]))
        .unwrap();

        assert_eq!(source, CredentialSource::Inline(r#"{"type":"service_account"}"#.to_string()));
    }

    #[test]
    fn test_file_credentials() {
        let source = CredentialSource::from_lookup(lookup(&[(CREDENTIALS_FILE_ENV, "/etc/keys/vision.json")])).unwrap();
        assert_eq!(source, CredentialSource::File(PathBuf::from("/etc/keys/vision.json")));
    }

    #[test]
    fn test_empty_inline_falls_back_to_file() {
        let source = CredentialSource::from_lookup(lookup(&[
            (INLINE_CREDENTIALS_ENV, "  "),
            (CREDENTIALS_FILE_ENV, "key.json"),
        ]))
        .unwrap();
        assert_eq!(source, CredentialSource::File(PathBuf::from("key.json")));
    }

    #[test]
    fn test_missing_credentials_is_fatal() {
        let err = CredentialSource::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, DocVerifyError::Credentials { .. }));
        assert!(err.to_string().contains("credentials not found"));
    }

    #[test]
    fn test_debug_redacts_inline_blob() {
        let source = CredentialSource::Inline(r#"{"private_key":"secret"}"#.to_string());
        let rendered = format!("{:?}", source);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        unsafe {
            std::env::remove_var(INLINE_CREDENTIALS_ENV);
            std::env::set_var(CREDENTIALS_FILE_ENV, "/tmp/docverify-test-key.json");
        }

        let source = CredentialSource::from_env().unwrap();
        assert_eq!(source, CredentialSource::File(PathBuf::from("/tmp/docverify-test-key.json")));

        unsafe {
            std::env::remove_var(CREDENTIALS_FILE_ENV);
        }

        assert!(CredentialSource::from_env().is_err());
    }
}
