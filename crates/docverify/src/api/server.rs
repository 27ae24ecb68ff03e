//! API server setup and configuration.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{DocVerifyError, Result, VerifyConfig, ocr::OcrBackend};

use super::{
    handlers::{health_handler, info_handler, verify_identity_handler, verify_licence_handler},
    types::{ApiSizeLimits, ApiState},
};

/// Parse size limits from environment variables.
///
/// Reads, in order of preference:
/// 1. `DOCVERIFY_MAX_REQUEST_BODY_BYTES` - maximum total request body size (in bytes)
/// 2. `DOCVERIFY_MAX_MULTIPART_FIELD_BYTES` - maximum single upload size (in bytes, defaults to the request body limit)
/// 3. `DOCVERIFY_MAX_UPLOAD_SIZE_MB` - both limits in MB
///
/// Falls back to the 20 MB default if nothing valid is set.
pub(crate) fn parse_size_limits_from_env() -> ApiSizeLimits {
    if let Ok(value) = std::env::var("DOCVERIFY_MAX_REQUEST_BODY_BYTES") {
        match value.parse::<usize>() {
            Ok(bytes) if bytes > 0 => {
                let multipart_bytes = std::env::var("DOCVERIFY_MAX_MULTIPART_FIELD_BYTES")
                    .ok()
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|v| *v > 0)
                    .unwrap_or(bytes);

                tracing::info!(
                    "Upload size limits configured from environment: request_body={} bytes, multipart_field={} bytes",
                    bytes,
                    multipart_bytes
                );
                return ApiSizeLimits::new(bytes, multipart_bytes);
            }
            _ => tracing::warn!(
                "Failed to parse DOCVERIFY_MAX_REQUEST_BODY_BYTES='{}', must be a positive integer",
                value
            ),
        }
    }

    if let Ok(value) = std::env::var("DOCVERIFY_MAX_UPLOAD_SIZE_MB") {
        match value.parse::<usize>() {
            Ok(mb) if mb > 0 => {
                tracing::info!("Upload size limit configured from environment: {} MB", mb);
                return ApiSizeLimits::from_mb(mb, mb);
            }
            _ => tracing::warn!(
                "Failed to parse DOCVERIFY_MAX_UPLOAD_SIZE_MB='{}', must be a positive integer",
                value
            ),
        }
    }

    let limits = ApiSizeLimits::default();
    tracing::info!(
        "Upload size limit: {} bytes (default) - configure with DOCVERIFY_MAX_REQUEST_BODY_BYTES or DOCVERIFY_MAX_UPLOAD_SIZE_MB",
        limits.max_request_body_bytes
    );
    limits
}

/// Build the CORS layer.
///
/// Permissive unless `DOCVERIFY_CORS_ORIGINS` lists explicit origins.
fn cors_layer_from_env() -> CorsLayer {
    let permissive = || CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let Ok(origins_str) = std::env::var("DOCVERIFY_CORS_ORIGINS") else {
        tracing::warn!(
            "CORS configured to allow all origins (default). For production, set DOCVERIFY_CORS_ORIGINS \
             to a comma-separated list of allowed origins (e.g., 'https://apply.example.com')"
        );
        return permissive();
    };

    let origins: Vec<_> = origins_str
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("DOCVERIFY_CORS_ORIGINS set but empty/invalid - falling back to permissive CORS");
        return permissive();
    }

    tracing::info!("CORS configured with {} explicit allowed origin(s)", origins.len());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the API router with default size limits.
///
/// Public so the router can be embedded in a larger application or driven
/// directly in tests with any [`OcrBackend`].
pub fn create_router(ocr: Arc<dyn OcrBackend>, config: VerifyConfig) -> Router {
    create_router_with_limits(ocr, config, ApiSizeLimits::default())
}

/// Create the API router with custom size limits.
pub fn create_router_with_limits(ocr: Arc<dyn OcrBackend>, config: VerifyConfig, limits: ApiSizeLimits) -> Router {
    let state = ApiState {
        ocr,
        config: Arc::new(config),
        limits,
    };

    Router::new()
        .route("/verify-identity", post(verify_identity_handler))
        .route("/verify-driving-licence", post(verify_licence_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .layer(DefaultBodyLimit::max(limits.max_request_body_bytes))
        .layer(RequestBodyLimitLayer::new(limits.max_request_body_bytes))
        .layer(cors_layer_from_env())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server with config file discovery and the Google Vision backend.
///
/// Searches for `docverify.toml` in current and parent directories; uses the
/// default configuration if none is found. Credentials come from
/// `GOOGLE_CREDENTIALS` or `GOOGLE_APPLICATION_CREDENTIALS`.
///
/// # Errors
///
/// Fails before binding if no credentials are available.
#[cfg(feature = "google-vision")]
pub async fn serve(host: impl AsRef<str>, port: u16) -> Result<()> {
    let config = match VerifyConfig::discover()? {
        Some(config) => {
            tracing::info!("Loaded service config from discovered file");
            config
        }
        None => {
            tracing::info!("No config file found, using default configuration");
            VerifyConfig::default()
        }
    };

    serve_with_config(host, port, config).await
}

/// Start the API server with explicit config and the Google Vision backend.
#[cfg(feature = "google-vision")]
pub async fn serve_with_config(host: impl AsRef<str>, port: u16, config: VerifyConfig) -> Result<()> {
    let ocr: Arc<dyn OcrBackend> = Arc::new(crate::ocr::GoogleVisionBackend::from_env()?);
    let limits = parse_size_limits_from_env();

    serve_with_backend(host, port, ocr, config, limits).await
}

/// Start the API server with an explicit OCR backend, config and size limits.
pub async fn serve_with_backend(
    host: impl AsRef<str>,
    port: u16,
    ocr: Arc<dyn OcrBackend>,
    config: VerifyConfig,
    limits: ApiSizeLimits,
) -> Result<()> {
    let ip: IpAddr = host
        .as_ref()
        .parse()
        .map_err(|e| DocVerifyError::validation(format!("Invalid host address: {}", e)))?;

    let addr = SocketAddr::new(ip, port);
    let backend_name = ocr.name().to_string();
    let app = create_router_with_limits(ocr, config, limits);

    tracing::info!(
        "Starting docverify API server on http://{}:{} (OCR backend: {})",
        ip,
        port,
        backend_name
    );

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(DocVerifyError::Io)?;

    axum::serve(listener, app)
        .await
        .map_err(|e| DocVerifyError::Other(e.to_string()))?;

    Ok(())
}
