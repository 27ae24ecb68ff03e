//! REST API server for document verification.
//!
//! An Axum-based HTTP server that OCRs uploaded document images and returns the
//! extracted fields.
//!
//! # Endpoints
//!
//! - `POST /verify-identity` - Aadhaar name + PAN date of birth (`aadhaar_file`, `pan_file`)
//! - `POST /verify-driving-licence` - licence number and validity dates (`licence_file`)
//! - `GET /health` - Health check endpoint
//! - `GET /info` - Server information
//!
//! # Examples
//!
//! ## Starting the server
//!
//! ```no_run
//! use docverify::api::serve;
//!
//! #[tokio::main]
//! async fn main() -> docverify::Result<()> {
//!     // Requires GOOGLE_CREDENTIALS or GOOGLE_APPLICATION_CREDENTIALS
//!     serve("127.0.0.1", 8000).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding the router with a custom OCR backend
//!
//! ```no_run
//! use std::sync::Arc;
//! use docverify::{VerifyConfig, api::create_router, ocr::{GoogleVisionBackend, OcrBackend}};
//! use axum::Router;
//!
//! # fn main() -> docverify::Result<()> {
//! let ocr: Arc<dyn OcrBackend> = Arc::new(GoogleVisionBackend::from_env()?);
//! let app = Router::new().nest("/kyc", create_router(ocr, VerifyConfig::default()));
//! # Ok(())
//! # }
//! ```
//!
//! # cURL Examples
//!
//! ```bash
//! curl -F "aadhaar_file=@aadhaar.jpg" -F "pan_file=@pan.jpg" http://localhost:8000/verify-identity
//!
//! curl -F "licence_file=@licence.jpg" http://localhost:8000/verify-driving-licence
//!
//! curl http://localhost:8000/health
//! ```

mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
#[cfg(feature = "google-vision")]
pub use server::{serve, serve_with_config};
pub use server::{create_router, create_router_with_limits, serve_with_backend};
pub use types::{
    ApiSizeLimits, ApiState, ErrorResponse, HealthResponse, IdentityErrorResponse, IdentityResponse, InfoResponse,
    LicenceResponse, MISSING_FIELDS_MESSAGE,
};
