//! docverify - OCR-backed identity document verification
//!
//! Sends document images to a cloud OCR provider and applies pattern heuristics
//! to the returned text to read a handful of fields from Indian identity
//! documents: the holder name on an Aadhaar card, the date of birth on a PAN
//! card, and the number and validity dates on a driving licence.
//!
//! # Quick Start
//!
//! ```rust
//! use docverify::{extract_dob, extract_licence, extract_name};
//!
//! let aadhaar = "GOVERNMENT OF INDIA\nAsha Verma\nDOB: 12/03/1992\nFEMALE";
//! assert_eq!(extract_name(aadhaar).as_deref(), Some("Asha Verma"));
//!
//! assert_eq!(extract_dob("RAHUL KUMAR\n15/07/1985").as_deref(), Some("1985-07-15"));
//!
//! let licence = extract_licence("DL No: MH14 20110062821\nDOI: 23-06-2011\nValid Till: 22-06-2031");
//! assert!(licence.success());
//! ```
//!
//! # Architecture
//!
//! - **OCR** (`ocr`): provider seam ([`ocr::OcrBackend`]), text extraction, credentials, Google Vision client
//! - **Fields** (`fields`): pure extraction heuristics over OCR text
//! - **API** (`api`): Axum HTTP server exposing the verification endpoints
//! - **Core** (`core`): configuration loading and discovery

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod fields;
pub mod ocr;

#[cfg(feature = "api")]
pub mod api;

pub use error::{DocVerifyError, Result};

pub use core::config::{OcrConfig, VerifyConfig};

pub use fields::{LicenceFields, extract_dob, extract_licence, extract_name};

pub use ocr::extract_text;
