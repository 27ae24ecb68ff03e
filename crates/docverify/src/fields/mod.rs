//! Field extraction heuristics over raw OCR text.
//!
//! Every extractor is a pure function of its input text. A field that cannot be
//! found is `None`; it is never an error.
//!
//! | Document        | Function             | Fields                                   |
//! |-----------------|----------------------|------------------------------------------|
//! | Aadhaar         | [`extract_name`]     | holder name                              |
//! | PAN             | [`extract_dob`]      | date of birth (`YYYY-MM-DD`)             |
//! | Driving licence | [`extract_licence`]  | licence number, issue date, valid till   |

mod aadhaar;
pub mod dates;
mod licence;
mod pan;
pub mod patterns;

pub use aadhaar::extract_name;
pub use licence::{LicenceFields, extract_licence};
pub use pan::extract_dob;
