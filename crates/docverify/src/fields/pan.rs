//! PAN card date of birth.

use super::dates::first_date;

/// Extract the date of birth from PAN OCR text as `YYYY-MM-DD`.
///
/// PAN cards carry a single printed date, so the first `DD/MM/YYYY` or
/// `DD-MM-YYYY` occurrence anywhere in the text is taken.
pub fn extract_dob(text: &str) -> Option<String> {
    first_date(text)
}
