//! Driving licence number and validity dates.

use serde::{Deserialize, Serialize};

use super::dates::find_dates;
use super::patterns::LICENCE_NUMBER;

/// Fields read from a driving licence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceFields {
    /// `[A-Z]{2}` followed by 13 digits, whitespace removed
    pub licence_number: Option<String>,
    /// First date on the card, `YYYY-MM-DD`
    pub issue_date: Option<String>,
    /// Second date on the card, `YYYY-MM-DD`
    pub valid_till: Option<String>,
}

impl LicenceFields {
    /// All three fields were found.
    ///
    /// A licence number alone, or a single date, is not enough.
    pub fn success(&self) -> bool {
        self.licence_number.is_some() && self.issue_date.is_some() && self.valid_till.is_some()
    }
}

/// Extract licence number, issue date and valid-till date from licence OCR text.
///
/// The number is searched after removing whitespace so that OCR splits such as
/// `MH14 20110062821` still match. Line breaks are kept and act as word
/// boundaries. Dates are taken from the original text in order of appearance:
/// the first is the issue date, the second the valid-till date, and any further
/// dates are ignored.
pub fn extract_licence(text: &str) -> LicenceFields {
    let compact: String = text.chars().filter(|c| *c == '\n' || !c.is_whitespace()).collect();
    let licence_number = LICENCE_NUMBER.find(&compact).map(|m| m.as_str().to_string());

    let mut dates = find_dates(text).take(2).collect::<Vec<_>>().into_iter();
    let issue_date = dates.next();
    let valid_till = dates.next();

    LicenceFields {
        licence_number,
        issue_date,
        valid_till,
    }
}
