//! Regular expressions shared by the field extractors.
//!
//! These patterns define extraction behaviour completely; keep character
//! classes, `\b` anchoring and the `/`/`-` separator set exactly as they are.

use once_cell::sync::Lazy;
use regex::Regex;

/// `DD/MM/YYYY` or `DD-MM-YYYY` (separators may be mixed). No range checks.
pub static DATE_DMY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2})[/-](\d{2})[/-](\d{4})\b").expect("valid date regex"));

/// Two uppercase letters followed by 13 digits (state code, RTO code, year, serial).
pub static LICENCE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}\d{13}\b").expect("valid licence number regex"));

/// Leading label or relationship prefix on an Aadhaar name line.
pub static NAME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Name|S/O|D/O|W/O):?\s*").expect("valid name prefix regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_accepts_both_separators() {
        assert!(DATE_DMY.is_match("01/02/1990"));
        assert!(DATE_DMY.is_match("01-02-1990"));
        assert!(DATE_DMY.is_match("01/02-1990"));
        assert!(!DATE_DMY.is_match("01.02.1990"));
    }

    #[test]
    fn test_date_requires_word_boundaries() {
        assert!(!DATE_DMY.is_match("101/02/1990"));
        assert!(!DATE_DMY.is_match("01/02/19901"));
        assert!(DATE_DMY.is_match("DOB:01/02/1990"));
    }

    #[test]
    fn test_date_does_not_validate_ranges() {
        assert!(DATE_DMY.is_match("99/99/0000"));
    }

    #[test]
    fn test_licence_number_shape() {
        assert!(LICENCE_NUMBER.is_match("MH1420110062821"));
        assert!(!LICENCE_NUMBER.is_match("MH142011006282"));
        assert!(!LICENCE_NUMBER.is_match("mh1420110062821"));
        assert!(!LICENCE_NUMBER.is_match("XMH1420110062821"));
    }

    #[test]
    fn test_name_prefix_variants() {
        for line in ["Name: Jane", "NAME Jane", "s/o Jane", "D/O:Jane", "W/O   Jane"] {
            assert_eq!(NAME_PREFIX.replace(line, ""), "Jane", "line: {line}");
        }
    }
}
