//! Day-first date matching and ISO reformatting.

use regex::Captures;

use super::patterns::DATE_DMY;

fn to_iso(caps: &Captures<'_>) -> String {
    format!("{}-{}-{}", &caps[3], &caps[2], &caps[1])
}

/// All `DD[/-]MM[/-]YYYY` dates in `text`, left to right, as `YYYY-MM-DD`.
///
/// Matches are non-overlapping. Digits are reordered only, never validated.
pub fn find_dates(text: &str) -> impl Iterator<Item = String> + '_ {
    DATE_DMY.captures_iter(text).map(|caps| to_iso(&caps))
}

/// The first date in `text`, as `YYYY-MM-DD`.
pub fn first_date(text: &str) -> Option<String> {
    DATE_DMY.captures(text).map(|caps| to_iso(&caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_date_reorders_to_iso() {
        assert_eq!(first_date("born 15-07-1985 in Pune"), Some("1985-07-15".to_string()));
        assert_eq!(first_date("15/07/1985"), Some("1985-07-15".to_string()));
    }

    #[test]
    fn test_find_dates_in_order() {
        let dates: Vec<String> = find_dates("Issued 23-06-2011, valid till 22/06/2031; DOB 05-01-1990").collect();
        assert_eq!(dates, vec!["2011-06-23", "2031-06-22", "1990-01-05"]);
    }

    #[test]
    fn test_no_dates() {
        assert_eq!(first_date("PERMANENT ACCOUNT NUMBER"), None);
        assert_eq!(find_dates("").count(), 0);
    }

    #[test]
    fn test_iso_output_does_not_rematch() {
        let iso = first_date("01/02/1990").unwrap();
        assert_eq!(iso, "1990-02-01");
        assert_eq!(first_date(&iso), None);
    }
}
