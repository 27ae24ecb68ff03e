//! Aadhaar card holder name.
//!
//! Aadhaar front sides print the holder's name on the line directly above the
//! date of birth (or year of birth on older cards), under a bilingual
//! "Government of India" header.

use super::patterns::NAME_PREFIX;

fn is_boilerplate(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("government") || lower.contains("unique")
}

fn is_birth_line(line: &str) -> bool {
    line.to_uppercase().contains("DOB") || line.contains("Year of Birth")
}

/// Extract the holder name from Aadhaar OCR text.
///
/// Blank lines and header lines (containing "government" or "unique", any case)
/// are skipped. At the first line mentioning `DOB` (any case) or
/// `Year of Birth`, the closest preceding kept line is taken as the name, with
/// a leading `Name`, `S/O`, `D/O` or `W/O` label removed. Later birth lines are
/// never consulted.
///
/// Returns `None` when there is no birth line, when nothing precedes it, or when
/// the candidate is empty once the label is removed.
pub fn extract_name(text: &str) -> Option<String> {
    let mut candidate: Option<&str> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || is_boilerplate(line) {
            continue;
        }

        if is_birth_line(line) {
            return candidate
                .map(|name| NAME_PREFIX.replace(name, "").trim().to_string())
                .filter(|name| !name.is_empty());
        }

        candidate = Some(line);
    }

    None
}
