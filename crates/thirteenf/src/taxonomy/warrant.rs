//! Warrant expiry notation.
//!
//! Filers encode warrants as `*W EXP MM/DD/YYYY`, with `99/99/9999` standing
//! in for an undisclosed expiry. This pass rewrites such titles into a
//! readable description and leaves everything else untouched.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Placeholder date meaning the expiry was not disclosed.
pub const UNKNOWN_EXPIRY: &str = "99/99/9999";

static WARRANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*W\s*EXP\s*([0-9]{2}/[0-9]{2}/[0-9]{2,4}|99/99/9999)")
        .expect("warrant pattern is valid")
});

/// Returns the raw expiry date of a warrant title, if present.
pub fn warrant_expiry(title: &str) -> Option<&str> {
    WARRANT
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn iso_date(mdy: &str) -> Cow<'_, str> {
    match mdy.split('/').collect::<Vec<_>>().as_slice() {
        [mm, dd, yyyy] if yyyy.len() == 4 => Cow::Owned(format!("{yyyy}-{mm}-{dd}")),
        _ => Cow::Borrowed(mdy),
    }
}

/// Describes a warrant title, or returns it unchanged.
///
/// ```
/// use thirteenf::taxonomy::describe_warrant;
///
/// assert_eq!(describe_warrant("ABC *W EXP 12/31/2025"), "Warrant (expires 2025-12-31)");
/// assert_eq!(describe_warrant("ABC *W EXP 99/99/9999"), "Warrant (expiry unknown)");
/// assert_eq!(describe_warrant("COM"), "COM");
/// ```
pub fn describe_warrant(title: &str) -> Cow<'_, str> {
    match warrant_expiry(title) {
        Some(UNKNOWN_EXPIRY) => Cow::Borrowed("Warrant (expiry unknown)"),
        Some(expiry) => Cow::Owned(format!("Warrant (expires {})", iso_date(expiry))),
        None => Cow::Borrowed(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ABC *W EXP 12/31/2025", "Warrant (expires 2025-12-31)")]
    #[case("ABC *W EXP 99/99/9999", "Warrant (expiry unknown)")]
    #[case("*w exp 01/15/2027", "Warrant (expires 2027-01-15)")]
    #[case("*WEXP06/30/2026", "Warrant (expires 2026-06-30)")]
    #[case("XYZ *W EXP 03/01/28", "Warrant (expires 03/01/28)")]
    #[case("COM", "COM")]
    #[case("*W", "*W")]
    #[case("", "")]
    fn test_describe_warrant(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(describe_warrant(title), expected);
    }

    #[test]
    fn test_unchanged_title_is_borrowed() {
        assert!(matches!(describe_warrant("CL A"), Cow::Borrowed("CL A")));
    }

    #[test]
    fn test_warrant_expiry() {
        assert_eq!(warrant_expiry("NUBURU *W EXP 01/31/2028"), Some("01/31/2028"));
        assert_eq!(warrant_expiry("RIGHT 99/99/9999"), None);
    }
}
