//! Two-bucket coarse categorisation.

use regex::Regex;
use std::sync::LazyLock;

static ETF_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bETF\b").expect("ETF pattern is valid"));

/// Buckets a title as `ETF`, `Warrant`, or itself.
///
/// ```
/// use thirteenf::taxonomy::coarse_category;
///
/// assert_eq!(coarse_category("Tech Select etf"), "ETF");
/// assert_eq!(coarse_category("*W EXP 99/99/9999"), "Warrant");
/// assert_eq!(coarse_category("CL A"), "CL A");
/// ```
pub fn coarse_category(title: &str) -> &str {
    if ETF_WORD.is_match(title) {
        "ETF"
    } else if title.to_uppercase().contains("*W") {
        "Warrant"
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ISHARES CORE S&P 500 ETF", "ETF")]
    #[case("etf", "ETF")]
    #[case("NETFLIX INC", "NETFLIX INC")]
    #[case("ETFS GOLD", "ETFS GOLD")]
    #[case("*w exp 01/01/2030", "Warrant")]
    #[case("COM", "COM")]
    #[case("", "")]
    fn test_coarse_category(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(coarse_category(title), expected);
    }
}
