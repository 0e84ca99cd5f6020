//! Security class title taxonomy.
//!
//! Maps free-text class titles reported in 13F information tables onto a
//! closed set of categories. Three independent passes are offered:
//!
//! - [`classify`]: the full decision list over [`ClassCategory`]
//! - [`describe_warrant`]: expands warrant expiry notation
//! - [`coarse_category`]: `ETF` / `Warrant` / title bucketing

pub mod category;
pub mod coarse;
pub mod rules;
pub mod warrant;

pub use category::{CategoryGroup, ClassCategory};
pub use coarse::coarse_category;
pub use rules::{Matcher, RULES, TaxonomyRule};
pub use warrant::{describe_warrant, warrant_expiry};

/// Uppercases a title and collapses whitespace runs to single spaces.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classifies a class title.
///
/// ```
/// use thirteenf::taxonomy::{ClassCategory, classify};
///
/// assert_eq!(classify("Tech  Select etf"), ClassCategory::TechnologySectorEtf);
/// assert_eq!(classify("cl a common stock"), ClassCategory::CommonStockClassA);
/// ```
pub fn classify(title: &str) -> ClassCategory {
    rules::first_match(&normalize_title(title))
        .map_or(ClassCategory::UnclassifiedSecurity, |rule| rule.category)
}

/// Classifies an optional title, preserving absence.
pub fn classify_opt(title: Option<&str>) -> Option<ClassCategory> {
    title.map(classify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*W EXP 12/31/2025", ClassCategory::ExpiringRightsWarrants)]
    #[case("RIGHT 12/31/2025", ClassCategory::ExpiringRightsWarrants)]
    #[case("RIGHT 99/99/9999", ClassCategory::UnclassifiedSecurity)]
    #[case("IBONDS DEC 2026 TERM CORP ETF", ClassCategory::TargetMaturityBondEtf)]
    #[case("NOTE 2.500% 5/1", ClassCategory::FixedIncomeNote)]
    #[case("CL A COM STK", ClassCategory::CommonStockClassA)]
    #[case("COMMON CL B", ClassCategory::CommonStockClassB)]
    #[case("COMMON STOCK SER C", ClassCategory::CommonStockClassC)]
    #[case("COM NEW", ClassCategory::CommonStock)]
    #[case("ORDINARY SHARES", ClassCategory::CommonStock)]
    #[case("PFD SER A", ClassCategory::PreferredStock)]
    #[case("SPONSORED ADR", ClassCategory::AmericanDepositaryReceipt)]
    #[case("UNIT LTD PARTN", ClassCategory::PartnershipUnit)]
    #[case("TREASURY BILL", ClassCategory::UsTreasurySecurity)]
    #[case("NATIONAL MUNI BD ETF", ClassCategory::MunicipalBondEtf)]
    #[case("HIGH YIELD CORP BD", ClassCategory::HighYieldBondEtf)]
    #[case("SHORT TERM BD ETF", ClassCategory::ShortTermBondEtf)]
    #[case("20+ YR TR BD ETF", ClassCategory::LongTermBondEtf)]
    #[case("TIPS BD ETF", ClassCategory::InflationProtectedBondEtf)]
    #[case("ESG AWARE MSCI USA", ClassCategory::EsgSustainableEquityEtf)]
    #[case("CHINA LARGE-CAP ETF", ClassCategory::AsiaPacificEquityEtf)]
    #[case("MSCI EAFE ETF", ClassCategory::EuropeanEquityEtf)]
    #[case("MSCI BRAZIL ETF", ClassCategory::LatinAmericaEquityEtf)]
    #[case("CORE MSCI EMERG", ClassCategory::EmergingMarketsEquityEtf)]
    #[case("TECH SELECT ETF", ClassCategory::TechnologySectorEtf)]
    #[case("HEALTH CARE SELECT", ClassCategory::HealthcareSectorEtf)]
    #[case("UTILITIES ETF", ClassCategory::UtilitiesSectorEtf)]
    #[case("REIT ETF", ClassCategory::RealEstateEquityEtf)]
    #[case("QUALITY FACTOR ETF", ClassCategory::QualityEquityEtf)]
    #[case("S&P 500 ETF TR", ClassCategory::UsLargeCapEquityEtf)]
    #[case("RUSSELL 2000 ETF", ClassCategory::UsSmallCapEquityEtf)]
    #[case("CORE MSCI WORLD ETF", ClassCategory::InternationalDevelopedEquityEtf)]
    #[case("CORE US AGGREGATE BD ETF", ClassCategory::FixedIncomeBondEtf)]
    #[case("GOLD TRUST", ClassCategory::CommodityEtf)]
    #[case("SHS BEN INT", ClassCategory::EquitySecurity)]
    #[case("INDEX", ClassCategory::ExchangeTradedFund)]
    #[case("SR DEBENTURE", ClassCategory::FixedIncomeSecurity)]
    #[case("COM", ClassCategory::UnclassifiedSecurity)]
    #[case("", ClassCategory::UnclassifiedSecurity)]
    fn test_classify(#[case] title: &str, #[case] expected: ClassCategory) {
        assert_eq!(classify(title), expected);
    }

    #[test]
    fn test_sector_beats_generic_etf() {
        assert_eq!(classify("TECH SELECT ETF"), ClassCategory::TechnologySectorEtf);
        assert_ne!(classify("TECH SELECT ETF"), ClassCategory::ExchangeTradedFund);
    }

    #[rstest]
    #[case("tech   select\tetf")]
    #[case("  Cl a  Com ")]
    #[case("ishares\nmsci eafe etf")]
    fn test_idempotent_under_normalization(#[case] title: &str) {
        let normalized = normalize_title(title);
        assert_eq!(classify(title), classify(&normalized));
        assert_eq!(normalize_title(&normalized), normalized);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  com\t cl  a "), "COM CL A");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_classify_opt_preserves_none() {
        assert_eq!(classify_opt(None), None);
        assert_eq!(
            classify_opt(Some("PFD")),
            Some(ClassCategory::PreferredStock)
        );
    }
}
