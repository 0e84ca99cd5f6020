//! Classification decision list.
//!
//! An ordered table of (matcher, category) pairs evaluated against the
//! normalized title. The first rule that matches decides the category, so a
//! new bucket must be inserted at its specificity rank: sector and style
//! buckets sit before the generic ETF and bond fallbacks.

use super::category::ClassCategory;

/// Substring predicate over a normalized title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Any of the terms occurs
    Any(&'static [&'static str]),
    /// Every term occurs
    All(&'static [&'static str]),
    /// The title starts with the term
    Prefix(&'static str),
    /// The term does not occur
    Lacks(&'static str),
    /// Any nested matcher holds
    Either(&'static [Self]),
    /// Every nested matcher holds
    Both(&'static [Self]),
}

impl Matcher {
    /// Tests the matcher against a normalized title.
    pub fn matches(&self, title: &str) -> bool {
        match self {
            Self::Any(terms) => terms.iter().any(|t| title.contains(t)),
            Self::All(terms) => terms.iter().all(|t| title.contains(t)),
            Self::Prefix(term) => title.starts_with(term),
            Self::Lacks(term) => !title.contains(term),
            Self::Either(matchers) => matchers.iter().any(|m| m.matches(title)),
            Self::Both(matchers) => matchers.iter().all(|m| m.matches(title)),
        }
    }
}

/// One entry of the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyRule {
    /// Category assigned on match
    pub category: ClassCategory,
    /// Predicate over the normalized title
    pub matcher: Matcher,
}

const fn rule(category: ClassCategory, matcher: Matcher) -> TaxonomyRule {
    TaxonomyRule { category, matcher }
}

const COMMON: Matcher = Matcher::Any(&[
    "COM STK",
    "COM SHS",
    "COMMON STOCK",
    "COMMON SHARES",
    "COMMON",
    "COM NEW",
    "COM PAR",
    "COM NPV",
    "COM UNIT",
    "ORDINARY",
]);

const ETF: Matcher = Matcher::Any(&["ETF"]);

/// The decision list, in evaluation order.
pub static RULES: &[TaxonomyRule] = &[
    // Expiring and maturity-indexed
    rule(
        ClassCategory::ExpiringRightsWarrants,
        Matcher::Either(&[
            Matcher::Any(&["*W EXP"]),
            Matcher::Both(&[Matcher::Any(&["RIGHT"]), Matcher::Lacks("99/99")]),
        ]),
    ),
    rule(ClassCategory::TargetMaturityBondEtf, Matcher::Any(&["IBOND"])),
    rule(ClassCategory::FixedIncomeNote, Matcher::Prefix("NOTE ")),
    // Common stock, share class first
    rule(
        ClassCategory::CommonStockClassA,
        Matcher::Both(&[COMMON, Matcher::Any(&["CL A", "CLASS A", "SER A"])]),
    ),
    rule(
        ClassCategory::CommonStockClassB,
        Matcher::Both(&[COMMON, Matcher::Any(&["CL B", "CLASS B", "SER B"])]),
    ),
    rule(
        ClassCategory::CommonStockClassC,
        Matcher::Both(&[COMMON, Matcher::Any(&["CL C", "CLASS C", "SER C"])]),
    ),
    rule(ClassCategory::CommonStock, COMMON),
    // Other equity
    rule(
        ClassCategory::PreferredStock,
        Matcher::Any(&["PFD", "PREF", "PREFERRED"]),
    ),
    rule(
        ClassCategory::AmericanDepositaryReceipt,
        Matcher::Any(&["ADR", "ADS", "SPON"]),
    ),
    rule(
        ClassCategory::PartnershipUnit,
        Matcher::Either(&[Matcher::Prefix("UNIT"), Matcher::All(&["UNIT", "LP"])]),
    ),
    // Government and credit tiers
    rule(
        ClassCategory::UsTreasurySecurity,
        Matcher::Any(&["TREASURY", "TREAS", "T-BILL"]),
    ),
    rule(
        ClassCategory::MunicipalBondEtf,
        Matcher::Any(&["MUNI", "MUNICIPAL"]),
    ),
    rule(
        ClassCategory::HighYieldBondEtf,
        Matcher::Any(&["HIGH YIELD", "HIGH YLD", "HI YLD"]),
    ),
    rule(
        ClassCategory::InvestmentGradeBondEtf,
        Matcher::Any(&["INVT GR", "INVESTMENT GRADE", "INV GR"]),
    ),
    // Tenor
    rule(
        ClassCategory::ShortTermBondEtf,
        Matcher::Any(&["SHORT TERM", "SHORT-TERM", "SHRT", "SHORT DUR"]),
    ),
    rule(
        ClassCategory::IntermediateTermBondEtf,
        Matcher::Any(&["INTERMEDIATE", "INTERMED", "INT-TERM"]),
    ),
    rule(
        ClassCategory::LongTermBondEtf,
        Matcher::Any(&["LONG TERM", "LONG-TERM", "LT ", "20+", "25+"]),
    ),
    rule(
        ClassCategory::InflationProtectedBondEtf,
        Matcher::Either(&[Matcher::Any(&["TIPS"]), Matcher::All(&["INFLATION", "ETF"])]),
    ),
    rule(
        ClassCategory::EsgSustainableEquityEtf,
        Matcher::Either(&[
            Matcher::Any(&["ESG", "SUSTAINABLE"]),
            Matcher::All(&["CLEAN", "ETF"]),
        ]),
    ),
    // Regions
    rule(
        ClassCategory::AsiaPacificEquityEtf,
        Matcher::Any(&[
            "CHINA",
            "ASIA",
            "PACIFIC",
            "HONG KONG",
            "TAIWAN",
            "JAPAN",
            "INDIA",
            "KOREA",
        ]),
    ),
    rule(
        ClassCategory::EuropeanEquityEtf,
        Matcher::Any(&[
            "EUROPE", "EURO", "EAFE", "UK", "GERMANY", "FRANCE", "SPAIN", "ITALY",
        ]),
    ),
    rule(
        ClassCategory::LatinAmericaEquityEtf,
        Matcher::Any(&["LATIN", "BRAZIL", "MEXICO", "CHILE"]),
    ),
    rule(
        ClassCategory::EmergingMarketsEquityEtf,
        Matcher::Any(&["EMERG", "EM MKT", "EM MK"]),
    ),
    // Sectors
    rule(
        ClassCategory::TechnologySectorEtf,
        Matcher::Any(&[
            "TECH",
            "SEMICONDUCTOR",
            "SOFTWARE",
            "CYBER",
            "CLOUD",
            "AI",
            "ARTIFICIAL",
        ]),
    ),
    rule(
        ClassCategory::HealthcareSectorEtf,
        Matcher::Any(&["HEALTH", "PHARMA", "BIOTECH", "MEDICAL"]),
    ),
    rule(
        ClassCategory::FinancialSectorEtf,
        Matcher::Any(&["FINANC", "BANK", "BK ETF", "INSURANCE"]),
    ),
    rule(
        ClassCategory::EnergySectorEtf,
        Matcher::Any(&["ENERGY", "OIL", "GAS"]),
    ),
    rule(
        ClassCategory::IndustrialSectorEtf,
        Matcher::Any(&["INDUST", "AEROSPACE", "DEFENSE"]),
    ),
    rule(
        ClassCategory::ConsumerDiscretionarySectorEtf,
        Matcher::Any(&["CONSUM DIS", "CONSUMER DIS"]),
    ),
    rule(
        ClassCategory::ConsumerStaplesSectorEtf,
        Matcher::Any(&["CONSUM STP", "CONSUMER STP", "CONSUM STAPLE"]),
    ),
    rule(
        ClassCategory::UtilitiesSectorEtf,
        Matcher::All(&["UTIL", "ETF"]),
    ),
    rule(
        ClassCategory::MaterialsSectorEtf,
        Matcher::Either(&[Matcher::Any(&["MATERIAL"]), Matcher::All(&["METAL", "ETF"])]),
    ),
    rule(
        ClassCategory::CommunicationServicesSectorEtf,
        Matcher::All(&["COMM", "SVC"]),
    ),
    rule(
        ClassCategory::RealEstateEquityEtf,
        Matcher::Any(&["REAL EST", "REIT"]),
    ),
    // Factor styles
    rule(
        ClassCategory::DividendFocusedEquityEtf,
        Matcher::All(&["DIV", "ETF"]),
    ),
    rule(
        ClassCategory::GrowthEquityEtf,
        Matcher::Both(&[Matcher::Any(&["GROW", "GRW", "GWT"]), ETF]),
    ),
    rule(
        ClassCategory::ValueEquityEtf,
        Matcher::Both(&[Matcher::Any(&["VALUE", "VAL", "VL "]), ETF]),
    ),
    rule(
        ClassCategory::MomentumEquityEtf,
        Matcher::Both(&[Matcher::Any(&["MOMENT", "MOMNT"]), ETF]),
    ),
    rule(
        ClassCategory::LowVolatilityEquityEtf,
        Matcher::Both(&[Matcher::Any(&["LOW VOL", "MIN VOL"]), ETF]),
    ),
    rule(
        ClassCategory::QualityEquityEtf,
        Matcher::All(&["QUAL", "ETF"]),
    ),
    // Size
    rule(
        ClassCategory::UsLargeCapEquityEtf,
        Matcher::Any(&[
            "LARGE CAP",
            "LRG CAP",
            "LCAP",
            "MEGA CAP",
            "S&P 500",
            "S&P500",
            "RUSSELL 1000",
        ]),
    ),
    rule(
        ClassCategory::UsMidCapEquityEtf,
        Matcher::Any(&["MID CAP", "MDCP", "MIDCAP", "S&P 400", "RUSSELL MID"]),
    ),
    rule(
        ClassCategory::UsSmallCapEquityEtf,
        Matcher::Any(&[
            "SMALL CAP",
            "SML CAP",
            "SMCP",
            "SMLCP",
            "S&P 600",
            "RUSSELL 2000",
        ]),
    ),
    // Broad funds
    rule(
        ClassCategory::InternationalDevelopedEquityEtf,
        Matcher::Both(&[
            Matcher::Any(&["INTL", "INTERNATIONAL", "GLOBAL", "WORLD", "DEVELOPED"]),
            ETF,
        ]),
    ),
    rule(
        ClassCategory::FixedIncomeBondEtf,
        Matcher::Both(&[
            Matcher::Any(&["BOND", "BD ETF", "CORP BD", "AGGREGATE"]),
            ETF,
        ]),
    ),
    rule(
        ClassCategory::CommodityEtf,
        Matcher::Any(&[
            "GOLD",
            "SILVER",
            "COMMODITY",
            "METAL",
            "PLATINUM",
            "PALLADIUM",
        ]),
    ),
    // Fallbacks
    rule(
        ClassCategory::EquitySecurity,
        Matcher::Any(&["SHS", "SHARES", "STK", "STOCK", "CAP STK"]),
    ),
    rule(
        ClassCategory::ExchangeTradedFund,
        Matcher::Any(&["ETF", "INDEX", "FUND"]),
    ),
    rule(
        ClassCategory::FixedIncomeSecurity,
        Matcher::Any(&["BOND", "NOTE", "DEBT", "DEBENTURE"]),
    ),
];

/// Returns the first rule matching a normalized title.
pub fn first_match(normalized: &str) -> Option<&'static TaxonomyRule> {
    RULES.iter().find(|r| r.matcher.matches(normalized))
}
