//! Security class categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryGroup {
    /// Rights and warrants
    Expiring,
    /// Common, preferred and depositary equity
    Equity,
    /// Bonds, notes and bond funds
    FixedIncome,
    /// Regional equity funds
    Region,
    /// Sector equity funds
    Sector,
    /// Factor-style equity funds
    Style,
    /// Market-cap equity funds
    Size,
    /// Commodity funds
    Commodity,
    /// Generic fallbacks
    Fallback,
}

impl CategoryGroup {
    /// Returns the group name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Expiring => "Expiring",
            Self::Equity => "Equity",
            Self::FixedIncome => "Fixed Income",
            Self::Region => "Region",
            Self::Sector => "Sector",
            Self::Style => "Style",
            Self::Size => "Size",
            Self::Commodity => "Commodity",
            Self::Fallback => "Fallback",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Category assigned to a holding's class title.
///
/// Variants are listed in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassCategory {
    /// Rights and warrants with an expiry
    ExpiringRightsWarrants,
    /// Defined-maturity bond funds (iBonds)
    TargetMaturityBondEtf,
    /// Treasury or corporate notes
    FixedIncomeNote,
    /// Common stock, class A
    CommonStockClassA,
    /// Common stock, class B
    CommonStockClassB,
    /// Common stock, class C
    CommonStockClassC,
    /// Common stock without a share class
    CommonStock,
    /// Preferred stock
    PreferredStock,
    /// ADRs and ADSs
    AmericanDepositaryReceipt,
    /// Limited partnership units
    PartnershipUnit,
    /// Treasury bills, notes and bonds
    UsTreasurySecurity,
    /// Municipal bond funds
    MunicipalBondEtf,
    /// High yield bond funds
    HighYieldBondEtf,
    /// Investment grade bond funds
    InvestmentGradeBondEtf,
    /// Short duration bond funds
    ShortTermBondEtf,
    /// Intermediate duration bond funds
    IntermediateTermBondEtf,
    /// Long duration bond funds
    LongTermBondEtf,
    /// TIPS and inflation-linked funds
    InflationProtectedBondEtf,
    /// ESG and sustainability funds
    EsgSustainableEquityEtf,
    /// Asia Pacific equity
    AsiaPacificEquityEtf,
    /// European equity
    EuropeanEquityEtf,
    /// Latin American equity
    LatinAmericaEquityEtf,
    /// Emerging markets equity
    EmergingMarketsEquityEtf,
    /// Technology sector
    TechnologySectorEtf,
    /// Healthcare sector
    HealthcareSectorEtf,
    /// Financial sector
    FinancialSectorEtf,
    /// Energy sector
    EnergySectorEtf,
    /// Industrial sector
    IndustrialSectorEtf,
    /// Consumer discretionary sector
    ConsumerDiscretionarySectorEtf,
    /// Consumer staples sector
    ConsumerStaplesSectorEtf,
    /// Utilities sector
    UtilitiesSectorEtf,
    /// Materials sector
    MaterialsSectorEtf,
    /// Communication services sector
    CommunicationServicesSectorEtf,
    /// Real estate and REITs
    RealEstateEquityEtf,
    /// Dividend strategies
    DividendFocusedEquityEtf,
    /// Growth style
    GrowthEquityEtf,
    /// Value style
    ValueEquityEtf,
    /// Momentum style
    MomentumEquityEtf,
    /// Low or minimum volatility
    LowVolatilityEquityEtf,
    /// Quality style
    QualityEquityEtf,
    /// US large cap
    UsLargeCapEquityEtf,
    /// US mid cap
    UsMidCapEquityEtf,
    /// US small cap
    UsSmallCapEquityEtf,
    /// Developed ex-US equity
    InternationalDevelopedEquityEtf,
    /// Broad bond funds
    FixedIncomeBondEtf,
    /// Precious metals and commodities
    CommodityEtf,
    /// Shares or stock of unspecified kind
    EquitySecurity,
    /// Funds, ETFs and index products
    ExchangeTradedFund,
    /// Bonds, notes and debentures
    FixedIncomeSecurity,
    /// No rule matched
    UnclassifiedSecurity,
}

impl ClassCategory {
    /// Returns all categories in classification order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::ExpiringRightsWarrants,
            Self::TargetMaturityBondEtf,
            Self::FixedIncomeNote,
            Self::CommonStockClassA,
            Self::CommonStockClassB,
            Self::CommonStockClassC,
            Self::CommonStock,
            Self::PreferredStock,
            Self::AmericanDepositaryReceipt,
            Self::PartnershipUnit,
            Self::UsTreasurySecurity,
            Self::MunicipalBondEtf,
            Self::HighYieldBondEtf,
            Self::InvestmentGradeBondEtf,
            Self::ShortTermBondEtf,
            Self::IntermediateTermBondEtf,
            Self::LongTermBondEtf,
            Self::InflationProtectedBondEtf,
            Self::EsgSustainableEquityEtf,
            Self::AsiaPacificEquityEtf,
            Self::EuropeanEquityEtf,
            Self::LatinAmericaEquityEtf,
            Self::EmergingMarketsEquityEtf,
            Self::TechnologySectorEtf,
            Self::HealthcareSectorEtf,
            Self::FinancialSectorEtf,
            Self::EnergySectorEtf,
            Self::IndustrialSectorEtf,
            Self::ConsumerDiscretionarySectorEtf,
            Self::ConsumerStaplesSectorEtf,
            Self::UtilitiesSectorEtf,
            Self::MaterialsSectorEtf,
            Self::CommunicationServicesSectorEtf,
            Self::RealEstateEquityEtf,
            Self::DividendFocusedEquityEtf,
            Self::GrowthEquityEtf,
            Self::ValueEquityEtf,
            Self::MomentumEquityEtf,
            Self::LowVolatilityEquityEtf,
            Self::QualityEquityEtf,
            Self::UsLargeCapEquityEtf,
            Self::UsMidCapEquityEtf,
            Self::UsSmallCapEquityEtf,
            Self::InternationalDevelopedEquityEtf,
            Self::FixedIncomeBondEtf,
            Self::CommodityEtf,
            Self::EquitySecurity,
            Self::ExchangeTradedFund,
            Self::FixedIncomeSecurity,
            Self::UnclassifiedSecurity,
        ]
    }

    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExpiringRightsWarrants => "Expiring Security - Rights & Warrants",
            Self::TargetMaturityBondEtf => "Target Maturity Bond ETF",
            Self::FixedIncomeNote => "Fixed Income Note",
            Self::CommonStockClassA => "Common Stock - Class A",
            Self::CommonStockClassB => "Common Stock - Class B",
            Self::CommonStockClassC => "Common Stock - Class C",
            Self::CommonStock => "Common Stock",
            Self::PreferredStock => "Preferred Stock",
            Self::AmericanDepositaryReceipt => "American Depositary Receipt",
            Self::PartnershipUnit => "Partnership Unit",
            Self::UsTreasurySecurity => "US Treasury Security",
            Self::MunicipalBondEtf => "Municipal Bond ETF",
            Self::HighYieldBondEtf => "High Yield Bond ETF",
            Self::InvestmentGradeBondEtf => "Investment Grade Bond ETF",
            Self::ShortTermBondEtf => "Short Term Bond ETF",
            Self::IntermediateTermBondEtf => "Intermediate Term Bond ETF",
            Self::LongTermBondEtf => "Long Term Bond ETF",
            Self::InflationProtectedBondEtf => "Inflation Protected Bond ETF",
            Self::EsgSustainableEquityEtf => "ESG/Sustainable Equity ETF",
            Self::AsiaPacificEquityEtf => "Asia Pacific Equity ETF",
            Self::EuropeanEquityEtf => "European Equity ETF",
            Self::LatinAmericaEquityEtf => "Latin America Equity ETF",
            Self::EmergingMarketsEquityEtf => "Emerging Markets Equity ETF",
            Self::TechnologySectorEtf => "Technology Sector ETF",
            Self::HealthcareSectorEtf => "Healthcare Sector ETF",
            Self::FinancialSectorEtf => "Financial Sector ETF",
            Self::EnergySectorEtf => "Energy Sector ETF",
            Self::IndustrialSectorEtf => "Industrial Sector ETF",
            Self::ConsumerDiscretionarySectorEtf => "Consumer Discretionary Sector ETF",
            Self::ConsumerStaplesSectorEtf => "Consumer Staples Sector ETF",
            Self::UtilitiesSectorEtf => "Utilities Sector ETF",
            Self::MaterialsSectorEtf => "Materials Sector ETF",
            Self::CommunicationServicesSectorEtf => "Communication Services Sector ETF",
            Self::RealEstateEquityEtf => "Real Estate Equity ETF",
            Self::DividendFocusedEquityEtf => "Dividend Focused Equity ETF",
            Self::GrowthEquityEtf => "Growth Equity ETF",
            Self::ValueEquityEtf => "Value Equity ETF",
            Self::MomentumEquityEtf => "Momentum Equity ETF",
            Self::LowVolatilityEquityEtf => "Low Volatility Equity ETF",
            Self::QualityEquityEtf => "Quality Equity ETF",
            Self::UsLargeCapEquityEtf => "US Large Cap Equity ETF",
            Self::UsMidCapEquityEtf => "US Mid Cap Equity ETF",
            Self::UsSmallCapEquityEtf => "US Small Cap Equity ETF",
            Self::InternationalDevelopedEquityEtf => "International Developed Markets Equity ETF",
            Self::FixedIncomeBondEtf => "Fixed Income Bond ETF",
            Self::CommodityEtf => "Commodity ETF",
            Self::EquitySecurity => "Equity Security",
            Self::ExchangeTradedFund => "Exchange Traded Fund",
            Self::FixedIncomeSecurity => "Fixed Income Security",
            Self::UnclassifiedSecurity => "Unclassified Security",
        }
    }

    /// Returns the family the category belongs to.
    pub const fn group(&self) -> CategoryGroup {
        match self {
            Self::ExpiringRightsWarrants => CategoryGroup::Expiring,
            Self::CommonStockClassA
            | Self::CommonStockClassB
            | Self::CommonStockClassC
            | Self::CommonStock
            | Self::PreferredStock
            | Self::AmericanDepositaryReceipt
            | Self::PartnershipUnit
            | Self::EsgSustainableEquityEtf
            | Self::InternationalDevelopedEquityEtf => CategoryGroup::Equity,
            Self::TargetMaturityBondEtf
            | Self::FixedIncomeNote
            | Self::UsTreasurySecurity
            | Self::MunicipalBondEtf
            | Self::HighYieldBondEtf
            | Self::InvestmentGradeBondEtf
            | Self::ShortTermBondEtf
            | Self::IntermediateTermBondEtf
            | Self::LongTermBondEtf
            | Self::InflationProtectedBondEtf
            | Self::FixedIncomeBondEtf => CategoryGroup::FixedIncome,
            Self::AsiaPacificEquityEtf
            | Self::EuropeanEquityEtf
            | Self::LatinAmericaEquityEtf
            | Self::EmergingMarketsEquityEtf => CategoryGroup::Region,
            Self::TechnologySectorEtf
            | Self::HealthcareSectorEtf
            | Self::FinancialSectorEtf
            | Self::EnergySectorEtf
            | Self::IndustrialSectorEtf
            | Self::ConsumerDiscretionarySectorEtf
            | Self::ConsumerStaplesSectorEtf
            | Self::UtilitiesSectorEtf
            | Self::MaterialsSectorEtf
            | Self::CommunicationServicesSectorEtf
            | Self::RealEstateEquityEtf => CategoryGroup::Sector,
            Self::DividendFocusedEquityEtf
            | Self::GrowthEquityEtf
            | Self::ValueEquityEtf
            | Self::MomentumEquityEtf
            | Self::LowVolatilityEquityEtf
            | Self::QualityEquityEtf => CategoryGroup::Style,
            Self::UsLargeCapEquityEtf | Self::UsMidCapEquityEtf | Self::UsSmallCapEquityEtf => {
                CategoryGroup::Size
            }
            Self::CommodityEtf => CategoryGroup::Commodity,
            Self::EquitySecurity
            | Self::ExchangeTradedFund
            | Self::FixedIncomeSecurity
            | Self::UnclassifiedSecurity => CategoryGroup::Fallback,
        }
    }

    /// Parse a category from its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for ClassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
