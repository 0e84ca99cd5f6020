//! Well-known filer metadata picked from the parsed header.

use super::header::HeaderField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SIC_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("SIC code pattern is valid"));

/// One `Field`/`Value` row of a filing summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Summary field name
    #[serde(rename = "Field")]
    pub field: &'static str,
    /// Resolved value, empty when absent
    #[serde(rename = "Value")]
    pub value: String,
}

/// Submission and filer metadata.
///
/// Every field is a string; absent values are empty, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingSummary {
    /// `ACCESSION NUMBER`
    pub accession_number: String,
    /// `CONFORMED SUBMISSION TYPE`
    pub submission_type: String,
    /// `CONFORMED PERIOD OF REPORT`
    pub period_of_report: String,
    /// `FILED AS OF DATE`
    pub filed_date: String,
    /// `COMPANY CONFORMED NAME`
    pub filer_name: String,
    /// `CENTRAL INDEX KEY`
    pub cik: String,
    /// Code from `STANDARD INDUSTRIAL CLASSIFICATION`, or `SIC`
    pub sic: String,
    /// `IRS NUMBER`
    pub irs_number: String,
    /// `STATE OF INCORPORATION`
    pub state_of_incorporation: String,
    /// `FISCAL YEAR END`
    pub fiscal_year_end: String,
    /// Street, city, state and zip of the business address
    pub business_address: String,
    /// `BUSINESS PHONE`
    pub business_phone: String,
    /// `SEC FILE NUMBER`
    pub sec_file_number: String,
    /// `FILM NUMBER`
    pub film_number: String,
    /// `FORMER CONFORMED NAME`
    pub former_name: String,
    /// `DATE OF NAME CHANGE`
    pub former_name_change_date: String,
}

fn first<'a>(fields: &'a [HeaderField], label: &str) -> Option<&'a HeaderField> {
    fields
        .iter()
        .find(|f| f.field.eq_ignore_ascii_case(label) && !f.value.is_empty())
}

fn value_of(fields: &[HeaderField], label: &str) -> String {
    first(fields, label)
        .map(|f| f.value.clone())
        .unwrap_or_default()
}

fn sic_code(fields: &[HeaderField]) -> String {
    first(fields, "STANDARD INDUSTRIAL CLASSIFICATION")
        .and_then(|f| SIC_CODE.captures(&f.value))
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| value_of(fields, "SIC"))
}

fn business_address(fields: &[HeaderField]) -> String {
    let address: Vec<&HeaderField> = fields
        .iter()
        .filter(|f| f.is_under("BUSINESS ADDRESS"))
        .collect();
    ["STREET 1", "CITY", "STATE", "ZIP"]
        .iter()
        .filter_map(|label| {
            address
                .iter()
                .find(|f| f.field.eq_ignore_ascii_case(label) && !f.value.is_empty())
                .map(|f| f.value.as_str())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl FilingSummary {
    /// Picks the summary fields from parsed header fields.
    ///
    /// The first non-empty occurrence of each label wins, so the filer's own
    /// company data takes precedence over later filer blocks.
    pub fn from_header(fields: &[HeaderField]) -> Self {
        Self {
            accession_number: value_of(fields, "ACCESSION NUMBER"),
            submission_type: value_of(fields, "CONFORMED SUBMISSION TYPE"),
            period_of_report: value_of(fields, "CONFORMED PERIOD OF REPORT"),
            filed_date: value_of(fields, "FILED AS OF DATE"),
            filer_name: value_of(fields, "COMPANY CONFORMED NAME"),
            cik: value_of(fields, "CENTRAL INDEX KEY"),
            sic: sic_code(fields),
            irs_number: value_of(fields, "IRS NUMBER"),
            state_of_incorporation: value_of(fields, "STATE OF INCORPORATION"),
            fiscal_year_end: value_of(fields, "FISCAL YEAR END"),
            business_address: business_address(fields),
            business_phone: value_of(fields, "BUSINESS PHONE"),
            sec_file_number: value_of(fields, "SEC FILE NUMBER"),
            film_number: value_of(fields, "FILM NUMBER"),
            former_name: value_of(fields, "FORMER CONFORMED NAME"),
            former_name_change_date: value_of(fields, "DATE OF NAME CHANGE"),
        }
    }

    /// Summary as `Field`/`Value` rows in a fixed order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        [
            ("Accession_Number", &self.accession_number),
            ("Submission_Type", &self.submission_type),
            ("Period_of_Report", &self.period_of_report),
            ("Filed_Date", &self.filed_date),
            ("Filer_Name", &self.filer_name),
            ("CIK", &self.cik),
            ("SIC", &self.sic),
            ("IRS_Number", &self.irs_number),
            ("State_of_Incorporation", &self.state_of_incorporation),
            ("Fiscal_Year_End", &self.fiscal_year_end),
            ("Business_Address", &self.business_address),
            ("Business_Phone", &self.business_phone),
            ("SEC_File_Number", &self.sec_file_number),
            ("Film_Number", &self.film_number),
            ("Former_Name", &self.former_name),
            ("Former_Name_Change_Date", &self.former_name_change_date),
        ]
        .into_iter()
        .map(|(field, value)| SummaryRow {
            field,
            value: value.clone(),
        })
        .collect()
    }

    /// Returns true if no field resolved.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filing::header::parse_header;

    const HEADER: &str = "ACCESSION NUMBER:\t\t0000950123-24-005678
CONFORMED SUBMISSION TYPE:\t13F-HR
CONFORMED PERIOD OF REPORT:\t20240331
FILED AS OF DATE:\t\t20240515
FILER:
\tCOMPANY DATA:\t
\t\tCOMPANY CONFORMED NAME:\t\t\tEXAMPLE CAPITAL MANAGEMENT LLC
\t\tCENTRAL INDEX KEY:\t\t\t0001234567
\t\tSTANDARD INDUSTRIAL CLASSIFICATION:\tINVESTMENT ADVICE [6282]
\t\tIRS NUMBER:\t\t\t\t123456789
\t\tSTATE OF INCORPORATION:\t\t\tDE
\t\tFISCAL YEAR END:\t\t\t1231
\tFILING VALUES:
\t\tFORM TYPE:\t\t13F-HR
\t\tSEC FILE NUMBER:\t028-12345
\t\tFILM NUMBER:\t\t24951234
\tBUSINESS ADDRESS:\t
\t\tSTREET 1:\t\t100 MAIN STREET
\t\tCITY:\t\t\tBOSTON
\t\tSTATE:\t\t\tMA
\t\tZIP:\t\t\t02110
\t\tBUSINESS PHONE:\t\t617-555-0100
\tMAIL ADDRESS:\t
\t\tSTREET 1:\t\tPO BOX 1
\t\tCITY:\t\t\tSALEM
\tFORMER COMPANY:\t
\t\tFORMER CONFORMED NAME:\tEXAMPLE ADVISORS LLC
\t\tDATE OF NAME CHANGE:\t20150101
";

    #[test]
    fn test_from_header() {
        let summary = FilingSummary::from_header(&parse_header(HEADER));
        assert_eq!(summary.accession_number, "0000950123-24-005678");
        assert_eq!(summary.submission_type, "13F-HR");
        assert_eq!(summary.filer_name, "EXAMPLE CAPITAL MANAGEMENT LLC");
        assert_eq!(summary.cik, "0001234567");
        assert_eq!(summary.sic, "6282");
        assert_eq!(summary.state_of_incorporation, "DE");
        assert_eq!(summary.sec_file_number, "028-12345");
        assert_eq!(summary.film_number, "24951234");
        assert_eq!(summary.business_phone, "617-555-0100");
        assert_eq!(summary.former_name, "EXAMPLE ADVISORS LLC");
        assert_eq!(summary.former_name_change_date, "20150101");
    }

    #[test]
    fn test_business_address_ignores_mail_address() {
        let summary = FilingSummary::from_header(&parse_header(HEADER));
        assert_eq!(summary.business_address, "100 MAIN STREET, BOSTON, MA, 02110");
    }

    #[test]
    fn test_sic_fallback() {
        let fields = vec![HeaderField::new("HEADER", "SIC", "6211")];
        assert_eq!(FilingSummary::from_header(&fields).sic, "6211");
    }

    #[test]
    fn test_rows_fixed_order_and_empty_values() {
        let rows = FilingSummary::default().rows();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0].field, "Accession_Number");
        assert_eq!(rows[15].field, "Former_Name_Change_Date");
        assert!(rows.iter().all(|r| r.value.is_empty()));
        assert!(FilingSummary::default().is_empty());
    }
}
