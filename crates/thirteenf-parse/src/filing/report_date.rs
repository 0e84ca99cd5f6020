//! Reporting period resolution.
//!
//! Filings spanning two decades encode the report period at least three ways:
//! a labeled SEC-HEADER field, the `periodOfReport` tag of the primary
//! document, and the `reportCalendarOrQuarter` tag. The cascade order
//! encodes confidence; the filing date is only a structured last resort.

use crate::cascade::{Cascade, Rule};
use chrono::{Local, NaiveDate};
use derive_more::Display;
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Where a report date was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DateSource {
    /// `CONFORMED PERIOD OF REPORT:` header field
    #[display("period of report")]
    PeriodOfReport,
    /// `<periodOfReport>` tag
    #[display("periodOfReport tag")]
    PeriodTag,
    /// `<reportCalendarOrQuarter>` tag
    #[display("reportCalendarOrQuarter tag")]
    CalendarQuarterTag,
    /// `FILED AS OF DATE:` header field
    #[display("filed as of date")]
    FiledAsOf,
    /// Nothing matched; the processing date was used
    #[display("unresolved")]
    Unresolved,
}

/// Resolved reporting period as an 8-digit `YYYYMMDD` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{value}")]
pub struct ReportDate {
    value: String,
    source: DateSource,
}

impl ReportDate {
    /// The `YYYYMMDD` value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Where the value came from.
    pub const fn source(&self) -> DateSource {
        self.source
    }

    /// True when no cue in the document matched and the processing date
    /// was substituted.
    pub fn is_low_confidence(&self) -> bool {
        self.source == DateSource::Unresolved
    }

    /// Parses the value as a calendar date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value, "%Y%m%d").ok()
    }
}

fn compact(captures: &Captures<'_>, source: DateSource) -> Option<(String, DateSource)> {
    Some((captures[1].to_string(), source))
}

fn month_first(captures: &Captures<'_>, source: DateSource) -> Option<(String, DateSource)> {
    NaiveDate::parse_from_str(&captures[1], "%m-%d-%Y")
        .ok()
        .map(|date| (date.format("%Y%m%d").to_string(), source))
}

static REPORT_DATE_CASCADE: LazyLock<Cascade<(String, DateSource)>> = LazyLock::new(|| {
    Cascade::new(vec![
        Rule::new(
            "conformed_period_of_report",
            r"CONFORMED\s+PERIOD\s+OF\s+REPORT:\s*(\d{8})",
            |c| compact(c, DateSource::PeriodOfReport),
        ),
        Rule::new(
            "period_of_report_tag",
            r"<periodOfReport>(\d{2}-\d{2}-\d{4})</periodOfReport>",
            |c| month_first(c, DateSource::PeriodTag),
        ),
        Rule::new(
            "report_calendar_or_quarter_tag",
            r"<reportCalendarOrQuarter>(\d{2}-\d{2}-\d{4})</reportCalendarOrQuarter>",
            |c| month_first(c, DateSource::CalendarQuarterTag),
        ),
        Rule::new(
            "filed_as_of_date",
            r"FILED\s+AS\s+OF\s+DATE:\s*(\d{8})",
            |c| compact(c, DateSource::FiledAsOf),
        ),
    ])
});

/// Resolves the reporting period, falling back to today's local date.
pub fn resolve_report_date(text: &str) -> ReportDate {
    resolve_report_date_on(text, Local::now().date_naive())
}

/// Resolves the reporting period, falling back to `today`.
pub fn resolve_report_date_on(text: &str, today: NaiveDate) -> ReportDate {
    if let Some(resolved) = REPORT_DATE_CASCADE.resolve_named(text) {
        let (value, source) = resolved.value;
        debug!(rule = resolved.rule, %value, "resolved report date");
        return ReportDate { value, source };
    }

    let value = today.format("%Y%m%d").to_string();
    warn!(%value, "no report date cue found; using processing date");
    ReportDate {
        value,
        source: DateSource::Unresolved,
    }
}
