//! 13F information table extraction.
//!
//! The holdings table is embedded XML in the
//! `http://www.sec.gov/edgar/document/thirteenf/informationtable` namespace.
//! Modern submissions wrap it in a `<DOCUMENT>` whose `<FILENAME>` is
//! `form13fInfoTable.xml`; older ones inline the bare `informationTable`
//! element. Rows are the `infoTable` children of the root.
//!
//! Field extraction is best-effort: text is trimmed and numeric fields use
//! tolerant coercion, so a malformed number never fails its row. Only
//! markup that cannot be read as a tree fails the table.

use crate::cascade::{Cascade, Rule};
use crate::error::{ExtractError, Result};
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

/// Namespace of the 13F information table schema.
pub const INFORMATION_TABLE_NS: &str =
    "http://www.sec.gov/edgar/document/thirteenf/informationtable";

/// Declared filename of the information table document.
pub const INFO_TABLE_FILENAME: &str = "form13fInfoTable.xml";

/// One position reported in the information table.
///
/// Text fields are always present (possibly empty). Numeric fields are
/// `None` when blank or not coercible; they are never zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingRecord {
    /// `nameOfIssuer`
    pub issuer_name: String,
    /// `titleOfClass`, as reported
    pub class_title: String,
    /// `cusip`
    pub cusip: String,
    /// `value`; unit depends on the filing series, see [`ValueUnit`](crate::ValueUnit)
    pub value: Option<i64>,
    /// `shrsOrPrnAmt/sshPrnamt`
    pub shares_or_principal: Option<i64>,
    /// `shrsOrPrnAmt/sshPrnamtType` (`SH` or `PRN`)
    pub shares_type: String,
    /// `investmentDiscretion` (`SOLE`, `DFND`, `OTR`)
    pub discretion: String,
    /// `otherManager` sequence number
    pub other_manager: Option<i64>,
    /// `votingAuthority/Sole`
    pub vote_sole: Option<i64>,
    /// `votingAuthority/Shared`
    pub vote_shared: Option<i64>,
    /// `votingAuthority/None`
    pub vote_none: Option<i64>,
}

/// A numeric field whose text could not be coerced to an integer.
///
/// Never fatal: the field is left as `None` and the row survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCoercionSkipped {
    /// Zero-based row index within the table
    pub row: usize,
    /// Column name of the field
    pub field: &'static str,
    /// Raw text that failed coercion
    pub raw: String,
}

/// Rows parsed from an information table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Holdings in document order
    pub rows: Vec<HoldingRecord>,
    /// Numeric fields that were dropped during coercion
    pub skipped: Vec<FieldCoercionSkipped>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    NameOfIssuer,
    TitleOfClass,
    Cusip,
    Value,
    Shares,
    SharesType,
    Discretion,
    OtherManager,
    VoteSole,
    VoteShared,
    VoteNone,
}

impl Field {
    const ALL: [Self; 11] = [
        Self::NameOfIssuer,
        Self::TitleOfClass,
        Self::Cusip,
        Self::Value,
        Self::Shares,
        Self::SharesType,
        Self::Discretion,
        Self::OtherManager,
        Self::VoteSole,
        Self::VoteShared,
        Self::VoteNone,
    ];

    /// Path relative to the `infoTable` row element.
    const fn path(self) -> &'static [&'static str] {
        match self {
            Self::NameOfIssuer => &["nameOfIssuer"],
            Self::TitleOfClass => &["titleOfClass"],
            Self::Cusip => &["cusip"],
            Self::Value => &["value"],
            Self::Shares => &["shrsOrPrnAmt", "sshPrnamt"],
            Self::SharesType => &["shrsOrPrnAmt", "sshPrnamtType"],
            Self::Discretion => &["investmentDiscretion"],
            Self::OtherManager => &["otherManager"],
            Self::VoteSole => &["votingAuthority", "Sole"],
            Self::VoteShared => &["votingAuthority", "Shared"],
            Self::VoteNone => &["votingAuthority", "None"],
        }
    }

    const fn column(self) -> &'static str {
        match self {
            Self::NameOfIssuer => "issuer_name",
            Self::TitleOfClass => "class_title",
            Self::Cusip => "cusip",
            Self::Value => "value",
            Self::Shares => "shares_or_principal",
            Self::SharesType => "shares_type",
            Self::Discretion => "discretion",
            Self::OtherManager => "other_manager",
            Self::VoteSole => "vote_sole",
            Self::VoteShared => "vote_shared",
            Self::VoteNone => "vote_none",
        }
    }

    fn matching(path: &[Option<String>]) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            let expected = field.path();
            expected.len() == path.len()
                && expected
                    .iter()
                    .zip(path)
                    .all(|(want, got)| got.as_deref() == Some(*want))
        })
    }
}

/// Coerces integer text, tolerating thousands separators and stray symbols.
///
/// A direct parse is tried first; failing that, every non-digit character is
/// stripped and the remainder parsed. Text with no digits yields `None`.
///
/// ```
/// use thirteenf_parse::filing::info_table::tolerant_int;
///
/// assert_eq!(tolerant_int("1,234"), Some(1234));
/// assert_eq!(tolerant_int("-42"), Some(-42));
/// assert_eq!(tolerant_int("n/a"), None);
/// assert_eq!(tolerant_int(""), None);
/// ```
pub fn tolerant_int(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[derive(Debug, Default)]
struct RowBuilder {
    path: Vec<Option<String>>,
    buffers: Vec<String>,
    values: [Option<String>; Field::ALL.len()],
}

impl RowBuilder {
    fn enter(&mut self, name: Option<String>) {
        self.path.push(name);
        self.buffers.push(String::new());
    }

    fn text(&mut self, text: &str) {
        if let Some(buffer) = self.buffers.last_mut() {
            buffer.push_str(text);
        }
    }

    fn leave(&mut self) {
        let field = Field::matching(&self.path);
        self.path.pop();
        let text = self.buffers.pop().unwrap_or_default();
        if let Some(field) = field {
            let slot = &mut self.values[field as usize];
            if slot.is_none() {
                *slot = Some(text.trim().to_string());
            }
        }
    }

    fn finish(self, row: usize, skipped: &mut Vec<FieldCoercionSkipped>) -> HoldingRecord {
        let Self { mut values, .. } = self;
        let mut text = |field: Field| values[field as usize].take().unwrap_or_default();

        let issuer_name = text(Field::NameOfIssuer);
        let class_title = text(Field::TitleOfClass);
        let cusip = text(Field::Cusip);
        let shares_type = text(Field::SharesType);
        let discretion = text(Field::Discretion);

        let mut number = |field: Field| {
            let raw = text(field);
            let value = tolerant_int(&raw);
            if value.is_none() && !raw.is_empty() {
                debug!(row, field = field.column(), %raw, "numeric field could not be coerced");
                skipped.push(FieldCoercionSkipped {
                    row,
                    field: field.column(),
                    raw,
                });
            }
            value
        };

        HoldingRecord {
            issuer_name,
            class_title,
            cusip,
            value: number(Field::Value),
            shares_or_principal: number(Field::Shares),
            shares_type,
            discretion,
            other_manager: number(Field::OtherManager),
            vote_sole: number(Field::VoteSole),
            vote_shared: number(Field::VoteShared),
            vote_none: number(Field::VoteNone),
        }
    }
}

fn payload_range(captures: &regex::Captures<'_>) -> Option<Range<usize>> {
    captures.get(1).map(|m| m.range())
}

static TABLE_CASCADE: LazyLock<Cascade<Range<usize>>> = LazyLock::new(|| {
    Cascade::new(vec![
        Rule::new(
            "named_info_table_file",
            r"<FILENAME>form13fInfoTable\.xml[\s\S]*?<TEXT>\s*(?:<XML>\s*)?(?:<\?xml[^>]*\?>\s*)?(<(?:\w+:)?informationTable\b[\s\S]*?</(?:\w+:)?informationTable>)\s*(?:</XML>\s*)?</TEXT>",
            payload_range,
        ),
        Rule::new(
            "bare_information_table",
            r"(<(?:\w+:)?informationTable\b[\s\S]*?</(?:\w+:)?informationTable>)",
            payload_range,
        ),
    ])
});

/// Locates the information table XML inside a submission.
pub fn locate_info_table(text: &str) -> Option<&str> {
    let resolved = TABLE_CASCADE.resolve_named(text)?;
    debug!(
        rule = resolved.rule,
        bytes = resolved.value.len(),
        "located information table"
    );
    text.get(resolved.value)
}

fn in_table_namespace(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == INFORMATION_TABLE_NS.as_bytes())
}

/// Parses information table XML into holdings rows.
///
/// Row cardinality follows the source: every `infoTable` element yields a
/// record, even when none of its fields resolve.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedTable`] if the markup is not well formed
/// (mismatched or unterminated elements, bad escapes).
pub fn parse_info_table(xml: &str) -> Result<ParsedTable> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut table = ParsedTable::default();
    let mut current: Option<RowBuilder> = None;
    let mut depth = 0usize;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let in_ns = in_table_namespace(&ns);

        match event {
            Event::Start(e) => {
                depth += 1;
                let local = e.local_name();
                if depth == 2 && in_ns && local.as_ref() == b"infoTable" {
                    current = Some(RowBuilder::default());
                } else if let Some(row) = current.as_mut() {
                    let name = String::from_utf8_lossy(local.as_ref()).into_owned();
                    row.enter(in_ns.then_some(name));
                }
            }
            Event::Empty(e) => {
                let local = e.local_name();
                if depth == 1 && in_ns && local.as_ref() == b"infoTable" {
                    let index = table.rows.len();
                    let record = RowBuilder::default().finish(index, &mut table.skipped);
                    table.rows.push(record);
                } else if let Some(row) = current.as_mut() {
                    let name = String::from_utf8_lossy(local.as_ref()).into_owned();
                    row.enter(in_ns.then_some(name));
                    row.leave();
                }
            }
            Event::Text(e) => {
                if let Some(row) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| ExtractError::MalformedTable(err.to_string()))?;
                    row.text(&text);
                }
            }
            Event::CData(e) => {
                if let Some(row) = current.as_mut() {
                    row.text(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(row) = current.take() {
                        let index = table.rows.len();
                        let record = row.finish(index, &mut table.skipped);
                        table.rows.push(record);
                    }
                } else if let Some(row) = current.as_mut() {
                    row.leave();
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ExtractError::MalformedTable(format!(
            "document ended with {depth} unclosed element(s)"
        )));
    }

    debug!(
        rows = table.rows.len(),
        skipped = table.skipped.len(),
        "parsed information table"
    );
    Ok(table)
}

/// Locates and parses the information table of a submission.
///
/// # Errors
///
/// Returns [`ExtractError::TableNotFound`] when no table is present and
/// [`ExtractError::MalformedTable`] when it cannot be parsed.
pub fn extract_info_table(text: &str) -> Result<ParsedTable> {
    let xml = locate_info_table(text).ok_or(ExtractError::TableNotFound)?;
    parse_info_table(xml)
}
