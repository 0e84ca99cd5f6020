//! Legacy fixed-format 13F-HR type block.
//!
//! The block runs from the `<TYPE>13F-HR` marker to the following
//! `<TYPE>INFORMATION TABLE` marker and mixes inline tags, checkboxes,
//! colon-delimited labels and free text. Lines are dispatched in a fixed
//! priority order; the first shape that matches wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Field name for a checkbox with no label.
pub const CHECKBOX_FIELD: &str = "_checkbox";

/// Field name for free text lines.
pub const TEXT_FIELD: &str = "_text";

/// One parsed line of the type block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBlockField {
    /// Label, tag name or sentinel
    pub field: String,
    /// Value; checkboxes are `Yes` or `No`
    pub value: String,
}

impl TypeBlockField {
    /// Creates a type block field.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Document type markers delimiting the type block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBlockMarkers {
    /// Form type that opens the block
    pub form_type: String,
    /// Document type that closes the block
    pub table_type: String,
}

impl Default for TypeBlockMarkers {
    fn default() -> Self {
        Self {
            form_type: "13F-HR".to_string(),
            table_type: "INFORMATION TABLE".to_string(),
        }
    }
}

impl TypeBlockMarkers {
    fn marker(kind: &str) -> Option<Regex> {
        let pattern = format!(r"(?i)<TYPE>\s*{}\b", regex::escape(kind));
        match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                debug!(%kind, %err, "type block marker does not compile");
                None
            }
        }
    }
}

/// Locates the trimmed type block between the form and table markers.
///
/// Returns `None` when either marker is missing or the block is empty.
pub fn locate_type_block<'a>(text: &'a str, markers: &TypeBlockMarkers) -> Option<&'a str> {
    let start = TypeBlockMarkers::marker(&markers.form_type)?.find(text)?;
    let rest = &text[start.end()..];
    let Some(end) = TypeBlockMarkers::marker(&markers.table_type)?.find(rest) else {
        debug!(table_type = %markers.table_type, "type block has no closing marker");
        return None;
    };
    let block = rest[..end.start()].trim();
    (!block.is_empty()).then_some(block)
}

static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z0-9]+)>(.*?)</([A-Za-z0-9]+)>$").expect("inline tag pattern is valid")
});

static BARE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?[A-Za-z0-9]+>").expect("bare tag pattern is valid"));

static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)(\[\s*[Xx]\s*\]|\[\s*\])").expect("checkbox pattern is valid")
});

fn inline_tag(line: &str) -> Option<TypeBlockField> {
    let captures = INLINE_TAG.captures(line)?;
    (captures[1] == captures[3]).then(|| TypeBlockField::new(&captures[1], captures[2].trim()))
}

fn checkbox(line: &str) -> Option<TypeBlockField> {
    let captures = CHECKBOX.captures(line)?;
    let label = captures[1].trim();
    let label = label.strip_suffix(':').unwrap_or(label);
    let field = if label.is_empty() { CHECKBOX_FIELD } else { label };
    let checked = captures[2].contains(['x', 'X']);
    Some(TypeBlockField::new(field, if checked { "Yes" } else { "No" }))
}

fn parse_line(line: &str) -> Option<TypeBlockField> {
    if let Some(field) = inline_tag(line) {
        return Some(field);
    }
    if BARE_TAG.is_match(line) {
        return None;
    }
    if let Some(field) = checkbox(line) {
        return Some(field);
    }
    Some(match line.split_once(':') {
        Some((field, value)) => TypeBlockField::new(field.trim(), value.trim()),
        None => TypeBlockField::new(TEXT_FIELD, line),
    })
}

/// Parses a type block into fields.
///
/// # Example
///
/// ```
/// use thirteenf_parse::filing::type_block::{TypeBlockField, parse_type_block};
///
/// let fields = parse_type_block("Check here if Amendment [X]\n<cik>0001234567</cik>");
/// assert_eq!(fields[0], TypeBlockField::new("Check here if Amendment", "Yes"));
/// assert_eq!(fields[1], TypeBlockField::new("cik", "0001234567"));
/// ```
pub fn parse_type_block(block: &str) -> Vec<TypeBlockField> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}
