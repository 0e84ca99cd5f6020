//! `<SEC-HEADER>` block parsing.
//!
//! The header is a loosely indented outline: section openers end in a colon
//! and nest by indentation, fields are `LABEL: value` pairs. Indentation mixes
//! tabs and spaces; one tab or two spaces count as one level.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Section path used for fields outside any section.
pub const ROOT_SECTION: &str = "HEADER";

/// Separator between nested section names.
pub const SECTION_SEPARATOR: &str = " > ";

/// Field name used for lines without a colon.
pub const NOTE_FIELD: &str = "_note";

/// One labeled line of the header, with its enclosing sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    /// Enclosing sections joined with `" > "`, or `HEADER`
    pub section_path: String,
    /// Label before the first colon
    pub field: String,
    /// Text after the first colon
    pub value: String,
}

impl HeaderField {
    /// Creates a header field.
    pub fn new(
        section_path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            section_path: section_path.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true if this field sits under a section with the given name
    /// at any depth.
    pub fn is_under(&self, section: &str) -> bool {
        self.section_path
            .split(SECTION_SEPARATOR)
            .any(|name| name == section)
    }
}

static HEADER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<SEC-HEADER>([\s\S]*?)</SEC-HEADER>").expect("header block pattern is valid")
});

/// Locates the trimmed contents of the `<SEC-HEADER>` block.
pub fn locate_header(text: &str) -> Option<&str> {
    let block = HEADER_BLOCK
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim());
    if block.is_none() {
        debug!("submission has no SEC-HEADER block");
    }
    block
}

fn indent_depth(indent: &str) -> usize {
    let tabs = indent.chars().filter(|&c| c == '\t').count();
    let spaces = indent.chars().filter(|&c| c == ' ').count();
    tabs + spaces / 2
}

fn current_path(stack: &[String]) -> String {
    if stack.is_empty() {
        ROOT_SECTION.to_string()
    } else {
        stack.join(SECTION_SEPARATOR)
    }
}

/// Parses a header block into fields.
///
/// # Example
///
/// ```
/// use thirteenf_parse::filing::header::parse_header;
///
/// let fields = parse_header("FILER:\n\tCOMPANY DATA:\n\t\tCENTRAL INDEX KEY: 0001234567\n");
/// assert_eq!(fields[0].section_path, "FILER > COMPANY DATA");
/// assert_eq!(fields[0].field, "CENTRAL INDEX KEY");
/// assert_eq!(fields[0].value, "0001234567");
/// ```
pub fn parse_header(block: &str) -> Vec<HeaderField> {
    let mut fields = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    for raw in block.lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let content = line.trim_start_matches([' ', '\t']);
        let depth = indent_depth(&line[..line.len() - content.len()]);

        if content.ends_with(':') && !content.contains(":\t") {
            stack.truncate(depth);
            stack.push(content[..content.len() - 1].trim().to_string());
            continue;
        }

        if let Some((field, value)) = content.split_once(':') {
            stack.truncate(depth);
            fields.push(HeaderField::new(
                current_path(&stack),
                field.trim(),
                value.trim(),
            ));
            continue;
        }

        fields.push(HeaderField::new(current_path(&stack), NOTE_FIELD, content));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ACCESSION NUMBER:\t\t0000950123-24-005678
CONFORMED SUBMISSION TYPE:\t13F-HR
PUBLIC DOCUMENT COUNT:\t\t2
CONFORMED PERIOD OF REPORT:\t20240331
FILED AS OF DATE:\t\t20240515

FILER:

\tCOMPANY DATA:\t
\t\tCOMPANY CONFORMED NAME:\t\t\tEXAMPLE CAPITAL MANAGEMENT LLC
\t\tCENTRAL INDEX KEY:\t\t\t0001234567

\tBUSINESS ADDRESS:\t
\t\tSTREET 1:\t\t100 MAIN STREET
\t\tCITY:\t\t\tBOSTON
";

    #[test]
    fn test_locate_header() {
        let text = "<SEC-DOCUMENT>\n<SEC-HEADER>\n  ACCESSION NUMBER: 1\n</SEC-HEADER>\n";
        assert_eq!(locate_header(text), Some("ACCESSION NUMBER: 1"));
        assert_eq!(locate_header("<SEC-DOCUMENT>"), None);
    }

    #[test]
    fn test_root_fields() {
        let fields = parse_header(HEADER);
        assert_eq!(
            fields[0],
            HeaderField::new("HEADER", "ACCESSION NUMBER", "0000950123-24-005678")
        );
        assert_eq!(fields[1].value, "13F-HR");
        assert!(fields[..5].iter().all(|f| f.section_path == ROOT_SECTION));
    }

    #[test]
    fn test_nested_sections() {
        let fields = parse_header(HEADER);
        let cik = fields
            .iter()
            .find(|f| f.field == "CENTRAL INDEX KEY")
            .unwrap();
        assert_eq!(cik.section_path, "FILER > COMPANY DATA");
        assert_eq!(cik.value, "0001234567");

        let city = fields.iter().find(|f| f.field == "CITY").unwrap();
        assert_eq!(city.section_path, "FILER > BUSINESS ADDRESS");
        assert!(city.is_under("BUSINESS ADDRESS"));
        assert!(!city.is_under("COMPANY DATA"));
    }

    #[test]
    fn test_section_path_nesting() {
        let fields = parse_header("A:\n\tB:\n\t\tX: 1\n");
        assert_eq!(fields, vec![HeaderField::new("A > B", "X", "1")]);
    }

    #[test]
    fn test_shallower_field_pops_sections() {
        let fields = parse_header("A:\n\tB:\n\t\tX: 1\nY: 2\n");
        assert_eq!(fields[1], HeaderField::new("HEADER", "Y", "2"));
    }

    #[test]
    fn test_spaces_count_half() {
        let fields = parse_header("A:\n  B:\n    X: 1\n  Y: 2\n");
        assert_eq!(fields[0].section_path, "A > B");
        assert_eq!(fields[1].section_path, "A");
    }

    #[test]
    fn test_colon_tab_is_a_field() {
        let fields = parse_header("\tCOMPANY DATA:\t\n");
        assert!(fields.is_empty());

        let fields = parse_header("LABEL:\tvalue:\n");
        assert_eq!(fields, vec![HeaderField::new("HEADER", "LABEL", "value:")]);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let fields = parse_header("TIME: 12:30:00\n");
        assert_eq!(fields[0].value, "12:30:00");
    }

    #[test]
    fn test_note_lines() {
        let fields = parse_header("FILER:\n\tsome free text\n");
        assert_eq!(fields, vec![HeaderField::new("FILER", NOTE_FIELD, "some free text")]);
    }
}
