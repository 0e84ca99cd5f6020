//! Classification columns for exported holdings.

use thirteenf::taxonomy::{classify, describe_warrant};
use thirteenf_output::{ClassAnnotation, HoldingTable};

/// Category and normalized title of a class title.
pub(crate) fn annotation_for(title: &str) -> ClassAnnotation {
    ClassAnnotation {
        category: classify(title).name().to_string(),
        title_normalized: describe_warrant(title).into_owned(),
    }
}

/// Adds `class_category` and `class_title_normalized` to every row.
pub(crate) fn classify_holdings(table: &mut HoldingTable) {
    table.annotate(annotation_for);
}
