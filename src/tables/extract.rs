use super::{TABLE_END, TABLE_START};
use serde::Serialize;

/// One HTML segment taken from parser output, kept as opaque markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableFragment(String);

impl TableFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TableFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract every table segment from parser stdout, in output order.
///
/// Rules:
/// - Text before the first start marker is dropped
/// - Each start marker opens a section that runs to the next start marker
/// - A section yields the trimmed text before its first end marker
/// - A section with no end marker (e.g. a dangling trailing start) yields nothing
/// - Anything after the first end marker of a section is dropped
pub fn extract_tables(output: &str) -> Vec<TableFragment> {
    output
        .split(TABLE_START)
        .skip(1)
        .filter_map(|section| {
            section
                .split_once(TABLE_END)
                .map(|(table, _rest)| TableFragment::new(table.trim()))
        })
        .collect()
}
