/*!
 * Input contract from the document-rendering side.
 *
 * A rendered document is the flat visible text of the source file plus the
 * text of its tables. Only the first row of the first table matters here:
 * its first populated cell marks where the transcript body starts.
 */

use serde::{Deserialize, Serialize};

/// A table as rows of cell texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTable {
    pub rows: Vec<Vec<String>>,
}

impl DocumentTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Flat text rendering of a transcript document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Visible text, line oriented
    pub text: String,

    /// Tables in document order
    #[serde(default)]
    pub tables: Vec<DocumentTable>,
}

impl RenderedDocument {
    /// Document without tables (the body anchor will be missing)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    /// Append a table
    pub fn with_table(mut self, table: DocumentTable) -> Self {
        self.tables.push(table);
        self
    }

    /// First cell of the first table's first row that has visible content.
    ///
    /// Line breaks, non-breaking spaces and spaces do not count as content.
    /// The cell text is returned unchanged.
    pub fn anchor_text(&self) -> Option<&str> {
        self.tables
            .first()?
            .rows
            .first()?
            .iter()
            .find(|cell| has_visible_content(cell))
            .map(String::as_str)
    }
}

fn has_visible_content(cell: &str) -> bool {
    cell.chars().any(|c| !matches!(c, '\n' | '\u{a0}' | ' '))
}
