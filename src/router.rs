/*!
 * Dialect router.
 *
 * Locates the transcript body inside the full document text and decides
 * which dialect parser handles it.
 */

use std::fmt;

use log::{debug, warn};

use crate::errors::DocumentError;
use crate::parsers::{DialectParser, TabularParser, TakebarParser};
use crate::timecode::{contains_range, contains_timecode};

/// Transcript layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Bare timecodes interleaved with speaker/dialogue/take lines
    Tabular,
    /// "start - end" take bars with tab-separated columns
    Takebar,
}

impl Dialect {
    /// Parser implementing this dialect
    pub fn parser(self) -> &'static dyn DialectParser {
        match self {
            Dialect::Tabular => &TabularParser,
            Dialect::Takebar => &TakebarParser,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Tabular => write!(f, "tabular"),
            Dialect::Takebar => write!(f, "takebar"),
        }
    }
}

/// Body text selected for parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutedBody<'a> {
    pub body: &'a str,
    pub dialect: Dialect,
    /// False when the anchor was missing and the full text is used instead
    pub anchor_found: bool,
}

/// Slice of `text` starting one character before the anchor.
///
/// The extra character pulls in the line break that precedes the anchor.
pub fn locate_body<'a>(text: &'a str, anchor: Option<&str>) -> Result<&'a str, DocumentError> {
    let anchor = anchor.ok_or_else(|| DocumentError::AnchorNotFound(String::new()))?;
    let offset = text
        .find(anchor)
        .ok_or_else(|| DocumentError::AnchorNotFound(anchor.to_string()))?;

    let start = text[..offset]
        .char_indices()
        .next_back()
        .map(|(index, _)| index)
        .unwrap_or(0);

    Ok(&text[start..])
}

/// Pick the dialect of a body, or fail when it has no timecode at all
pub fn detect_dialect(body: &str) -> Result<Dialect, DocumentError> {
    if !contains_timecode(body) {
        return Err(DocumentError::NoTimestamps);
    }
    if contains_range(body) {
        Ok(Dialect::Takebar)
    } else {
        Ok(Dialect::Tabular)
    }
}

/// Locate the body and pick its dialect.
///
/// A missing anchor degrades to the full text; only the absence of any
/// timecode is an error.
pub fn route<'a>(text: &'a str, anchor: Option<&str>) -> Result<RoutedBody<'a>, DocumentError> {
    let (body, anchor_found) = match locate_body(text, anchor) {
        Ok(body) => {
            debug!("Transcript body starts at byte {}", text.len() - body.len());
            (body, true)
        }
        Err(e) => {
            warn!("{}; parsing the full document text instead", e);
            (text, false)
        }
    };

    let dialect = detect_dialect(body)?;
    debug!("Detected {} dialect", dialect);

    Ok(RoutedBody {
        body,
        dialect,
        anchor_found,
    })
}
