/*!
 * Top-level transcript parsing: router, dialect parser, normalizer.
 *
 * `parse` never fails. It returns a status plus the table, and the table
 * is absent exactly when the document carries no timecodes.
 */

use std::fmt;

use log::info;

use crate::app_config::ParserConfig;
use crate::document::RenderedDocument;
use crate::errors::{DocumentError, NO_TIMESTAMPS_STATUS};
use crate::normalizer::{normalize_records, TranscriptTable};
use crate::progress::{NoProgress, ProgressSink};
use crate::router::{route, Dialect};

/// Overall parse status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Ok,
    NoTimestamps,
}

impl ParseStatus {
    /// Status text: "OK" or "Error: No timestamps found"
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStatus::Ok => "OK",
            ParseStatus::NoTimestamps => NO_TIMESTAMPS_STATUS,
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of parsing one document
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub status: ParseStatus,
    /// Present iff `status` is `Ok`
    pub table: Option<TranscriptTable>,
    /// Dialect used, when the document got that far
    pub dialect: Option<Dialect>,
    /// False when the body anchor was missing and the full text was parsed
    pub anchor_found: bool,
}

impl ParseOutcome {
    fn no_timestamps() -> Self {
        ParseOutcome {
            status: ParseStatus::NoTimestamps,
            table: None,
            dialect: None,
            anchor_found: false,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ParseStatus::Ok
    }

    /// Status text and table, the shape host applications consume
    pub fn into_parts(self) -> (&'static str, Option<TranscriptTable>) {
        (self.status.as_str(), self.table)
    }
}

/// Parse a document with the default configuration and no progress reporting
pub fn parse(document: &RenderedDocument) -> ParseOutcome {
    parse_with(document, &ParserConfig::default(), &mut NoProgress)
}

/// Parse a document, reporting the share of consumed timecodes to `progress`
pub fn parse_with(
    document: &RenderedDocument,
    config: &ParserConfig,
    progress: &mut dyn ProgressSink,
) -> ParseOutcome {
    let routed = match route(&document.text, document.anchor_text()) {
        Ok(routed) => routed,
        Err(DocumentError::NoTimestamps | DocumentError::AnchorNotFound(_)) => {
            progress.finish();
            return ParseOutcome::no_timestamps();
        }
    };

    let raw = routed.dialect.parser().parse(routed.body, config, progress);
    progress.finish();

    let table = normalize_records(&raw);
    info!(
        "Parsed {} rows from {} transcript",
        table.len(),
        routed.dialect
    );

    ParseOutcome {
        status: ParseStatus::Ok,
        table: Some(table),
        dialect: Some(routed.dialect),
        anchor_found: routed.anchor_found,
    }
}
