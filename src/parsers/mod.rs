/*!
 * Dialect parsers for production transcripts.
 *
 * This module contains one parser per transcript layout:
 * - `tabular`: bare timecodes interleaved with speaker/dialogue/take-number lines
 * - `takebar`: "start - end" take bars followed by tab-separated columns
 *
 * Both produce `RawRecord`s in document order; normalization happens later.
 */

use std::fmt::Debug;

use crate::app_config::ParserConfig;
use crate::progress::ProgressSink;

pub mod tabular;
pub mod takebar;

pub use tabular::TabularParser;
pub use takebar::TakebarParser;

/// One dialogue event as written in the source document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    /// Speaker label, not yet case/accent normalized
    pub speaker: String,
    /// Spoken text, possibly joined from several source lines
    pub dialogue: String,
    /// Take identifier, possibly annotated ("3A") or fractional ("12/3")
    pub take_num: String,
    /// Start timecode
    pub start: String,
    /// End timecode
    pub end: String,
}

impl RawRecord {
    /// Creates a record inside the given time window
    pub fn new(speaker: &str, dialogue: &str, take_num: &str, window: TimeWindow<'_>) -> Self {
        RawRecord {
            speaker: speaker.to_string(),
            dialogue: dialogue.to_string(),
            take_num: take_num.to_string(),
            start: window.start.to_string(),
            end: window.end.to_string(),
        }
    }
}

/// The timecode pair shared by every record of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// Common trait for both dialect parsers
///
/// Implementations never fail: malformed segments are recovered from
/// internally and reported through the `log` facade.
pub trait DialectParser: Debug {
    /// Parse a transcript body into raw records
    ///
    /// # Arguments
    /// * `body` - Transcript body, already routed to this dialect
    /// * `config` - Marker literals and placeholders
    /// * `progress` - Receives the share of timecodes consumed so far
    fn parse(
        &self,
        body: &str,
        config: &ParserConfig,
        progress: &mut dyn ProgressSink,
    ) -> Vec<RawRecord>;
}
