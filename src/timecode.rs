/*!
 * Timecode tokenizer shared by both dialect parsers.
 *
 * Recognizes frame-accurate `HH:MM:SS:FF` tokens and `start - end` range
 * tokens in raw text. Field widths and values are deliberately unvalidated:
 * a token is any four colon-separated digit runs.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal used in place of a missing range end
pub const NULL_END: &str = "(null)";

// @const: Bare timecode regex
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+:\d+:\d+:\d+").expect("Invalid timecode regex")
});

// @const: Anchored timecode regex for whole-line checks
static TIMECODE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+:\d+:\d+:\d+$").expect("Invalid timecode line regex")
});

// @const: Timecode range regex ("start - end" or "start - (null)")
static RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+:\d+:\d+:\d+)\s+-\s+(\d+:\d+:\d+:\d+|\(null\))")
        .expect("Invalid timecode range regex")
});

/// A `start - end` token pair borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeRange<'a> {
    /// Start timecode
    pub start: &'a str,
    /// End timecode, or `(null)`
    pub end: &'a str,
}

/// Whether the whole (trimmed) line is a single timecode token
pub fn is_timecode(line: &str) -> bool {
    TIMECODE_LINE_REGEX.is_match(line.trim())
}

/// Whether any bare timecode token occurs in the text
pub fn contains_timecode(text: &str) -> bool {
    TIMECODE_REGEX.is_match(text)
}

/// Whether any range token occurs in the text
pub fn contains_range(text: &str) -> bool {
    RANGE_REGEX.is_match(text)
}

/// All bare timecode tokens in document order
pub fn find_timecodes(text: &str) -> Vec<&str> {
    TIMECODE_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// All range tokens in document order
pub fn find_ranges(text: &str) -> Vec<TimecodeRange<'_>> {
    RANGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            Some(TimecodeRange {
                start: caps.get(1)?.as_str(),
                end: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Text between bare timecode tokens; always one more piece than tokens
pub fn split_on_timecodes(text: &str) -> Vec<&str> {
    TIMECODE_REGEX.split(text).collect()
}

/// Text between range tokens; always one more piece than ranges
pub fn split_on_ranges(text: &str) -> Vec<&str> {
    RANGE_REGEX.split(text).collect()
}
