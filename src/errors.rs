/*!
 * Error types for the taketable crate.
 *
 * This module contains custom error types for the different stages of
 * transcript parsing, using the thiserror crate for ergonomic error definitions.
 * Only `DocumentError::NoTimestamps` is ever fatal; everything else is
 * recovered from inside the parsers.
 */

use thiserror::Error;

/// Status text reported when a document carries no usable timecodes
pub const NO_TIMESTAMPS_STATUS: &str = "Error: No timestamps found";

/// Errors raised while locating and routing the transcript body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The anchor text taken from the first table does not occur in the document text
    #[error("Body anchor not found in document text: {0:?}")]
    AnchorNotFound(String),

    /// No `HH:MM:SS:FF` token appears in the body
    #[error("Error: No timestamps found")]
    NoTimestamps,
}

/// Reasons a tabular segment stops before all of its lines are consumed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The cursor did not advance; the rest of the segment is dropped
    #[error("Segment made no progress at line {line}")]
    Stuck {
        /// Index of the line the cursor was stuck on
        line: usize,
    },

    /// A speaker label was the last line of the segment
    #[error("Speaker label {speaker:?} has no dialogue line")]
    MissingDialogue {
        /// The dangling speaker label
        speaker: String,
    },

    /// A line that is neither a speaker label nor a take number opened a record
    #[error("Unexpected line where a speaker or take number was expected: {0:?}")]
    UnexpectedLine(String),
}

/// Reasons a single takebar take is replaced by an error sentinel row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TakeFailure {
    /// A marker line did not carry the columns it requires
    #[error("Line {line:?} is missing column {column}")]
    MissingColumn {
        /// The offending source line
        line: String,
        /// Zero-based column index that was expected
        column: usize,
    },

    /// Continuation formatting consumed every column of a line
    #[error("Line {0:?} has no columns left after continuation handling")]
    EmptyColumns(String),

    /// A dialogue continuation appeared before any speaker was known
    #[error("Continuation line {0:?} has no preceding speaker")]
    ContinuationWithoutSpeaker(String),
}

/// Errors in the parser configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required marker or literal is empty
    #[error("Configuration value '{0}' must not be empty")]
    EmptyValue(&'static str),
}
