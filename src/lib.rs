/*!
 * # taketable - dubbing-script transcripts to take tables
 *
 * A Rust library that turns production transcripts (dialogue logs exported
 * from a word processor) into a normalized table of dialogue events, each
 * with a take number, an in/out timecode pair, a speaker and the text.
 *
 * ## Features
 *
 * - Auto-detection of the two known layouts:
 *   - tabular: bare `HH:MM:SS:FF` timecodes around speaker/dialogue/take lines
 *   - takebar: `start - end` take bars with tab-separated columns
 * - Alternate-take (A-TAKE) and copier (KOPIERER) block handling
 * - Best-effort recovery: broken segments are dropped or closed with an
 *   error row instead of aborting the document
 * - Umlaut folding and speaker normalization
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `document`: Rendered-document input and body anchor extraction
 * - `router`: Body location and dialect detection
 * - `parsers`: Dialect parsers:
 *   - `parsers::tabular`: Tabular layout
 *   - `parsers::takebar`: Takebar layout
 * - `normalizer`: Raw records to final table rows
 * - `timecode`, `text_normalizer`: Shared tokenizing and text helpers
 * - `transcript`: The top-level `parse` operation
 * - `progress`: Progress reporting sinks
 * - `app_config`: Parser configuration
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
// Test names follow the test_subject_withCondition_shouldOutcome convention
#![cfg_attr(test, allow(non_snake_case))]

// Public modules
pub mod app_config;
pub mod document;
pub mod errors;
pub mod normalizer;
pub mod parsers;
pub mod progress;
pub mod router;
pub mod text_normalizer;
pub mod timecode;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::ParserConfig;
pub use document::{DocumentTable, RenderedDocument};
pub use errors::{ConfigError, DocumentError, SegmentError, TakeFailure};
pub use normalizer::{NormalizedRecord, TakeNumber, TranscriptTable};
pub use parsers::RawRecord;
pub use progress::{BarProgress, NoProgress, ProgressSink, RecordingProgress};
pub use router::Dialect;
pub use transcript::{parse, parse_with, ParseOutcome, ParseStatus};
