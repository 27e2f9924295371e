/*!
 * Tests for progress sinks
 */

use indicatif::ProgressBar;
use taketable::{parse, parse_with, BarProgress, ParserConfig, ProgressSink, RecordingProgress};
use crate::common;

/// Test the recording sink
#[test]
fn test_recordingProgress_shouldKeepValuesInOrder() {
    let mut progress = RecordingProgress::new();
    progress.report(10);
    progress.report(60);

    assert_eq!(progress.values, vec![10, 60]);
    assert!(!progress.finished);

    progress.finish();
    assert!(progress.finished);
}

/// Test that a closure works as a sink
#[test]
fn test_closureSink_shouldReceiveReports() {
    let mut seen = Vec::new();
    {
        let mut sink = |percent: u8| seen.push(percent);
        let outcome = parse_with(&common::tabular_document(), &ParserConfig::default(), &mut sink);
        assert!(outcome.is_ok());
    }

    assert_eq!(seen.last(), Some(&100));
}

/// Test the progress bar adapter
#[test]
fn test_barProgress_shouldTrackReportedPercent() {
    let mut progress = BarProgress::hidden();

    progress.report(42);
    assert_eq!(progress.position(), 42);

    let outcome = parse_with(&common::tabular_document(), &ParserConfig::default(), &mut progress);
    assert!(outcome.is_ok());
    assert_eq!(progress.position(), 100);
}

/// Test that wrapping an existing bar resets its length
#[test]
fn test_barProgress_withExistingBar_shouldUseLengthOneHundred() {
    let bar = ProgressBar::hidden();
    bar.set_length(7);

    let mut progress = BarProgress::new(bar.clone());
    progress.report(50);

    assert_eq!(bar.length(), Some(100));
    assert_eq!(bar.position(), 50);
}

/// Test that progress reporting never changes results
#[test]
fn test_progressSinks_shouldNotAffectResults() {
    for document in [common::tabular_document(), common::takebar_document()] {
        let mut recording = RecordingProgress::new();
        let mut bar = BarProgress::hidden();

        let plain = parse(&document);
        let recorded = parse_with(&document, &ParserConfig::default(), &mut recording);
        let barred = parse_with(&document, &ParserConfig::default(), &mut bar);

        assert_eq!(plain, recorded);
        assert_eq!(plain, barred);
    }
}

/// Test that a document without timestamps still finishes the sink
#[test]
fn test_parseWith_withoutTimestamps_shouldFinishWithoutReports() {
    let mut progress = RecordingProgress::new();
    let document = common::document_with_anchor("Take 1\nkein Zeitcode\n", "Take 1");

    let outcome = parse_with(&document, &ParserConfig::default(), &mut progress);

    assert!(!outcome.is_ok());
    assert!(progress.values.is_empty());
    assert!(progress.finished);
}
