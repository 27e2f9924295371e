/*!
 * End-to-end tests for takebar transcripts
 */

use taketable::parsers::{DialectParser, TakebarParser};
use taketable::{
    parse, parse_with, Dialect, NoProgress, ParserConfig, ParseStatus, RawRecord,
    RecordingProgress, RenderedDocument, TakeNumber,
};
use crate::common;

fn takebar_records(text: &str) -> Vec<RawRecord> {
    TakebarParser.parse(text, &ParserConfig::default(), &mut NoProgress)
}

/// Test raw records of the takebar fixture
#[test]
fn test_takebarParser_withFixture_shouldHandleEveryBlockKind() {
    common::init_logging();
    let records = takebar_records(&common::takebar_text());

    let summary: Vec<(&str, &str, &str)> = records
        .iter()
        .map(|r| (r.take_num.as_str(), r.speaker.as_str(), r.dialogue.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1", "ANNA", "Guten Morgen."),
            ("1", "ANNA", "Wie geht's?"),
            ("2A", "MAX", "Mir geht's gut."),
            ("2A", "MAX", "Und dir?"),
            ("3", "", "ERROR"),
            ("4", "ERZÄHLER", ""),
            ("4", "Ende", ""),
        ]
    );

    // open-ended take keeps the literal end marker
    assert_eq!(records[5].start, "00:00:13:00");
    assert_eq!(records[5].end, "(null)");
    assert_eq!(records[6].end, "(null)");

    // the failed take keeps its window
    assert_eq!(records[4].start, "00:00:10:00");
    assert_eq!(records[4].end, "00:00:12:00");
}

/// Test the full pipeline on the takebar fixture
#[test]
fn test_parse_withTakebarDocument_shouldNormalizeRows() {
    let outcome = parse(&common::takebar_document());

    assert_eq!(outcome.status, ParseStatus::Ok);
    assert_eq!(outcome.dialect, Some(Dialect::Takebar));
    let table = outcome.table.expect("table expected");
    assert_eq!(table.len(), 7);

    let rows = table.rows();
    assert_eq!(rows[0].take_nr, TakeNumber::Label("1".to_string()));
    assert_eq!(rows[0].annotation, "");
    assert_eq!(rows[2].take_nr, TakeNumber::Label("2".to_string()));
    assert_eq!(rows[2].annotation, "A");
    assert_eq!(rows[4].text, "ERROR");
    assert_eq!(rows[5].role, "ERZAEHLER");
    assert_eq!(rows[6].role, "ENDE");
}

/// Test that one broken take among good ones only costs its own rows
#[test]
fn test_parse_withOneBrokenTake_shouldKeepAllOtherTakes() {
    let mut text = String::from("\n");
    for index in 1..=5 {
        text.push_str(&common::takebar_take(index, "SPRECHER", "Satz."));
    }
    text.push_str("00:00:06:00 - 00:00:06:12\n6\nKOPIERER\tANNA\n");

    let records = takebar_records(&text);

    assert_eq!(records.len(), 6);
    assert!(records[..5].iter().all(|r| r.speaker == "SPRECHER"));
    assert_eq!(records[5].dialogue, "ERROR");
    assert_eq!(records[5].take_num, "6");
    assert_eq!(records[5].start, "00:00:06:00");
}

/// Test that a continuation line may follow a speaker from an earlier take
#[test]
fn test_parse_withContinuationInNextTake_shouldUsePreviousSpeaker() {
    let text = "\n00:00:01:00 - 00:00:02:00\n1\nMAX\tHallo\n00:00:03:00 - 00:00:04:00\n2\n\tnoch da?\n";
    let records = takebar_records(text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].speaker, "MAX");
    assert_eq!(records[1].dialogue, "noch da?");
    assert_eq!(records[1].take_num, "2");
}

/// Test that an alternate marker extends a take number that already ends in the suffix
#[test]
fn test_parse_withAnnotatedTakeNumber_shouldAppendAlternateSuffix() {
    let text = "\n00:00:01:00 - 00:00:02:00\n7A\nA-TAKE\tB\teins\n\t\tzwei\n";
    let records = takebar_records(text);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.take_num == "7AA"));

    let table = taketable::normalizer::normalize_records(&records);
    assert_eq!(table.rows()[0].take_nr, TakeNumber::Label("7A".to_string()));
    assert_eq!(table.rows()[0].annotation, "A");
}

/// Test that rows read before a broken line survive next to the error row
#[test]
fn test_parse_withBrokenLineAfterGoodLines_shouldKeepEarlierRows() {
    let text = "\n00:00:01:00 - 00:00:02:00\n9\nANNA\tHallo\nKOPIERER\tMAX\n00:00:03:00 - 00:00:04:00\n10\nBEN\tTag\n";
    let records = takebar_records(text);

    let summary: Vec<(&str, &str, &str)> = records
        .iter()
        .map(|r| (r.take_num.as_str(), r.speaker.as_str(), r.dialogue.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("9", "ANNA", "Hallo"),
            ("9", "", "ERROR"),
            ("10", "BEN", "Tag"),
        ]
    );
    assert_eq!(records[1].start, "00:00:01:00");
}

/// Test that decorative backticks never reach the output
#[test]
fn test_parse_withBackticks_shouldStripThem() {
    let text = "\n`00:00:01:00 - 00:00:02:00`\n`7`\nANNA\t`Hallo`\n";
    let records = takebar_records(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].take_num, "7");
    assert_eq!(records[0].dialogue, "Hallo");
    assert!(records.iter().all(|r| !r.dialogue.contains('`') && !r.take_num.contains('`')));
}

/// Test that a dash-only leading segment is skipped
#[test]
fn test_parse_withDashSegment_shouldNotConsumeRange() {
    let text = "\n - \n00:00:01:00 - 00:00:02:00\n1\nA\teins\n00:00:03:00 - 00:00:04:00\n2\nB\tzwei\n";
    let records = takebar_records(text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].start, "00:00:01:00");
    assert_eq!(records[1].start, "00:00:03:00");
}

/// Test progress reporting on the takebar fixture
#[test]
fn test_parseWith_withRecordingProgress_shouldReportPerSegment() {
    let document = common::takebar_document();
    let mut progress = RecordingProgress::new();

    let outcome = parse_with(&document, &ParserConfig::default(), &mut progress);

    assert_eq!(outcome, parse(&document));
    assert_eq!(progress.values, vec![0, 0, 25, 50, 75]);
    assert!(progress.finished);
    assert!(progress.values.windows(2).all(|w| w[0] <= w[1]));
}

/// Test that a custom error sentinel is used for failed takes
#[test]
fn test_parseWith_withCustomSentinel_shouldUseIt() {
    let config = ParserConfig {
        error_sentinel: "FEHLER".to_string(),
        ..ParserConfig::default()
    };
    let document = RenderedDocument::new("\n00:00:01:00 - 00:00:02:00\n1\n\tverwaist\n");

    let outcome = parse_with(&document, &config, &mut NoProgress);
    let table = outcome.table.expect("table expected");

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].text, "FEHLER");
    assert_eq!(table.rows()[0].take_nr, TakeNumber::Label("1".to_string()));
}
