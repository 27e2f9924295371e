/*!
 * Parser for the tabular transcript layout.
 *
 * The body is split on every bare timecode; each content segment sits
 * between a start and an end timecode and holds one or more
 * "SPEAKER:" / dialogue / "n/m" groups. Lines are classified once and then
 * walked with an index cursor; every step either advances the cursor or
 * stops the segment, so a segment can never loop.
 */

use log::{debug, warn};

use super::{DialectParser, RawRecord, TimeWindow};
use crate::app_config::ParserConfig;
use crate::errors::SegmentError;
use crate::progress::{percent_of, ProgressSink};
use crate::text_normalizer::{classify_line, content_lines, LineKind};
use crate::timecode::{find_timecodes, split_on_timecodes};

/// Parser for bare-timecode transcripts
#[derive(Debug, Default, Clone, Copy)]
pub struct TabularParser;

/// A content line together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub text: &'a str,
    pub kind: LineKind,
}

/// Where the cursor goes after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Continue at this line index
    Continue(usize),
    /// The segment is finished; `Some` when content was left unparsed
    Stop(Option<SegmentError>),
}

/// Result of one cursor step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Record completed by this step, if any
    pub record: Option<RawRecord>,
    /// Take number that closed the record, becoming the current one
    pub take: Option<String>,
    pub next: Next,
}

impl Step {
    fn stop(reason: Option<SegmentError>) -> Self {
        Step { record: None, take: None, next: Next::Stop(reason) }
    }
}

/// Classify the content lines of one segment
pub fn classify_segment<'a>(lines: &[&'a str]) -> Vec<ClassifiedLine<'a>> {
    lines
        .iter()
        .map(|&text| ClassifiedLine { text, kind: classify_line(text) })
        .collect()
}

/// Advance one record from `at`.
///
/// `current_take` is the take number in force when the group has no
/// closing take-number line of its own.
pub fn step(
    lines: &[ClassifiedLine<'_>],
    at: usize,
    window: TimeWindow<'_>,
    current_take: &str,
) -> Step {
    let Some(head) = lines.get(at) else {
        return Step::stop(None);
    };

    let speaker = match &head.kind {
        LineKind::TakeNumber => {
            // bare take line: no speaker or dialogue, ends the segment
            return Step {
                record: Some(RawRecord::new("", "", head.text, window)),
                take: None,
                next: Next::Stop(None),
            };
        }
        LineKind::Text => {
            return Step::stop(Some(SegmentError::UnexpectedLine(head.text.to_string())));
        }
        LineKind::SpeakerLabel(name) => name.as_str(),
    };

    let Some(first) = lines.get(at + 1) else {
        return Step::stop(Some(SegmentError::MissingDialogue { speaker: speaker.to_string() }));
    };
    let mut dialogue = first.text.to_string();
    let mut next = at + 2;

    let Some(following) = lines.get(next) else {
        return Step {
            record: Some(RawRecord::new(speaker, &dialogue, current_take, window)),
            take: None,
            next: Next::Stop(None),
        };
    };

    if following.kind == LineKind::Text {
        dialogue.push_str(following.text);
        next += 1;
    }

    // a continued group that runs into the end of the segment is dropped
    let Some(closing) = lines.get(next) else {
        return Step::stop(None);
    };

    match closing.kind {
        LineKind::TakeNumber => Step {
            record: Some(RawRecord::new(speaker, &dialogue, closing.text, window)),
            take: Some(closing.text.to_string()),
            next: Next::Continue(next + 1),
        },
        LineKind::SpeakerLabel(_) => Step {
            record: Some(RawRecord::new(speaker, &dialogue, current_take, window)),
            take: None,
            next: Next::Continue(next),
        },
        LineKind::Text => Step {
            record: Some(RawRecord::new(speaker, &dialogue, current_take, window)),
            take: None,
            next: Next::Stop(Some(SegmentError::Stuck { line: next })),
        },
    }
}

/// Walk one segment to completion, appending its records
fn parse_segment(
    lines: &[ClassifiedLine<'_>],
    window: TimeWindow<'_>,
    current_take: &mut String,
    records: &mut Vec<RawRecord>,
) {
    let mut cursor = 0;
    loop {
        let step = step(lines, cursor, window, current_take.as_str());
        if let Some(take) = step.take {
            *current_take = take;
        }
        if let Some(record) = step.record {
            records.push(record);
        }
        match step.next {
            Next::Continue(at) => cursor = at,
            Next::Stop(None) => break,
            Next::Stop(Some(reason @ SegmentError::Stuck { .. })) => {
                warn!(
                    "Dropping rest of segment {} - {}: {}",
                    window.start, window.end, reason
                );
                break;
            }
            Next::Stop(Some(reason)) => {
                debug!("Segment {} - {} ended early: {}", window.start, window.end, reason);
                break;
            }
        }
    }
}

impl DialectParser for TabularParser {
    fn parse(
        &self,
        body: &str,
        config: &ParserConfig,
        progress: &mut dyn ProgressSink,
    ) -> Vec<RawRecord> {
        let timecodes = find_timecodes(body);
        let segments = split_on_timecodes(body);
        debug!(
            "Tabular body: {} timecodes, {} segments",
            timecodes.len(),
            segments.len()
        );

        let mut records = Vec::new();
        let mut consumed = 0;
        let mut current_take = String::new();

        for segment in segments {
            let lines = content_lines(segment, config);
            if lines.first().is_none_or(|line| line.starts_with(&config.take_marker_prefix)) {
                continue;
            }
            if consumed + 1 >= timecodes.len() {
                if consumed < timecodes.len() {
                    warn!("Odd number of timecodes; last timecode {} has no partner", timecodes[consumed]);
                }
                break;
            }

            let window = TimeWindow {
                start: timecodes[consumed],
                end: timecodes[consumed + 1],
            };
            consumed += 2;

            let classified = classify_segment(&lines);
            parse_segment(&classified, window, &mut current_take, &mut records);

            progress.report(percent_of(consumed, timecodes.len()));
        }

        records
    }
}
