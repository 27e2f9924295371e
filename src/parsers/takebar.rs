/*!
 * Parser for the takebar transcript layout.
 *
 * Every take opens with a "start - end" range followed by the take number
 * on the first content line. The remaining lines are tab-separated
 * columns: speaker and dialogue, a leading empty column for a dialogue
 * continuation, or an inline A-TAKE / KOPIERER marker that opens an
 * alternate-take or copier block.
 *
 * A take that cannot be interpreted keeps the records read before the
 * failing line, gets a single error row appended, and parsing resumes at
 * the next take.
 */

use log::{debug, warn};

use super::{DialectParser, RawRecord, TimeWindow};
use crate::app_config::ParserConfig;
use crate::errors::TakeFailure;
use crate::progress::{percent_of, ProgressSink};
use crate::text_normalizer::content_lines;
use crate::timecode::{find_ranges, split_on_ranges};

/// Parser for take-bar transcripts
#[derive(Debug, Default, Clone, Copy)]
pub struct TakebarParser;

/// Block a take is currently inside of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    #[default]
    Normal,
    /// After a KOPIERER line
    InCopier,
    /// After an A-TAKE line
    InAlternate,
}

/// Outcome of parsing one take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeOutcome {
    /// Every line of the take was interpreted
    Parsed(Vec<RawRecord>),
    /// Interpretation stopped; an error row follows the records read so far
    Failed {
        /// Records of the lines before the failing one
        records: Vec<RawRecord>,
        /// Take number as far as it was read
        take_num: String,
        reason: TakeFailure,
    },
}

/// Per-take interpreter state
#[derive(Debug)]
struct TakeState<'c> {
    config: &'c ParserConfig,
    take_num: String,
    mode: BlockMode,
}

impl TakeState<'_> {
    /// Append the alternate-take suffix; every marker line adds one
    fn annotate_alternate(&mut self) {
        self.take_num.push_str(&self.config.alternate_take_suffix);
    }

    /// Interpret one tab-separated line as `(speaker, dialogue)`
    fn interpret_columns(
        &mut self,
        line: &str,
        last_speaker: &Option<String>,
    ) -> Result<(String, String), TakeFailure> {
        let mut columns: Vec<&str> = line.split('\t').collect();

        // continuation formatting inside a copier or alternate block;
        // alternate continuations do not extend the take number again
        if self.mode != BlockMode::Normal {
            if columns.first() == Some(&"") {
                columns.remove(0);
            } else {
                self.mode = BlockMode::Normal;
            }
        }

        let column = |index: usize| -> Result<&str, TakeFailure> {
            columns.get(index).copied().ok_or_else(|| TakeFailure::MissingColumn {
                line: line.to_string(),
                column: index,
            })
        };

        let first = *columns
            .first()
            .ok_or_else(|| TakeFailure::EmptyColumns(line.to_string()))?;

        if first.is_empty() {
            let dialogue = column(1)?;
            let speaker = last_speaker
                .clone()
                .ok_or_else(|| TakeFailure::ContinuationWithoutSpeaker(line.to_string()))?;
            return Ok((speaker, dialogue.to_string()));
        }

        if first == self.config.alternate_take_marker {
            let (speaker, dialogue) = match (columns.get(1), columns.get(2)) {
                (Some(speaker), Some(dialogue)) => (*speaker, *dialogue),
                (Some(dialogue), None) => ("", *dialogue),
                (None, _) => {
                    return Err(TakeFailure::MissingColumn {
                        line: line.to_string(),
                        column: 1,
                    });
                }
            };
            self.annotate_alternate();
            self.mode = BlockMode::InAlternate;
            return Ok((speaker.to_string(), dialogue.to_string()));
        }

        if first == self.config.copier_marker {
            let speaker = column(1)?;
            let dialogue = column(2)?;
            self.mode = BlockMode::InCopier;
            return Ok((speaker.to_string(), dialogue.to_string()));
        }

        let dialogue = columns.get(1).copied().unwrap_or("");
        Ok((first.to_string(), dialogue.to_string()))
    }
}

/// Parse the content lines of one take.
///
/// `last_speaker` carries the most recent speaker across takes so that a
/// continuation line always has someone to continue.
pub fn parse_take(
    lines: &[&str],
    window: TimeWindow<'_>,
    config: &ParserConfig,
    last_speaker: &mut Option<String>,
) -> TakeOutcome {
    let Some((head, rest)) = lines.split_first() else {
        return TakeOutcome::Parsed(Vec::new());
    };

    let mut state = TakeState {
        config,
        take_num: head
            .replace(' ', "")
            .replace(config.take_number_strip_char, ""),
        mode: BlockMode::Normal,
    };
    let mut records = Vec::new();

    for line in rest {
        if *line == "\t" {
            continue;
        }

        if !line.contains('\t') {
            // speaker-only line
            records.push(RawRecord::new(line, "", &state.take_num, window));
            *last_speaker = Some(line.to_string());
            continue;
        }

        match state.interpret_columns(line, last_speaker) {
            Ok((speaker, dialogue)) => {
                records.push(RawRecord::new(&speaker, &dialogue, &state.take_num, window));
                *last_speaker = Some(speaker);
            }
            Err(reason) => {
                return TakeOutcome::Failed {
                    records,
                    take_num: state.take_num,
                    reason,
                };
            }
        }
    }

    TakeOutcome::Parsed(records)
}

/// Whether a segment is document furniture rather than a take
fn is_furniture(lines: &[&str], config: &ParserConfig) -> bool {
    match lines {
        [] => true,
        [only] if only.trim() == "-" => true,
        [first, ..] => first.starts_with(&config.take_marker_prefix),
    }
}

impl DialectParser for TakebarParser {
    fn parse(
        &self,
        body: &str,
        config: &ParserConfig,
        progress: &mut dyn ProgressSink,
    ) -> Vec<RawRecord> {
        let body = body.replace(config.decorative_strip_char, "");
        let ranges = find_ranges(&body);
        let segments = split_on_ranges(&body);
        let total_timecodes = ranges.len() * 2;
        debug!("Takebar body: {} takes, {} segments", ranges.len(), segments.len());

        let mut records = Vec::new();
        let mut next_range = 0;
        let mut last_speaker: Option<String> = None;
        let mut failed = 0;

        for segment in segments {
            progress.report(percent_of(next_range * 2, total_timecodes));

            let lines = content_lines(segment, config);
            if is_furniture(&lines, config) {
                continue;
            }
            let Some(range) = ranges.get(next_range) else {
                break;
            };
            next_range += 1;

            let window = TimeWindow {
                start: range.start,
                end: range.end,
            };

            match parse_take(&lines, window, config, &mut last_speaker) {
                TakeOutcome::Parsed(take_records) => records.extend(take_records),
                TakeOutcome::Failed {
                    records: partial,
                    take_num,
                    reason,
                } => {
                    warn!(
                        "Take {} ({} - {}) could not be parsed: {}",
                        take_num, window.start, window.end, reason
                    );
                    failed += 1;
                    records.extend(partial);
                    records.push(RawRecord::new(
                        "",
                        &config.error_sentinel,
                        &take_num,
                        window,
                    ));
                }
            }
        }

        if failed > 0 {
            warn!("{} of {} takes ended in an error row", failed, next_range);
        }

        records
    }
}
