/*!
 * Text normalization shared by the parsers and the record normalizer.
 *
 * - Accent folding of the German umlauts and sharp s to ASCII digraphs
 * - Line classification (speaker label, take number, plain text)
 * - Filtering of placeholder-only lines out of a raw segment
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::ParserConfig;

/// Pattern for a whole-line speaker label such as "SPRECHER A:" or "DR. MÜLLER:"
static SPEAKER_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-ZÄÖÜ .]+:$").expect("Invalid speaker label regex")
});

/// Pattern for a fractional take number at the start of a line ("12/3")
static TAKE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+/\d+").expect("Invalid take number regex")
});

/// Replace umlauts and sharp s with their ASCII digraphs.
///
/// ä -> ae, ö -> oe, ü -> ue, ß -> ss, and the uppercase forms map to
/// uppercase digraphs. Every other character is kept, so folding an
/// already folded string is a no-op.
pub fn fold_accents(text: &str) -> String {
    let mut folded = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            'ä' => folded.push_str("ae"),
            'ö' => folded.push_str("oe"),
            'ü' => folded.push_str("ue"),
            'ß' => folded.push_str("ss"),
            'Ä' => folded.push_str("AE"),
            'Ö' => folded.push_str("OE"),
            'Ü' => folded.push_str("UE"),
            'ẞ' => folded.push_str("SS"),
            other => folded.push(other),
        }
    }
    folded
}

/// Kind of a single content line in a tabular segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// "NAME:" line, carrying the name without the colon
    SpeakerLabel(String),
    /// Line opening with a "digits/digits" take number
    TakeNumber,
    /// Anything else: dialogue or continuation text
    Text,
}

/// Whether the line is nothing but a capitalized label followed by a colon
pub fn is_speaker_label(line: &str) -> bool {
    SPEAKER_LABEL_REGEX.is_match(line.trim_end())
}

/// Whether the line opens with a "digits/digits" take number
pub fn is_take_number(line: &str) -> bool {
    TAKE_NUMBER_REGEX.is_match(line)
}

/// Classify a line; speaker labels win over take numbers
pub fn classify_line(line: &str) -> LineKind {
    if is_speaker_label(line) {
        let label = line.trim_end();
        LineKind::SpeakerLabel(label[..label.len() - 1].to_string())
    } else if is_take_number(line) {
        LineKind::TakeNumber
    } else {
        LineKind::Text
    }
}

/// Lines of a raw segment with empty and placeholder-only lines removed
pub fn content_lines<'a>(segment: &'a str, config: &ParserConfig) -> Vec<&'a str> {
    segment
        .lines()
        .filter(|line| !config.is_blank_line(line))
        .collect()
}
