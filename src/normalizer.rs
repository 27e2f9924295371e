/*!
 * Record normalizer: raw parser records to the final take table.
 *
 * - A trailing annotation character on the take number moves into `Typ`
 * - Fractional take numbers ("12/3") collapse to the integer after the slash
 * - Speakers are accent-folded and uppercased, dialogue is accent-folded
 */

use std::fmt;

use serde::Serialize;

use crate::parsers::RawRecord;
use crate::text_normalizer::fold_accents;

/// Characters that annotate a take number when they end it
pub const ANNOTATION_CHARS: [char; 4] = ['A', 'a', 'Ü', 'ü'];

/// Take number column value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TakeNumber {
    /// Collapsed fractional take number
    Number(i64),
    /// Take number kept as written
    Label(String),
}

impl fmt::Display for TakeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TakeNumber::Number(n) => write!(f, "{}", n),
            TakeNumber::Label(s) => write!(f, "{}", s),
        }
    }
}

/// One row of the final table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "TakeNr")]
    pub take_nr: TakeNumber,

    #[serde(rename = "In")]
    pub time_in: String,

    #[serde(rename = "Out")]
    pub time_out: String,

    /// Empty or a folded annotation code ("A", "a", "UE", "ue")
    #[serde(rename = "Typ")]
    pub annotation: String,

    #[serde(rename = "Rolle")]
    pub role: String,

    #[serde(rename = "Text")]
    pub text: String,
}

impl NormalizedRecord {
    /// Column values in table order, rendered as text
    pub fn values(&self) -> [String; 6] {
        [
            self.take_nr.to_string(),
            self.time_in.clone(),
            self.time_out.clone(),
            self.annotation.clone(),
            self.role.clone(),
            self.text.clone(),
        ]
    }
}

/// Ordered rows with the fixed take-table columns
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TranscriptTable {
    rows: Vec<NormalizedRecord>,
}

impl TranscriptTable {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 6] = ["TakeNr", "In", "Out", "Typ", "Rolle", "Text"];

    pub fn rows(&self) -> &[NormalizedRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<NormalizedRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a TranscriptTable {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Split a trailing annotation character off a take number
pub fn split_annotation(take_num: &str) -> (&str, Option<char>) {
    match take_num.chars().next_back() {
        Some(last) if ANNOTATION_CHARS.contains(&last) => {
            (&take_num[..take_num.len() - last.len_utf8()], Some(last))
        }
        _ => (take_num, None),
    }
}

/// Collapse "n/m" to `m`; anything else stays a label.
///
/// A field that does not fit in an `i64` also stays a label, so the take
/// number is never truncated.
pub fn collapse_take_number(take_num: &str) -> TakeNumber {
    if let Some((_, after)) = take_num.split_once('/') {
        let field = after.split('/').next().unwrap_or(after);
        if let Ok(number) = field.trim().parse::<i64>() {
            return TakeNumber::Number(number);
        }
    }
    TakeNumber::Label(take_num.to_string())
}

/// Normalize a single raw record
pub fn normalize_record(raw: &RawRecord) -> NormalizedRecord {
    let (take_num, annotation) = split_annotation(&raw.take_num);

    NormalizedRecord {
        take_nr: collapse_take_number(take_num),
        time_in: raw.start.clone(),
        time_out: raw.end.clone(),
        annotation: annotation
            .map(|c| fold_accents(&c.to_string()))
            .unwrap_or_default(),
        role: fold_accents(&raw.speaker).to_uppercase(),
        text: fold_accents(&raw.dialogue),
    }
}

/// Normalize every record, keeping order and count
pub fn normalize_records(raws: &[RawRecord]) -> TranscriptTable {
    TranscriptTable {
        rows: raws.iter().map(normalize_record).collect(),
    }
}
