use serde::{Deserialize, Serialize};

use crate::dataset::record::QuestionRecord;

pub const FIELD_DELIMITER: char = ';';
pub const OPTION_DELIMITER: char = '|';

/// Column layout of the questions file. The format changed over time, so the
/// variant is a configuration choice and is never guessed from the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// `category;difficulty;prompt;<option...>;solution` with any number of
    /// option fields. The solution is always the last field.
    #[default]
    Wide,
    /// `category;difficulty;prompt;solution;options` where the options sit in
    /// a single field joined by `|`.
    Fixed,
}

impl SchemaVariant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wide" => Some(SchemaVariant::Wide),
            "fixed" => Some(SchemaVariant::Fixed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVariant::Wide => "wide",
            SchemaVariant::Fixed => "fixed",
        }
    }

    fn min_fields(self) -> usize {
        match self {
            SchemaVariant::Wide => 4,
            SchemaVariant::Fixed => 5,
        }
    }
}

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub records: Vec<QuestionRecord>,
    /// Distinct categories in first-seen order; drives board column order.
    pub categories: Vec<String>,
    pub skipped_rows: usize,
    pub replaced_rows: usize,
}

/// Parses delimiter-separated question rows. The first line is a header and
/// is always skipped. Rows with too few fields, a non-integer difficulty, or
/// an empty category are counted and dropped rather than failing the whole
/// file. A later row with an already-seen (category, difficulty) pair
/// replaces the earlier record in place, so board order stays stable.
pub fn parse(text: &str, schema: SchemaVariant) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in text.trim().lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let Some(record) = parse_row(line, schema) else {
            outcome.skipped_rows += 1;
            continue;
        };

        if !outcome.categories.contains(&record.category) {
            outcome.categories.push(record.category.clone());
        }

        let existing = outcome
            .records
            .iter()
            .position(|r| r.category == record.category && r.difficulty == record.difficulty);
        match existing {
            Some(index) => {
                outcome.records[index] = record;
                outcome.replaced_rows += 1;
            }
            None => outcome.records.push(record),
        }
    }

    outcome
}

fn parse_row(line: &str, schema: SchemaVariant) -> Option<QuestionRecord> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() < schema.min_fields() {
        return None;
    }

    let category = fields[0];
    if category.is_empty() {
        return None;
    }
    let difficulty: u32 = fields[1].parse().ok()?;
    let prompt = fields[2];

    let (options, solution) = match schema {
        SchemaVariant::Wide => {
            let last = fields.len() - 1;
            let options = fields[3..last]
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
                .collect();
            (options, fields[last])
        }
        SchemaVariant::Fixed => {
            let options = fields[4]
                .split(OPTION_DELIMITER)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
                .collect();
            (options, fields[3])
        }
    };

    Some(QuestionRecord::new(
        category.to_string(),
        difficulty,
        prompt.to_string(),
        options,
        solution.to_string(),
    ))
}
