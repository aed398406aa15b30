//! Core data model types for lifequiz.
//!
//! These are the fundamental types the whole system passes around: parsed
//! dataset rows, generated questions, and scoring verdicts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One parsed data row: a column-name → cell-value mapping.
///
/// Column order is irrelevant; the order of records in a dataset matches the
/// source row order. Records are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Cell value for `column`, if the row had one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Number of populated columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A single quiz question.
///
/// `correct_answer` is `None` when no matching dataset record was found. The
/// question is still asked; it just can never be scored correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The text shown to the player.
    pub prompt: String,
    /// The looked-up value, absent on a lookup miss.
    pub correct_answer: Option<f64>,
}

/// Outcome of scoring one submitted guess, consumed by the presentation
/// layer for feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the guess fell within tolerance of the answer.
    pub correct: bool,
    /// The answer the guess was checked against, for the feedback line.
    pub correct_answer: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_get_and_missing_column() {
        let record: Record = [("Entity", "World"), ("Year", "2023")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(record.get("Entity"), Some("World"));
        assert_eq!(record.get("Year"), Some("2023"));
        assert_eq!(record.get("Code"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn empty_record() {
        let record = Record::default();
        assert!(record.is_empty());
        assert_eq!(record.get("anything"), None);
    }

    #[test]
    fn unanswerable_question_keeps_its_prompt() {
        let question = Question {
            prompt: "What is the life expectancy in Atlantis in 2023?".into(),
            correct_answer: None,
        };
        assert!(question.correct_answer.is_none());
        assert!(question.prompt.contains("Atlantis"));
    }
}
