//! The quiz state machine.
//!
//! A [`Quiz`] is created once from a dataset and a [`QuizConfig`], then moves
//! through `InProgress → Finished` driven entirely by its caller: the engine
//! schedules nothing itself. Exactly one `Quiz` exists per session and it is
//! mutated only through the methods here, so `score <= current_index` holds
//! after every call, for any interleaving of submissions and advances.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::QuizError;
use crate::lookup::{self, DEFAULT_VALUE_COLUMN};
use crate::model::{Question, Record, Verdict};

/// Parameters for quiz generation and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Entities to build one question for, in order.
    pub entities: Vec<String>,
    /// Observation year the questions ask about.
    pub year: i32,
    /// Maximum absolute deviation still counted as a correct guess.
    pub tolerance: f64,
    /// Dataset column holding the queried statistic.
    pub value_column: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            entities: ["World", "United States", "China", "Africa", "Europe"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            year: 2023,
            tolerance: 2.0,
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

/// Where the quiz is in its lifecycle.
///
/// The loading step lives outside this type: a `Quiz` only exists once
/// generation has run, so constructing one is the `Loading → InProgress`
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// At least one question left to answer.
    InProgress,
    /// Every question advanced past; only the final score remains.
    Finished,
}

/// The quiz state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    /// Verdict for the current question, committed to `score` on `advance`.
    pending: Option<bool>,
    tolerance: f64,
}

impl Quiz {
    /// Build one question per configured entity and enter `InProgress`.
    ///
    /// Entities with no matching record still get a question; its
    /// `correct_answer` stays `None` and it can never score. An empty or
    /// unreachable dataset therefore produces a full quiz of unanswerable
    /// questions rather than an error.
    pub fn generate(config: &QuizConfig, records: &[Record]) -> Self {
        let questions = config
            .entities
            .iter()
            .map(|entity| {
                let value =
                    lookup::find_value(records, entity, config.year, &config.value_column);
                if value.is_none() {
                    warn!(
                        entity = entity.as_str(),
                        year = config.year,
                        "no dataset value found; question will be unanswerable"
                    );
                }
                Question {
                    prompt: format!(
                        "What is the life expectancy in {} in {}?",
                        entity, config.year
                    ),
                    correct_answer: value,
                }
            })
            .collect();

        Self {
            questions,
            current: 0,
            score: 0,
            pending: None,
            tolerance: config.tolerance,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.current >= self.questions.len() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// The question currently being asked.
    ///
    /// Calling this in the `Finished` phase is a caller bug and fails loudly
    /// with [`QuizError::OutOfRange`].
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions.get(self.current).ok_or(QuizError::OutOfRange {
            index: self.current,
            total: self.questions.len(),
        })
    }

    /// Score `guess` against the current question and return the verdict.
    ///
    /// Correct means `|guess - answer| <= tolerance`. A question with no
    /// located answer is incorrect by definition — spelled out as a match
    /// arm rather than left to a float comparison against nothing. The
    /// verdict is held as pending and committed by [`Quiz::advance`];
    /// resubmitting before advancing overwrites the pending verdict, so a
    /// question can never be counted twice.
    pub fn submit_answer(&mut self, guess: f64) -> Result<Verdict, QuizError> {
        let question = self.current_question()?;
        let correct = match question.correct_answer {
            Some(answer) => (guess - answer).abs() <= self.tolerance,
            None => false,
        };
        let verdict = Verdict {
            correct,
            correct_answer: question.correct_answer,
        };

        if self.pending.is_some() {
            debug!(question = self.current, "resubmission replaces pending verdict");
        }
        self.pending = Some(correct);
        Ok(verdict)
    }

    /// Commit the pending verdict and move to the next question.
    ///
    /// `current_index` increases by exactly one per call; the call that moves
    /// past the last question reaches `Finished`. A skipped question (no
    /// submission since the last advance) commits nothing. Advancing a
    /// finished quiz does nothing — only [`Quiz::current_question`] treats
    /// the terminal state as an error.
    pub fn advance(&mut self) {
        if self.is_finished() {
            debug!("advance called on a finished quiz");
            return;
        }
        if self.pending.take() == Some(true) {
            self.score += 1;
        }
        self.current += 1;
    }

    /// Index of the question currently being asked; equals
    /// `total_questions` once finished.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Questions answered correctly so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The final score; meaningful once the quiz is `Finished`.
    pub fn final_score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// All generated questions, in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
