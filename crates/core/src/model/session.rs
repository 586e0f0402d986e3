use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

use crate::model::Question;

/// Points awarded for a confirmed correct answer.
pub const CORRECT_POINTS: i32 = 2;
/// Points applied for a confirmed wrong answer.
pub const WRONG_POINTS: i32 = -2;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors emitted by quiz session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for a session")]
    Empty,

    #[error("question index {0} out of range")]
    OutOfRange(usize),

    #[error("question {0} is already locked")]
    Locked(usize),

    #[error("option is not part of question {0}")]
    UnknownOption(usize),

    #[error("no selection to confirm for question {0}")]
    NoSelection(usize),

    #[error("session already finished")]
    Finished,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The player submitted the quiz.
    Submitted,
    /// The countdown ran out.
    TimedOut,
}

/// Verdict for a single confirmed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub index: usize,
    pub correct: bool,
    pub delta: i32,
    /// Running total after this confirmation.
    pub score: i32,
}

/// Final outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub score: i32,
    pub max_score: i32,
    /// Number of questions that were confirmed (locked).
    pub answered: usize,
    pub reason: FinishReason,
    pub finished_at: DateTime<Utc>,
}

/// In-memory state machine for one quiz run.
///
/// Each question index moves `Unanswered → Selected → Locked`; only locked
/// indices ever contribute to the score, and each contributes exactly once.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<usize, String>,
    locked: HashSet<usize>,
    scored: HashSet<usize>,
    score: i32,
    started_at: DateTime<Utc>,
    finished: Option<(FinishReason, DateTime<Utc>)>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            answers: HashMap::new(),
            locked: HashSet::new(),
            scored: HashSet::new(),
            score: 0,
            started_at,
            finished: None,
        })
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The unconfirmed or confirmed selection for a question, if any.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.contains(&index)
    }

    /// Number of confirmed questions.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Highest score reachable if every question is confirmed correct.
    #[must_use]
    pub fn max_score(&self) -> i32 {
        // question_count is bounded by the provider request size, far below i32.
        self.questions.len() as i32 * CORRECT_POINTS
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished.map(|(reason, _)| reason)
    }

    /// Record an unconfirmed selection. Repeated calls overwrite the prior
    /// selection; the last click wins. Never changes the score.
    ///
    /// # Errors
    ///
    /// Rejected once the session is finished, when the index is locked or out
    /// of range, and when the option text is not part of the question.
    pub fn select(&mut self, index: usize, option: &str) -> Result<(), QuizError> {
        if self.finished.is_some() {
            return Err(QuizError::Finished);
        }
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::OutOfRange(index))?;
        if self.locked.contains(&index) {
            return Err(QuizError::Locked(index));
        }
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption(index));
        }

        self.answers.insert(index, option.to_owned());
        Ok(())
    }

    /// Lock the current selection and apply its score delta exactly once.
    ///
    /// Confirming an already-locked question is a no-op that returns the
    /// recorded verdict without touching the score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` when nothing is selected at `index`,
    /// `QuizError::Finished` once the session is over.
    pub fn confirm(&mut self, index: usize) -> Result<Confirmation, QuizError> {
        if self.finished.is_some() {
            return Err(QuizError::Finished);
        }
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::OutOfRange(index))?;
        let selected = self
            .answers
            .get(&index)
            .ok_or(QuizError::NoSelection(index))?;

        let correct = question.is_correct(selected);
        let delta = if correct { CORRECT_POINTS } else { WRONG_POINTS };

        // The scored set guards against double scoring on a re-confirm.
        if self.scored.insert(index) {
            self.locked.insert(index);
            self.score += delta;
        }

        Ok(Confirmation {
            index,
            correct,
            delta,
            score: self.score,
        })
    }

    /// Move to the next question, clamped to the last index.
    pub fn go_next(&mut self) -> usize {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
        self.current
    }

    /// Move to the previous question, clamped to index zero.
    pub fn go_prev(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Freeze the session and produce its final result.
    ///
    /// Selected-but-unconfirmed questions are deliberately left unscored:
    /// a selection without explicit confirmation counts as unanswered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` when called on an already-finished
    /// session, so a submit racing a timeout can only finish once.
    pub fn finish(
        &mut self,
        reason: FinishReason,
        at: DateTime<Utc>,
    ) -> Result<QuizResult, QuizError> {
        if self.finished.is_some() {
            return Err(QuizError::Finished);
        }
        self.finished = Some((reason, at));

        Ok(QuizResult {
            score: self.score,
            max_score: self.max_score(),
            answered: self.locked.len(),
            reason,
            finished_at: at,
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("locked", &self.locked.len())
            .field("score", &self.score)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
