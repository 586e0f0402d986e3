use std::collections::HashSet;

use thiserror::Error;

/// Every quiz question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

/// Errors that can occur while building a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question prompt must not be empty")]
    EmptyPrompt,

    #[error("expected {OPTION_COUNT} options, got {0}")]
    WrongOptionCount(usize),

    #[error("duplicate option text: {0}")]
    DuplicateOption(String),

    #[error("correct answer is not one of the options")]
    CorrectNotInOptions,
}

/// A single multiple-choice question, immutable once built.
///
/// Invariant: `correct` is always an element of `options`, and the four
/// option texts are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: String,
}

impl Question {
    /// Build a question, validating the option invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, the option count is
    /// not four, an option repeats, or the correct answer is missing from
    /// the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(options.len()));
        }
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        let correct = correct.into();
        if !options.iter().any(|option| *option == correct) {
            return Err(QuestionError::CorrectNotInOptions);
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Returns true when the given option text is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }

    /// Returns true when the given text is one of this question's options.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}
