//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizError};
use storage::repository::StorageError;

/// Errors emitted by question providers.
///
/// A provider load is all-or-nothing: any of these means no question set
/// was produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("question provider answered with code {0}")]
    Api(u8),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by the quiz loop service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Session(#[from] QuizError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
