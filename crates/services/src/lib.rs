#![forbid(unsafe_code)]

pub mod error;
pub mod provider;
pub mod quiz_loop;

pub use quiz_core::Clock;

pub use error::{ProviderError, QuizLoopError};
pub use provider::{FixedQuestionSource, QuestionSource, TriviaConfig, TriviaService};
pub use quiz_loop::{QuizConfig, QuizLoopService, QuizOutcome};
