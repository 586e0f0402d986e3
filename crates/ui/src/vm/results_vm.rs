use quiz_core::model::FinishReason;
use services::QuizOutcome;

use crate::vm::board_vm::{map_board_rows, BoardRowVm, RECENT_SHOWN};

/// Everything the results screen renders, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsVm {
    pub banner: String,
    pub feedback: String,
    pub rows: Vec<BoardRowVm>,
}

/// Map a finished run to its display form.
#[must_use]
pub fn map_results(outcome: &QuizOutcome, player: &str) -> ResultsVm {
    let score = outcome.result.score;
    let banner = match outcome.result.reason {
        FinishReason::TimedOut => format!("⏰ Time's up! {player}, your score: {score}"),
        FinishReason::Submitted => format!("🎉 {player}, your final score: {score}"),
    };

    ResultsVm {
        banner,
        feedback: outcome.feedback.to_string(),
        rows: map_board_rows(&outcome.board, RECENT_SHOWN),
    }
}
