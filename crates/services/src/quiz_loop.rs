use std::sync::Arc;

use quiz_core::feedback::feedback_for;
use quiz_core::model::{
    FinishReason, LeaderboardEntry, PlayerName, QuizResult, QuizSession, LEADERBOARD_CAP,
};
use storage::leaderboard::LeaderboardStore;

use crate::error::QuizLoopError;
use crate::provider::QuestionSource;
use crate::Clock;

/// Tunables for a quiz run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub question_count: usize,
    pub duration_secs: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 20,
            duration_secs: 15 * 60,
        }
    }
}

/// Everything the results screen needs from a finished run.
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub result: QuizResult,
    pub feedback: &'static str,
    /// Leaderboard after recording this run, newest-first.
    pub board: Vec<LeaderboardEntry>,
}

/// Orchestrates quiz start and completion.
///
/// Owns the clock and the persistence seams so the session state machine
/// stays pure. Completion records one leaderboard entry on both the submit
/// and the timeout path.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    config: QuizConfig,
    questions: Arc<dyn QuestionSource>,
    leaderboard: LeaderboardStore,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: QuizConfig,
        questions: Arc<dyn QuestionSource>,
        leaderboard: LeaderboardStore,
    ) -> Self {
        Self {
            clock,
            config,
            questions,
            leaderboard,
        }
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// Fetch a fresh question set and open a session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Provider` when the fetch fails (no partial
    /// sessions are created) and `QuizLoopError::Session` for an empty set.
    pub async fn start_quiz(&self) -> Result<QuizSession, QuizLoopError> {
        let questions = self.questions.load(self.config.question_count).await?;
        Ok(QuizSession::new(questions, self.clock.now())?)
    }

    /// Finish the session and record the run on the leaderboard.
    ///
    /// A failed board write never loses the result: the outcome is still
    /// returned, with whatever board state could be read back.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` when the session already finished,
    /// so a submit racing the timeout completes only once.
    pub async fn finish_quiz(
        &self,
        session: &mut QuizSession,
        reason: FinishReason,
        player: &PlayerName,
    ) -> Result<QuizOutcome, QuizLoopError> {
        let now = self.clock.now();
        let result = session.finish(reason, now)?;

        let entry = LeaderboardEntry::new(player.as_str(), result.score, now);
        let board = match self.leaderboard.append(entry).await {
            Ok(board) => board,
            Err(_) => self
                .leaderboard
                .read_top(LEADERBOARD_CAP)
                .await
                .unwrap_or_default(),
        };

        let feedback = feedback_for(result.score, result.max_score);
        Ok(QuizOutcome {
            result,
            feedback,
            board,
        })
    }

    /// Read the current top of the board without finishing anything.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Storage` on backend read failures.
    pub async fn leaderboard_top(
        &self,
        n: usize,
    ) -> Result<Vec<LeaderboardEntry>, QuizLoopError> {
        Ok(self.leaderboard.read_top(n).await?)
    }
}
