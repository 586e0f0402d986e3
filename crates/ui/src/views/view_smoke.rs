use std::sync::Arc;

use quiz_core::model::{FinishReason, Question};
use services::{FixedQuestionSource, ProviderError, QuestionSource};
use storage::leaderboard::LeaderboardStore;

use super::quiz::QuizIntent;
use super::test_harness::{drive_dom, setup_view_harness, ViewKind};

fn build_question(id: usize) -> Question {
    Question::new(
        format!("Question {id}?"),
        vec![
            format!("right {id}"),
            format!("wrong a {id}"),
            format!("wrong b {id}"),
            format!("wrong c {id}"),
        ],
        format!("right {id}"),
    )
    .unwrap()
}

fn fixed_source(count: usize) -> Arc<FixedQuestionSource> {
    Arc::new(FixedQuestionSource::new(
        (0..count).map(build_question).collect(),
    ))
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_name_gate() {
    let mut harness = setup_view_harness(ViewKind::Home, fixed_source(1), 1);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Save name"), "missing save button in {html}");
    assert!(html.contains("player-name"), "missing name input in {html}");
    // No quiz controls before a name is saved.
    assert!(!html.contains("Start Quiz"), "start leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("Ada".into()), fixed_source(3), 3);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Q1. Question 0?"), "missing prompt in {html}");
    assert!(html.contains("right 0"), "missing option in {html}");
    assert!(html.contains("Score: 0"), "missing scoreboard in {html}");
    assert!(html.contains("15:00"), "missing timer label in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
}

struct FailingSource;

#[async_trait::async_trait]
impl QuestionSource for FailingSource {
    async fn load(&self, _count: usize) -> Result<Vec<Question>, ProviderError> {
        Err(ProviderError::Api(2))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_surfaces_fetch_failure() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz("Ada".into()), Arc::new(FailingSource), 3);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not load questions"),
        "missing fetch error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Q1."), "question leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_smoke_select_confirm_submit() {
    let mut harness = setup_view_harness(ViewKind::Quiz("Ada".into()), fixed_source(2), 2);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();

    // Confirming before selecting is a visible prompt, not a transition.
    dispatch.call(QuizIntent::Confirm);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("Please choose an option before confirming."),
        "missing confirm prompt in {html}"
    );

    dispatch.call(QuizIntent::Select("right 0".to_string()));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("option-btn--selected"),
        "missing selection highlight in {html}"
    );
    assert!(html.contains("Final Decision"), "missing confirm in {html}");

    dispatch.call(QuizIntent::Confirm);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Score: 2"), "score not applied in {html}");
    assert!(
        html.contains("option-btn--correct"),
        "missing reveal in {html}"
    );

    let session = handles.session();
    assert!(session.read().as_ref().unwrap().is_locked(0));

    dispatch.call(QuizIntent::Finish(FinishReason::Submitted));
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Ada, your final score: 2"),
        "missing banner in {html}"
    );
    assert!(html.contains("Nice job"), "missing feedback in {html}");
    assert!(
        html.contains("Recent leaderboard"),
        "missing leaderboard in {html}"
    );
    assert!(
        html.contains("Ada — 2 pts"),
        "missing board entry in {html}"
    );
    assert!(html.contains("Retake Quiz"), "missing retake in {html}");

    // The run was persisted, not just rendered.
    let board = LeaderboardStore::new(Arc::clone(&harness.storage.kv));
    let top = board.read_top(10).await.expect("read board");
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "Ada");
    assert_eq!(top[0].score, 2);
}
