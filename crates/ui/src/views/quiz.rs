use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::model::{Countdown, FinishReason, PlayerName, QuizError, QuizSession, Tick};
use services::QuizOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{
    format_mm_ss, map_results, nav_state, option_states, BoardRowVm, NavVm, OptionState, OptionVm,
    ResultsVm,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Every mutation of the running quiz flows through one of these.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum QuizIntent {
    Select(String),
    Confirm,
    Next,
    Prev,
    RequestSubmit,
    CancelSubmit,
    Finish(FinishReason),
}

/// Display data for the current question, derived fresh from the session.
struct QuestionBlock {
    heading: String,
    options: Vec<OptionVm>,
    nav: NavVm,
    score_label: String,
    progress_label: String,
}

#[component]
pub fn QuizView(player: String) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let player_name = PlayerName::new(player.clone()).ok();

    let session = use_signal(|| None::<QuizSession>);
    let outcome = use_signal(|| None::<QuizOutcome>);
    let prompt_error = use_signal(|| None::<&'static str>);
    let confirm_submit = use_signal(|| false);
    let countdown = use_signal(|| Countdown::new(0));

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        let player_name = player_name.clone();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let mut outcome = outcome;
            let mut prompt_error = prompt_error;
            let mut confirm_submit = confirm_submit;
            let mut countdown = countdown;

            match intent {
                QuizIntent::Select(option) => {
                    if let Some(session) = session.write().as_mut() {
                        let index = session.current_index();
                        // Locked and finished questions ignore the click.
                        if session.select(index, &option).is_ok() {
                            prompt_error.set(None);
                        }
                    }
                }
                QuizIntent::Confirm => {
                    if let Some(session) = session.write().as_mut() {
                        let index = session.current_index();
                        match session.confirm(index) {
                            Ok(_) => prompt_error.set(None),
                            Err(QuizError::NoSelection(_)) => prompt_error
                                .set(Some("Please choose an option before confirming.")),
                            Err(_) => {}
                        }
                    }
                }
                QuizIntent::Next => {
                    if let Some(session) = session.write().as_mut() {
                        session.go_next();
                    }
                    prompt_error.set(None);
                }
                QuizIntent::Prev => {
                    if let Some(session) = session.write().as_mut() {
                        session.go_prev();
                    }
                    prompt_error.set(None);
                }
                QuizIntent::RequestSubmit => confirm_submit.set(true),
                QuizIntent::CancelSubmit => confirm_submit.set(false),
                QuizIntent::Finish(reason) => {
                    if outcome.read().is_some() {
                        return;
                    }
                    let Some(player_name) = player_name.clone() else {
                        return;
                    };
                    confirm_submit.set(false);
                    // Both the submit and the timeout path stop the clock.
                    countdown.write().stop();

                    let quiz_loop = quiz_loop.clone();
                    spawn(async move {
                        let mut local = { session.write().take() };
                        let Some(mut value) = local.take() else {
                            return;
                        };
                        let finished = quiz_loop
                            .finish_quiz(&mut value, reason, &player_name)
                            .await;

                        // Put the session back so the view stays consistent.
                        {
                            let mut guard = session.write();
                            *guard = Some(value);
                        }

                        if let Ok(result) = finished {
                            outcome.set(Some(result));
                        }
                        // The only error here is a second finish on an
                        // already-frozen session; nothing to do.
                    });
                }
            }
        })
    };

    // One-second driver for the countdown; lives as long as the view.
    // Reads in this task are untracked, and a stopped countdown is never
    // written, so idle seconds cause no re-renders.
    use_hook(|| {
        spawn(async move {
            let mut countdown = countdown;
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if !countdown.read().is_running() {
                    continue;
                }
                let tick = { countdown.write().tick() };
                if matches!(tick, Tick::Expired) {
                    dispatch.call(QuizIntent::Finish(FinishReason::TimedOut));
                }
            }
        });
    });

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut session = session;
        let mut outcome = outcome;
        let mut prompt_error = prompt_error;
        let mut confirm_submit = confirm_submit;
        let mut countdown = countdown;

        async move {
            outcome.set(None);
            prompt_error.set(None);
            confirm_submit.set(false);

            let started = quiz_loop
                .start_quiz()
                .await
                .map_err(|_| ViewError::Fetch)?;
            session.set(Some(started));
            countdown.set(Countdown::new(quiz_loop.config().duration_secs));
            Ok::<_, ViewError>(())
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let on_restart = {
        let mut resource = resource;
        use_callback(move |()| {
            let mut session = session;
            let mut outcome = outcome;
            let mut countdown = countdown;
            countdown.write().stop();
            outcome.set(None);
            session.set(None);
            resource.restart();
        })
    };

    let state = view_state_from_resource(&resource);
    let invalid_player = player_name.is_none();
    let prompt_message = *prompt_error.read();
    let submit_pending = confirm_submit();
    let timer_label = format_mm_ss(countdown.read().remaining());
    let results = outcome
        .read()
        .as_ref()
        .map(|finished| map_results(finished, &player));

    let session_guard = session.read();
    let question_block = session_guard.as_ref().map(|session| {
        let index = session.current_index();
        QuestionBlock {
            heading: format!("Q{}. {}", index + 1, session.current_question().prompt()),
            options: option_states(session, index),
            nav: nav_state(session),
            score_label: format!("Score: {}", session.score()),
            progress_label: format!(
                "{} / {} answered",
                session.locked_count(),
                session.question_count()
            ),
        }
    });

    rsx! {
        div { class: "page quiz-page",
            if invalid_player {
                p { class: "form-error", "Save your name before starting a quiz." }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back to Home" }
            } else if let Some(results) = results {
                ResultsPanel { results, on_retake: on_restart }
            } else {
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { class: "loading", "Loading questions..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_restart.call(()),
                            "Retry"
                        }
                    },
                    ViewState::Ready(()) => rsx! {
                        if let Some(block) = question_block {
                            header { class: "quiz-status",
                                span { class: "quiz-timer", id: "timer", "{timer_label}" }
                                span { class: "quiz-score", id: "live-scoreboard", "{block.score_label}" }
                                span { class: "quiz-progress", "{block.progress_label}" }
                            }
                            h2 { class: "question-text", id: "question-text", "{block.heading}" }
                            ul { class: "options-list", id: "options-list",
                                for option in block.options {
                                    OptionButton { option, on_intent: dispatch }
                                }
                            }
                            if let Some(message) = prompt_message {
                                p { class: "form-error", "{message}" }
                            }
                            if block.nav.show_confirm {
                                button {
                                    class: "btn btn-confirm",
                                    id: "confirm-btn",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(QuizIntent::Confirm),
                                    "✅ Final Decision"
                                }
                            }
                            nav { class: "quiz-nav",
                                button {
                                    class: "btn",
                                    id: "prev-btn",
                                    r#type: "button",
                                    disabled: !block.nav.prev_enabled,
                                    onclick: move |_| dispatch.call(QuizIntent::Prev),
                                    "Previous"
                                }
                                button {
                                    class: "btn",
                                    id: "next-btn",
                                    r#type: "button",
                                    disabled: !block.nav.next_enabled,
                                    onclick: move |_| dispatch.call(QuizIntent::Next),
                                    "Next"
                                }
                            }
                            div { class: "quiz-submit",
                                if submit_pending {
                                    p { "Submit quiz now? You won't be able to change answers." }
                                    button {
                                        class: "btn btn-primary",
                                        id: "submit-confirm",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Finish(FinishReason::Submitted)),
                                        "Yes, submit"
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        id: "submit-cancel",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::CancelSubmit),
                                        "Keep going"
                                    }
                                } else {
                                    button {
                                        class: "btn",
                                        id: "submit-btn",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::RequestSubmit),
                                        "Submit Quiz"
                                    }
                                }
                            }
                        } else {
                            p { "No questions loaded." }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let (class, disabled) = match option.state {
        OptionState::Selectable => ("option-btn", false),
        OptionState::Selected => ("option-btn option-btn--selected", false),
        OptionState::RevealedCorrect => ("option-btn option-btn--correct", true),
        OptionState::RevealedIncorrect => ("option-btn option-btn--incorrect", true),
        OptionState::RevealedOther => ("option-btn option-btn--muted", true),
    };
    let text = option.text.clone();

    rsx! {
        li { class: "option-item",
            button {
                class: "{class}",
                r#type: "button",
                disabled,
                onclick: move |_| on_intent.call(QuizIntent::Select(text.clone())),
                "{option.text}"
            }
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, on_retake: EventHandler<()>) -> Element {
    rsx! {
        div { class: "results",
            h2 { class: "final-score", id: "final-score", "{results.banner}" }
            p { class: "feedback", "{results.feedback}" }

            div { class: "leaderboard",
                h3 { "Recent leaderboard" }
                if results.rows.is_empty() {
                    p { "No leaderboard data yet. Be the first!" }
                } else {
                    ol {
                        for row in results.rows {
                            BoardRow { row }
                        }
                    }
                }
            }

            button {
                class: "btn btn-start",
                id: "retake-quiz",
                r#type: "button",
                onclick: move |_| on_retake.call(()),
                "Retake Quiz"
            }
        }
    }
}

#[component]
fn BoardRow(row: BoardRowVm) -> Element {
    rsx! {
        li { class: "leaderboard-row",
            "{row.name} — {row.score} pts ({row.when})"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<Option<QuizSession>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        session: Signal<Option<QuizSession>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<Option<QuizSession>> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
