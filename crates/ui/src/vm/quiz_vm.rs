use quiz_core::model::QuizSession;

/// Visual state of one option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Clickable, nothing chosen yet.
    Selectable,
    /// The unconfirmed current selection.
    Selected,
    /// Locked question: this is the correct answer.
    RevealedCorrect,
    /// Locked question: the player's wrong pick.
    RevealedIncorrect,
    /// Locked question: any other option.
    RevealedOther,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub state: OptionState,
}

/// Button enablement for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavVm {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// The confirm button only appears for an unlocked, selected question.
    pub show_confirm: bool,
}

/// Map a question's options to their visual states.
///
/// Pure function of the session; rendering never mutates quiz state.
#[must_use]
pub fn option_states(session: &QuizSession, index: usize) -> Vec<OptionVm> {
    let Some(question) = session.question(index) else {
        return Vec::new();
    };
    let selection = session.selection(index);
    let locked = session.is_locked(index);

    question
        .options()
        .iter()
        .map(|option| {
            let state = if locked {
                if question.is_correct(option) {
                    OptionState::RevealedCorrect
                } else if Some(option.as_str()) == selection {
                    OptionState::RevealedIncorrect
                } else {
                    OptionState::RevealedOther
                }
            } else if Some(option.as_str()) == selection {
                OptionState::Selected
            } else {
                OptionState::Selectable
            };
            OptionVm {
                text: option.clone(),
                state,
            }
        })
        .collect()
}

/// Navigation enablement for the session's current question.
#[must_use]
pub fn nav_state(session: &QuizSession) -> NavVm {
    let index = session.current_index();
    NavVm {
        prev_enabled: index > 0,
        next_enabled: index + 1 < session.question_count(),
        show_confirm: !session.is_finished()
            && !session.is_locked(index)
            && session.selection(index).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use quiz_core::time::fixed_now;

    fn build_session(count: usize) -> QuizSession {
        let questions = (0..count)
            .map(|id| {
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
            })
            .collect();
        QuizSession::new(questions, fixed_now()).unwrap()
    }

    #[test]
    fn unlocked_question_highlights_only_the_selection() {
        let mut session = build_session(1);
        session.select(0, "wrong b 0").unwrap();

        let options = option_states(&session, 0);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].state, OptionState::Selectable);
        assert_eq!(options[2].state, OptionState::Selected);
    }

    #[test]
    fn locked_question_reveals_deterministically() {
        let mut session = build_session(2);
        session.select(0, "wrong a 0").unwrap();
        session.confirm(0).unwrap();

        let first = option_states(&session, 0);
        assert_eq!(first[0].state, OptionState::RevealedCorrect);
        assert_eq!(first[1].state, OptionState::RevealedIncorrect);
        assert_eq!(first[2].state, OptionState::RevealedOther);
        assert_eq!(first[3].state, OptionState::RevealedOther);

        // Navigating away and back reproduces the exact same reveal.
        session.go_next();
        session.go_prev();
        assert_eq!(option_states(&session, 0), first);
    }

    #[test]
    fn correct_pick_reveals_without_an_incorrect_mark() {
        let mut session = build_session(1);
        session.select(0, "right 0").unwrap();
        session.confirm(0).unwrap();

        let options = option_states(&session, 0);
        assert_eq!(options[0].state, OptionState::RevealedCorrect);
        assert!(options[1..]
            .iter()
            .all(|o| o.state == OptionState::RevealedOther));
    }

    #[test]
    fn nav_disables_at_bounds_and_gates_confirm() {
        let mut session = build_session(3);

        let nav = nav_state(&session);
        assert!(!nav.prev_enabled);
        assert!(nav.next_enabled);
        assert!(!nav.show_confirm);

        session.select(0, "right 0").unwrap();
        assert!(nav_state(&session).show_confirm);

        session.confirm(0).unwrap();
        assert!(!nav_state(&session).show_confirm);

        session.go_next();
        session.go_next();
        let nav = nav_state(&session);
        assert!(nav.prev_enabled);
        assert!(!nav.next_enabled);
    }
}
