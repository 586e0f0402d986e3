use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::PlayerName;

use crate::routes::Route;

/// Name gate: the quiz cannot start until a non-empty name is saved.
#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();
    let mut name_input = use_signal(String::new);
    let mut saved_name = use_signal(|| None::<PlayerName>);
    let mut name_error = use_signal(|| None::<&'static str>);

    let on_save = move |_: MouseEvent| match PlayerName::new(name_input()) {
        Ok(name) => {
            saved_name.set(Some(name));
            name_error.set(None);
        }
        Err(_) => name_error.set(Some("Please enter your name to continue!")),
    };

    let name_saved = saved_name.read().is_some();
    let player_label = saved_name
        .read()
        .as_ref()
        .map(|name| format!("Player: {name}"));
    let start_player = saved_name
        .read()
        .as_ref()
        .map(|name| name.as_str().to_string());

    rsx! {
        div { class: "page home-page",
            h2 { "Ready to play?" }
            p { "Twenty questions, one confirmed answer each. Correct picks score +2, wrong picks -2." }

            div { class: "name-gate",
                input {
                    id: "player-name",
                    class: "name-input",
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{name_input}",
                    disabled: name_saved,
                    oninput: move |evt| name_input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    id: "save-name",
                    r#type: "button",
                    disabled: name_saved,
                    onclick: on_save,
                    "Save name"
                }
            }

            if let Some(message) = *name_error.read() {
                p { class: "form-error", "{message}" }
            }

            if let Some(label) = player_label {
                p { class: "player-label", "{label}" }
            }
            if let Some(player) = start_player {
                button {
                    class: "btn btn-start",
                    id: "start-quiz",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Quiz {
                            player: player.clone(),
                        });
                    },
                    "Start Quiz"
                }
            }
        }
    }
}
