use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:player", QuizView)] Quiz { player: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "QuizVerse" }
                nav {
                    Link { to: Route::Home {}, "Home" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
