use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{CreateGameView, LoginView, MenuView, QuizView, SavedGamesView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LoginView)] Login {},
        #[route("/menu", MenuView)] Menu {},
        #[route("/create", CreateGameView)] CreateGame {},
        #[route("/games", SavedGamesView)] SavedGames {},
        #[route("/play/:game_id", QuizView)] Quiz { game_id: i64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "CASE FILE" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
