use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{GameCardVm, map_game_cards};

#[component]
pub fn SavedGamesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let games = ctx.games();
    let mut delete_target = use_signal(|| None::<GameCardVm>);

    let games_for_resource = games.clone();
    let resource = use_resource(move || {
        let games = games_for_resource.clone();
        async move {
            let listed = games.list_games().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_game_cards(&listed))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page archive-page",
            h2 { "Case Archive" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Opening the archive..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => {
                    if cards.is_empty() {
                        rsx! {
                            p { class: "archive-empty", "No case files found." }
                        }
                    } else {
                        let rows = cards.iter().map(|card| {
                            let nav = navigator;
                            let open_id = card.id.value();
                            let card_for_delete = card.clone();
                            let mut delete_target = delete_target;
                            rsx! {
                                div { class: "case-card",
                                    div { class: "case-card-text",
                                        h3 { class: "case-name", "{card.name}" }
                                        p { class: "case-clues", "{card.clue_preview}" }
                                    }
                                    div { class: "case-card-actions",
                                        button {
                                            class: "btn btn-primary",
                                            r#type: "button",
                                            onclick: move |_| {
                                                let _ = nav.push(Route::Quiz { game_id: open_id });
                                            },
                                            "OPEN"
                                        }
                                        button {
                                            class: "btn btn-danger",
                                            r#type: "button",
                                            onclick: move |_| {
                                                delete_target.set(Some(card_for_delete.clone()));
                                            },
                                            "DELETE"
                                        }
                                    }
                                }
                            }
                        });
                        rsx! {
                            div { class: "case-list", {rows} }
                        }
                    }
                }
            }

            if let Some(card) = delete_target() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| delete_target.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { "Shred this case file?" }
                        p { "\"{card.name}\" will be gone for good." }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| delete_target.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: {
                                    let games = games.clone();
                                    let delete_id = card.id;
                                    move |_| {
                                        let games = games.clone();
                                        let mut resource = resource;
                                        spawn(async move {
                                            if games.delete_game(delete_id).await.is_ok() {
                                                delete_target.set(None);
                                                resource.restart();
                                            }
                                        });
                                    }
                                },
                                "Shred it"
                            }
                        }
                    }
                }
            }
        }
    }
}
