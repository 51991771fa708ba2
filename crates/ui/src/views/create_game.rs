use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use casefile_core::model::{MIN_GAME_WORDS, VocabularyEntry};
use services::GameServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{AlertModal, ViewError, ViewState, view_state_from_resource};

/// Name and clue selection held while the confirmation screen is up.
#[derive(Clone, PartialEq)]
struct PendingCase {
    name: String,
    words: Vec<VocabularyEntry>,
}

#[component]
pub fn CreateGameView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let vocabulary = ctx.vocabulary();

    let mut name = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(HashSet::<u64>::new);
    let mut alert = use_signal(|| None::<String>);
    let mut pending = use_signal(|| None::<PendingCase>);
    let mut saving = use_signal(|| false);

    let resource = use_resource(move || {
        let vocabulary = vocabulary.clone();
        async move {
            vocabulary
                .load()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let state = view_state_from_resource(&resource);
    let query = search().trim().to_lowercase();

    if let Some(case) = pending() {
        let games = ctx.games();
        let clue_rows = case.words.iter().map(|entry| {
            let word = entry.word().to_owned();
            rsx! {
                li { "{word}" }
            }
        });
        let confirm_case = case.clone();
        return rsx! {
            div { class: "page create-page",
                h2 { "CASE FILE: {case.name}" }
                ul { class: "confirm-clues", {clue_rows} }
                p { "File this case and open it?" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| {
                            let games = games.clone();
                            let case = confirm_case.clone();
                            spawn(async move {
                                saving.set(true);
                                match games.create_game(case.name, case.words).await {
                                    Ok(game) => {
                                        let _ = navigator.push(Route::Quiz {
                                            game_id: game.id().value(),
                                        });
                                    }
                                    Err(GameServiceError::Game(err)) => {
                                        saving.set(false);
                                        pending.set(None);
                                        alert.set(Some(err.to_string()));
                                    }
                                    Err(GameServiceError::Storage(_)) => {
                                        saving.set(false);
                                        pending.set(None);
                                        alert.set(Some(
                                            "The archive is unavailable. Try again.".into(),
                                        ));
                                    }
                                }
                            });
                        },
                        "YES"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| pending.set(None),
                        "NO"
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page create-page",
            h2 { "New Case" }

            label { class: "field-label", r#for: "case-name", "Case name" }
            input {
                id: "case-name",
                class: "field-input",
                r#type: "text",
                placeholder: "Name the case...",
                value: "{name()}",
                oninput: move |evt| name.set(evt.value()),
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading the evidence board..." }
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
                ViewState::Ready(pool) => {
                    let visible: Vec<VocabularyEntry> = pool
                        .iter()
                        .filter(|entry| entry.word().to_lowercase().contains(&query))
                        .cloned()
                        .collect();
                    let picked = selected().len();
                    let rows = visible.iter().map(|entry| {
                        let id = entry.id().value();
                        let word = entry.word().to_owned();
                        let checked = selected().contains(&id);
                        rsx! {
                            label { class: "clue-row",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |_| {
                                        let mut picks = selected.write();
                                        if !picks.remove(&id) {
                                            picks.insert(id);
                                        }
                                    },
                                }
                                span { class: "clue-word", "{word}" }
                            }
                        }
                    });
                    rsx! {
                        input {
                            class: "field-input clue-search",
                            r#type: "text",
                            placeholder: "Search clues...",
                            value: "{search()}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        p { class: "clue-count", "{picked} selected" }
                        div { class: "clue-list",
                            if visible.is_empty() {
                                p { class: "clue-empty", "No clues match that search." }
                            } else {
                                {rows}
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: {
                                let pool = pool.clone();
                                move |_| {
                                    let case_name = name().trim().to_owned();
                                    if case_name.is_empty() {
                                        alert.set(Some("Give the case a name first.".into()));
                                        return;
                                    }
                                    let picks = selected();
                                    if picks.len() < MIN_GAME_WORDS {
                                        alert.set(Some(format!(
                                            "Pick at least {MIN_GAME_WORDS} clues for the case."
                                        )));
                                        return;
                                    }
                                    // Keep the sheet order, not the click order.
                                    let words: Vec<VocabularyEntry> = pool
                                        .iter()
                                        .filter(|entry| picks.contains(&entry.id().value()))
                                        .cloned()
                                        .collect();
                                    pending.set(Some(PendingCase {
                                        name: case_name,
                                        words,
                                    }));
                                }
                            },
                            "CREATE CASE"
                        }
                    }
                }
            }

            if let Some(message) = alert() {
                AlertModal {
                    message,
                    on_dismiss: move |()| alert.set(None),
                }
            }
        }
    }
}
