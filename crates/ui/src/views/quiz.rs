use dioxus::prelude::*;
use dioxus_router::use_navigator;

use casefile_core::model::{GameDefinition, GameId, VocabularyEntry};
use casefile_core::quiz::AnswerOutcome;
use services::{QuizFlow, STAGE_ONE_ADVANCE_DELAY};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizScreenVm, StageOneVm, StageTwoVm, SummaryVm, map_quiz_screen};

#[derive(Clone, Debug, PartialEq)]
struct QuizSetup {
    game: GameDefinition,
    pool: Vec<VocabularyEntry>,
}

/// One route hosts the whole run; the flow signal carries the player
/// across stage 1, the intermission, stage 2, and the debriefing without
/// any cross-route state.
#[component]
pub fn QuizView(game_id: i64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let games = ctx.games();
    let vocabulary = ctx.vocabulary();
    let audio = ctx.audio();

    let mut flow = use_signal(|| None::<QuizFlow>);

    let resource = use_resource(move || {
        let games = games.clone();
        let vocabulary = vocabulary.clone();
        async move {
            let game = games
                .get_game(GameId::new(game_id))
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)?;
            let pool = vocabulary.load().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(QuizSetup { game, pool })
        }
    });

    use_effect(move || {
        if flow.peek().is_some() {
            return;
        }
        if let Some(Ok(setup)) = resource.value().read().as_ref() {
            flow.set(Some(QuizFlow::new(
                setup.game.clone(),
                setup.pool.clone(),
                audio.clone(),
            )));
        }
    });

    let screen = flow.read().as_ref().map(map_quiz_screen);

    let Some(screen) = screen else {
        let state = view_state_from_resource(&resource);
        return rsx! {
            div { class: "page quiz-page",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading | ViewState::Ready(_) => rsx! {
                        p { "Opening the case..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::SavedGames {});
                            },
                            "Back to the archive"
                        }
                    },
                }
            }
        };
    };

    match screen {
        QuizScreenVm::StageOne(vm) => rsx! {
            StageOneScreen { vm, flow }
        },
        QuizScreenVm::Intermission => rsx! {
            div { class: "page quiz-page intermission",
                h2 { "Stage 1 complete" }
                p { "Every clue identified. Now match the written reports." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(flow) = flow.write().as_mut() {
                            let _ = flow.begin_stage_two();
                        }
                    },
                    "CONTINUE"
                }
            }
        },
        QuizScreenVm::StageTwo(vm) => rsx! {
            StageTwoScreen { vm, flow }
        },
        QuizScreenVm::Summary(vm) => rsx! {
            SummaryScreen { vm, flow }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct StageOneProps {
    vm: StageOneVm,
    flow: Signal<Option<QuizFlow>>,
}

#[component]
fn StageOneScreen(props: StageOneProps) -> Element {
    let vm = props.vm;
    let flow = props.flow;

    let choices = vm.choices.iter().map(|choice| {
        let word = choice.word.clone();
        let disabled = choice.disabled;
        let mut flow = flow;
        rsx! {
            button {
                class: "btn choice-word",
                r#type: "button",
                disabled,
                onclick: move |_| {
                    let outcome = flow
                        .write()
                        .as_mut()
                        .and_then(|flow| flow.answer_stage_one(&word).ok());
                    if outcome == Some(AnswerOutcome::Correct) {
                        spawn(async move {
                            tokio::time::sleep(STAGE_ONE_ADVANCE_DELAY).await;
                            if let Some(flow) = flow.write().as_mut() {
                                let _ = flow.advance_stage_one();
                            }
                        });
                    }
                },
                "{choice.word}"
            }
        }
    });

    rsx! {
        div { class: "page quiz-page stage-one",
            p { class: "quiz-progress", "{vm.progress}" }
            div { class: "evidence-frame",
                img { class: "evidence-photo", src: "{vm.image_url}", alt: "evidence photo" }
            }
            p { class: "quiz-prompt", "Name what you see." }
            div { class: "choice-grid", {choices} }
            if let Some(feedback) = &vm.feedback {
                p { class: "{feedback.class}", "{feedback.text}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StageTwoProps {
    vm: StageTwoVm,
    flow: Signal<Option<QuizFlow>>,
}

#[component]
fn StageTwoScreen(props: StageTwoProps) -> Element {
    let vm = props.vm;
    let flow = props.flow;

    let choices = vm.choices.iter().map(|choice| {
        let word = choice.word.clone();
        let disabled = choice.disabled;
        let mark_class = choice.mark_class;
        let mut flow = flow;
        rsx! {
            button {
                class: "choice-image {mark_class}",
                r#type: "button",
                disabled,
                onclick: move |_| {
                    if let Some(flow) = flow.write().as_mut() {
                        let _ = flow.answer_stage_two(&word);
                    }
                },
                img { src: "{choice.image_url}", alt: "{choice.word}" }
            }
        }
    });

    rsx! {
        div { class: "page quiz-page stage-two",
            p { class: "quiz-progress", "{vm.progress}" }
            blockquote { class: "report-text", "{vm.description}" }
            p { class: "quiz-prompt", "Find the matching photo." }
            div { class: "choice-grid choice-grid--images", {choices} }
            if let Some(feedback) = &vm.feedback {
                p { class: "{feedback.class}", "{feedback.text}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !vm.awaiting_advance,
                onclick: {
                    let mut flow = flow;
                    move |_| {
                        if let Some(flow) = flow.write().as_mut() {
                            let _ = flow.advance_stage_two();
                        }
                    }
                },
                "NEXT"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SummaryProps {
    vm: SummaryVm,
    flow: Signal<Option<QuizFlow>>,
}

#[component]
fn SummaryScreen(props: SummaryProps) -> Element {
    let vm = props.vm;
    let mut flow = props.flow;
    let navigator = use_navigator();

    let rows = vm.rows.iter().map(|row| {
        let row_class = if row.missed { "summary-row summary-row--missed" } else { "summary-row" };
        rsx! {
            tr { class: "{row_class}",
                td { "{row.word}" }
                td { "{row.stage_one_misses}" }
                td { "{row.stage_two_misses}" }
            }
        }
    });

    rsx! {
        div { class: "page quiz-page debriefing",
            h2 { "Debriefing: {vm.game_name}" }
            table { class: "summary-table",
                thead {
                    tr {
                        th { "Clue" }
                        th { "Stage 1 misses" }
                        th { "Stage 2 misses" }
                    }
                }
                tbody { {rows} }
            }
            if vm.all_clear {
                p { class: "debrief-verdict", "Clean sweep. Case closed." }
            } else {
                p { class: "debrief-verdict", "{vm.missed_count} clue(s) need another look." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(flow) = flow.write().as_mut() {
                            let _ = flow.start_review();
                        }
                    },
                    "REVIEW THE MISTAKES"
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::SavedGames {});
                },
                "CLOSE CASE"
            }
        }
    }
}
