use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn MenuView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut confirm_sign_out = use_signal(|| false);

    let session = ctx.identity().current();
    let Some(profile) = session.profile().cloned() else {
        return rsx! {
            div { class: "page menu-page",
                p { "You are signed out." }
                Link { to: Route::Login {}, "Back to sign-in" }
            }
        };
    };

    rsx! {
        div { class: "page menu-page",
            h2 { "Welcome, {profile.first_name()}" }
            div { class: "menu-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::CreateGame {});
                    },
                    "NEW CASE"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::SavedGames {});
                    },
                    "CASE ARCHIVE"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| confirm_sign_out.set(true),
                    "SIGN OUT"
                }
            }
            if confirm_sign_out() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| confirm_sign_out.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { "Sign out?" }
                        p { "Your saved case files stay in the archive." }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| confirm_sign_out.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: {
                                    let ctx = ctx.clone();
                                    move |_| {
                                        confirm_sign_out.set(false);
                                        ctx.identity().sign_out();
                                        let _ = navigator.push(Route::Login {});
                                    }
                                },
                                "Sign out"
                            }
                        }
                    }
                }
            }
        }
    }
}
