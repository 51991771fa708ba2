use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    rsx! {
        div { class: "page login-page",
            h2 { "Restricted Area" }
            p { class: "login-hint", "Sign in to open your case files." }
            button {
                class: "btn btn-primary login-button",
                r#type: "button",
                onclick: move |_| {
                    ctx.identity().sign_in();
                    let _ = navigator.push(Route::Menu {});
                },
                "SIGN IN"
            }
        }
    }
}
