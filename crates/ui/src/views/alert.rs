use dioxus::prelude::*;

/// Blocking notice with a single dismiss button, standing in for the
/// browser alert the game was designed around.
#[component]
pub fn AlertModal(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal alert-modal",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "alert-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
