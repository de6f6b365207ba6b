use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn NotFoundView(on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-text", "The page you are looking for does not exist." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_home.call(()),
                "Back to home"
            }
        }
    }
}
