use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers a titled card.
/// Clicking outside the card or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                header {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                {children}
            }
        }
    }
}
