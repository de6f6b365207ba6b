use api::User;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::{use_api, ModalOverlay};

/// Confirmation before deleting `user`. Stays open if the request fails.
#[component]
pub fn DeleteUserDialog(
    user: User,
    on_deleted: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut deleting = use_signal(|| false);
    let user_id = user.id.clone();

    let confirm = move |_| {
        if deleting() {
            return;
        }
        let api = api.clone();
        let user_id = user_id.clone();
        deleting.set(true);
        spawn(async move {
            match api.delete_user(&user_id).await {
                Ok(()) => on_deleted.call(()),
                Err(e) => tracing::error!("Failed to delete user {}: {}", user_id, e),
            }
            deleting.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            title: "Delete user",
            on_close: move |_| on_close.call(()),
            p {
                class: "dialog-body",
                "Delete "
                strong { "{user.name}" }
                " ({user.email})? This cannot be undone."
            }
            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting(),
                    onclick: confirm,
                    "Delete"
                }
            }
        }
    }
}
