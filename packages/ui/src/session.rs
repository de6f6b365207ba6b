//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::Session;

use crate::make_client;

/// Get the signed-in identity.
/// Returns a signal that updates on login, logout and self-rename.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the API client and the session signal.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_hook(|| make_client().map_err(|e| e.to_string()));

    // The client is built once, so this branch is fixed for the component's lifetime.
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            return rsx! {
                div {
                    class: "fatal-error",
                    "The console could not start: {e}"
                }
            };
        }
    };

    let session = use_signal(|| client.current_session());
    use_context_provider(|| client.clone());
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let api = use_api();
    let mut session = use_session();

    let onclick = move |_| {
        api.logout();
        session.set(None);
    };

    rsx! {
        button {
            class: "{class}",
            title: "{label}",
            onclick: onclick,
            {children}
        }
    }
}
