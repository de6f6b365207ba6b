//! Sign-in page.

use dioxus::prelude::*;
use forms::LoginForm;
use store::Session;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaLock;
use crate::{use_api, use_session, Icon};

/// Email/password sign-in. Calls `on_success` once a session exists, which
/// includes visiting the page while already signed in.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if session().is_some() {
            on_success.call(());
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let request = match LoginForm::new(email(), password()).validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.login(&request.email, &request.password).await {
                Ok(result) => session.set(Some(Session::from(result))),
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            form {
                class: "login-card",
                novalidate: true,
                onsubmit: handle_submit,

                div {
                    class: "login-badge",
                    Icon { icon: FaLock, width: 20, height: 20 }
                }
                h1 { class: "login-title", "Sign in" }

                if let Some(message) = error() {
                    div { class: "notice notice--error", role: "alert", "{message}" }
                }

                div {
                    class: "field",
                    Label { html_for: "login-email", "Email *" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        name: "email",
                        autocomplete: Some("email".to_string()),
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "login-password", "Password *" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        name: "password",
                        autocomplete: Some("current-password".to_string()),
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "login-submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
