use dioxus::prelude::*;
use forms::{CreateUserForm, Field};

use super::{BirthdayField, GenderSelect};
use crate::components::{Button, ButtonVariant, TextField};
use crate::{today, use_api, ModalOverlay, Notice};

/// Dialog for adding a user. Field rules run as the user types; a failed
/// request shows the server's message in a banner and keeps the form open.
#[component]
pub fn CreateUserDialog(on_saved: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(CreateUserForm::new);
    let mut saving = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);
    let today = today();

    let mut cancel = move || {
        form.write().reset();
        on_close.call(());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let Some(request) = form.write().submit(today) else {
            return;
        };
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            match api.create_user(&request).await {
                Ok(()) => {
                    form.write().reset();
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to create user: {}", e);
                    failure.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let text_input = move |field: Field| {
        move |evt: FormEvent| form.write().set_field(field, evt.value())
    };
    let error = move |field: Field| form.read().errors.get(field).map(ToString::to_string);
    let value = move |field: Field| form.read().value(field).to_string();

    rsx! {
        ModalOverlay {
            title: "Add user",
            on_close: move |_| cancel(),
            form {
                class: "dialog-form",
                novalidate: true,
                onsubmit: handle_submit,
                Notice { message: failure }

                TextField {
                    id: "create-email",
                    label: Field::Email.label().to_string(),
                    r#type: "email",
                    required: true,
                    autocomplete: Some("off".to_string()),
                    value: value(Field::Email),
                    error: error(Field::Email),
                    oninput: text_input(Field::Email),
                }
                TextField {
                    id: "create-password",
                    label: Field::Password.label().to_string(),
                    r#type: "password",
                    required: true,
                    autocomplete: Some("new-password".to_string()),
                    value: value(Field::Password),
                    error: error(Field::Password),
                    oninput: text_input(Field::Password),
                }
                TextField {
                    id: "create-confirm-password",
                    label: Field::ConfirmPassword.label().to_string(),
                    r#type: "password",
                    required: true,
                    autocomplete: Some("new-password".to_string()),
                    value: value(Field::ConfirmPassword),
                    error: error(Field::ConfirmPassword),
                    oninput: text_input(Field::ConfirmPassword),
                }
                TextField {
                    id: "create-name",
                    label: Field::Name.label().to_string(),
                    required: true,
                    value: value(Field::Name),
                    error: error(Field::Name),
                    oninput: text_input(Field::Name),
                }
                GenderSelect {
                    id: "create-gender",
                    value: value(Field::Gender),
                    error: error(Field::Gender),
                    onchange: move |v: String| form.write().set_field(Field::Gender, v),
                }
                TextField {
                    id: "create-phone",
                    label: Field::Phone.label().to_string(),
                    r#type: "tel",
                    required: true,
                    value: value(Field::Phone),
                    error: error(Field::Phone),
                    oninput: text_input(Field::Phone),
                }
                BirthdayField {
                    id: "create-birthday",
                    value: form.read().birthday,
                    today: today,
                    error: error(Field::Birthday),
                    oninput: move |v: String| form.write().set_birthday_input(&v, today),
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| cancel(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
