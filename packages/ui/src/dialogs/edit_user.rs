use api::User;
use dioxus::prelude::*;
use forms::{EditUserForm, Field};

use super::{BirthdayField, GenderSelect};
use crate::components::{Button, ButtonVariant, TextField};
use crate::{today, use_api, use_session, ModalOverlay};

/// Dialog for editing a user's name, gender, phone and birthday. The email is
/// shown but read-only. Request failures are only logged.
#[component]
pub fn EditUserDialog(
    user: User,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut form = use_signal(move || EditUserForm::from_user(&user));
    let mut saving = use_signal(|| false);
    let today = today();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let Some(request) = form.write().submit(today) else {
            return;
        };
        let user_id = form.read().user_id.clone();
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            match api.update_user(&user_id, &request).await {
                Ok(()) => {
                    // Picks up the new display name when editing oneself
                    session.set(api.current_session());
                    on_saved.call(());
                }
                Err(e) => tracing::error!("Failed to update user {}: {}", user_id, e),
            }
            saving.set(false);
        });
    };

    let text_input = move |field: Field| {
        move |evt: FormEvent| form.write().set_field(field, evt.value())
    };
    let blur = move |field: Field| move |_: FocusEvent| form.write().blur(field);
    let error = move |field: Field| form.read().errors.get(field).map(ToString::to_string);
    let value = move |field: Field| form.read().value(field).to_string();
    let title = format!("Edit {}", form.read().original_name);

    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| on_close.call(()),
            form {
                class: "dialog-form",
                novalidate: true,
                onsubmit: handle_submit,

                TextField {
                    id: "edit-email",
                    label: Field::Email.label().to_string(),
                    r#type: "email",
                    disabled: true,
                    value: value(Field::Email),
                }
                TextField {
                    id: "edit-name",
                    label: Field::Name.label().to_string(),
                    required: true,
                    value: value(Field::Name),
                    error: error(Field::Name),
                    oninput: text_input(Field::Name),
                    onblur: blur(Field::Name),
                }
                GenderSelect {
                    id: "edit-gender",
                    value: value(Field::Gender),
                    error: error(Field::Gender),
                    onchange: move |v: String| form.write().set_field(Field::Gender, v),
                    onblur: blur(Field::Gender),
                }
                TextField {
                    id: "edit-phone",
                    label: Field::Phone.label().to_string(),
                    r#type: "tel",
                    required: true,
                    value: value(Field::Phone),
                    error: error(Field::Phone),
                    oninput: text_input(Field::Phone),
                    onblur: blur(Field::Phone),
                }
                BirthdayField {
                    id: "edit-birthday",
                    value: form.read().birthday,
                    today: today,
                    error: error(Field::Birthday),
                    oninput: move |v: String| form.write().set_birthday_input(&v, today),
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
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
