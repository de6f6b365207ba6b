//! Modal dialogs of the user list.

use api::Gender;
use dioxus::prelude::*;
use forms::rules::format_date_input;
use time::Date;

use crate::components::Label;

mod create_user;
pub use create_user::CreateUserDialog;

mod delete_user;
pub use delete_user::DeleteUserDialog;

mod edit_user;
pub use edit_user::EditUserDialog;

/// `<select>` over the three genders, with an empty placeholder option.
#[component]
fn GenderSelect(
    id: String,
    value: String,
    error: Option<String>,
    onchange: EventHandler<String>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    let class = if error.is_some() { "input input--invalid" } else { "input" };

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "Gender *" }
            select {
                id: "{id}",
                class: "{class}",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                onblur: move |evt| {
                    if let Some(handler) = &onblur {
                        handler.call(evt);
                    }
                },
                option { value: "", disabled: true, "Select a gender" }
                for gender in Gender::ALL {
                    option {
                        key: "{gender.as_str()}",
                        value: "{gender.as_str()}",
                        selected: value == gender.as_str(),
                        "{gender.label()}"
                    }
                }
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Date input bounded above by `today`.
#[component]
fn BirthdayField(
    id: String,
    value: Option<Date>,
    today: Date,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let text = value.map(format_date_input).unwrap_or_default();
    let max = format_date_input(today);

    rsx! {
        crate::components::TextField {
            id: id,
            label: "Birthday",
            r#type: "date",
            required: true,
            value: text,
            max: Some(max),
            error: error,
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}
