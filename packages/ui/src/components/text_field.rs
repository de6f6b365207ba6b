use dioxus::prelude::*;

use super::{Input, Label};

/// Labelled input with a helper line that shows the field's error, if any.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] max: Option<String>,
    #[props(default)] autocomplete: Option<String>,
    #[props(default)] error: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    let marker = if required { " *" } else { "" };
    let invalid = error.is_some();

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}{marker}" }
            Input {
                id: id.clone(),
                name: id,
                r#type: r#type,
                value: value,
                max: max,
                autocomplete: autocomplete,
                disabled: disabled,
                invalid: invalid,
                oninput: oninput,
                onblur: onblur,
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
