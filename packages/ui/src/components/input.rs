use dioxus::prelude::*;

/// Text-like `<input>` with the console's styling. `invalid` adds the error
/// outline and `aria-invalid`.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] max: Option<String>,
    #[props(default)] autocomplete: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    let input_type = r#type;
    let state = if invalid { "input input--invalid" } else { "input" };

    rsx! {
        input {
            id: "{id}",
            class: "{state} {class}",
            r#type: "{input_type}",
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            max: max,
            autocomplete: autocomplete,
            disabled: disabled,
            aria_invalid: if invalid { "true" } else { "false" },
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = &onblur {
                    handler.call(evt);
                }
            },
        }
    }
}
