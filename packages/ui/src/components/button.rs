use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Destructive => "btn btn--destructive",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    let button_type = r#type;

    rsx! {
        button {
            class: "{base} {class}",
            r#type: "{button_type}",
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
