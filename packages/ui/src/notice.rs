//! Transient banner for request outcomes.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NoticeLevel {
    #[default]
    Error,
    Success,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "notice notice--error",
            NoticeLevel::Success => "notice notice--success",
        }
    }
}

/// Shows `message` while it is `Some`. In the browser the banner clears itself
/// after `auto_hide_ms`; 0 keeps it until dismissed.
#[component]
pub fn Notice(
    message: Signal<Option<String>>,
    #[props(default)] level: NoticeLevel,
    #[props(default = 3000)] auto_hide_ms: u32,
) -> Element {
    let mut message = message;

    use_effect(move || {
        let Some(shown) = message() else {
            return;
        };
        if auto_hide_ms == 0 {
            return;
        }
        spawn(async move {
            sleep_ms(auto_hide_ms).await;
            // A newer message restarts its own timer
            if message.peek().as_deref() == Some(shown.as_str()) {
                message.set(None);
            }
        });
    });

    let Some(text) = message() else {
        return rsx! {};
    };
    let class = level.class();

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { "{text}" }
            button {
                class: "notice-close",
                title: "Dismiss",
                onclick: move |_| message.set(None),
                "×"
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Native builds have no timer runtime here; the banner stays until dismissed.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(_ms: u32) {
    std::future::pending::<()>().await;
}
