use dioxus::prelude::*;
use ui::LoginView;

use crate::Route;

/// Login page. Signed-in visitors go straight to the user list.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Users {});
            },
        }
    }
}
