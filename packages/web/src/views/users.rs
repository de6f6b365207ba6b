use dioxus::prelude::*;
use ui::UserListView;

use crate::Route;

#[component]
pub fn Users() -> Element {
    let nav = use_navigator();

    rsx! {
        UserListView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
