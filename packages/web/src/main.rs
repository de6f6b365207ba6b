use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, NotFound, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/user")]
    Users {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting administration console");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: ui::ADMIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/login`; the login page forwards signed-in users on.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
