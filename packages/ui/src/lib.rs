//! This crate contains all shared UI for the administration console.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ADMIN_CSS: Asset = asset!("/assets/admin.css");

mod client;
pub use client::{make_client, redirect_to_login};

mod clock;
pub use clock::today;

mod session;
pub use session::{use_api, use_session, LogoutButton, SessionProvider};

mod notice;
pub use notice::{Notice, NoticeLevel};

mod pagination;
pub use pagination::{page_items, PageItem, Pagination};

pub mod dialogs;
pub use dialogs::{CreateUserDialog, DeleteUserDialog, EditUserDialog};

pub mod views;
pub use views::{LoginView, ModalOverlay, NotFoundView, UserListView};
