//! The user management page: a paged table with add, edit and delete.

use api::{PageRequest, User, UserPage};
use dioxus::prelude::*;
use store::Session;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::{
    use_api, use_session, CreateUserDialog, DeleteUserDialog, EditUserDialog, Icon, LogoutButton,
    Notice, NoticeLevel, Pagination,
};

/// Which dialog, if any, is open over the table.
#[derive(Clone, Debug, PartialEq)]
enum UserDialog {
    Closed,
    Create,
    Edit(User),
    Delete(User),
}

/// Paged list of users. Calls `on_signed_out` when there is no session,
/// whether after sign-out, expiry, or on arrival without signing in.
#[component]
pub fn UserListView(on_signed_out: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut page = use_signal(|| 1u32);
    let mut refresh = use_signal(|| 0u32);
    let mut dialog = use_signal(|| UserDialog::Closed);
    let mut flash = use_signal(|| None::<String>);
    let limit = api.config().page_size;

    use_effect(move || {
        if session().is_none() {
            on_signed_out.call(());
        }
    });

    let users = use_resource(move || {
        let api = api.clone();
        let request = PageRequest::for_page(page(), limit);
        // Subscribe so a bump reloads the current page
        let _ = refresh();
        async move {
            match api.list_users(request).await {
                Ok(listing) => Ok(listing),
                Err(e) => {
                    tracing::error!("Failed to load users: {}", e);
                    if e.is_session_expired() {
                        session.set(None);
                    }
                    Err(e.user_message())
                }
            }
        }
    });

    // Deleting the last row of the last page leaves it empty; step back
    use_effect(move || {
        if let Some(Ok(listing)) = &*users.read() {
            let last = listing.last_page(limit);
            if listing.data.is_empty() && *page.peek() > last {
                page.set(last);
            }
        }
    });

    let Some(current) = session() else {
        return rsx! {};
    };

    let mut reload = move |outcome: &str| {
        dialog.set(UserDialog::Closed);
        flash.set(Some(outcome.to_string()));
        *refresh.write() += 1;
    };

    let listing: Option<Result<UserPage, String>> = (*users.read()).clone();

    rsx! {
        div {
            class: "users-page",
            header {
                class: "users-header",
                h1 { class: "users-title", "Users" }
                div {
                    class: "users-account",
                    span { class: "users-greeting", "Hello, {current.user_name}" }
                    LogoutButton { class: "btn btn--ghost", "Sign out" }
                }
            }

            div {
                class: "users-toolbar",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| dialog.set(UserDialog::Create),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add user"
                }
            }

            Notice { message: flash, level: NoticeLevel::Success }

            {match listing {
                None => rsx! {
                    p { class: "users-status", "Loading..." }
                },
                Some(Err(message)) => rsx! {
                    p { class: "users-status users-status--error", "{message}" }
                },
                Some(Ok(listing)) => rsx! {
                    table {
                        class: "users-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Gender" }
                                th { "Phone" }
                                th { "Birthday" }
                                th { class: "users-actions", "Actions" }
                            }
                        }
                        tbody {
                            if listing.data.is_empty() {
                                tr {
                                    td { colspan: 6, class: "users-empty", "No users yet." }
                                }
                            }
                            for user in listing.data.iter() {
                                UserRow {
                                    key: "{user.id}",
                                    is_self: is_session_user(user, &current),
                                    user: user.clone(),
                                    on_edit: move |u: User| dialog.set(UserDialog::Edit(u)),
                                    on_delete: move |u: User| dialog.set(UserDialog::Delete(u)),
                                }
                            }
                        }
                    }
                    Pagination {
                        page: page(),
                        page_count: listing.page_count(limit),
                        on_change: move |n: u32| page.set(n),
                    }
                },
            }}

            {match dialog() {
                UserDialog::Closed => rsx! {},
                UserDialog::Create => rsx! {
                    CreateUserDialog {
                        on_saved: move |_| reload("User created"),
                        on_close: move |_| dialog.set(UserDialog::Closed),
                    }
                },
                UserDialog::Edit(user) => rsx! {
                    EditUserDialog {
                        user: user,
                        on_saved: move |_| reload("User updated"),
                        on_close: move |_| dialog.set(UserDialog::Closed),
                    }
                },
                UserDialog::Delete(user) => rsx! {
                    DeleteUserDialog {
                        user: user,
                        on_deleted: move |_| reload("User deleted"),
                        on_close: move |_| dialog.set(UserDialog::Closed),
                    }
                },
            }}
        }
    }
}

/// The signed-in account's own row, whose delete button is disabled.
fn is_session_user(user: &User, session: &Session) -> bool {
    user.id == session.user_id
}

#[component]
fn UserRow(
    user: User,
    is_self: bool,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<User>,
) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();
    let delete_title = if is_self {
        "You cannot delete your own account"
    } else {
        "Delete"
    };

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.gender_label()}" }
            td { "{user.phone}" }
            td { "{user.birthday_display()}" }
            td {
                class: "users-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: delete_title.to_string(),
                    disabled: is_self,
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            gender: None,
            phone: String::new(),
            birthday: None,
        }
    }

    #[test]
    fn test_own_row_is_session_user() {
        let session = Session::new("42", "Alice");
        assert!(is_session_user(&user("42", "Alice"), &session));
    }

    #[test]
    fn test_other_rows_are_not_session_user() {
        let session = Session::new("42", "Alice");
        assert!(!is_session_user(&user("7", "Bob"), &session));
        // Same display name, different account
        assert!(!is_session_user(&user("43", "Alice"), &session));
    }
}
