mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod users;
pub use users::UserListView;

mod not_found;
pub use not_found::NotFoundView;
