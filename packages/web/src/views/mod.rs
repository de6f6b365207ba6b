mod login;
pub use login::Login;

mod users;
pub use users::Users;

mod not_found;
pub use not_found::NotFound;
