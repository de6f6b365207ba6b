//! Wire models for the user-management API.

pub mod auth;
pub mod page;
pub mod user;

pub use auth::{LoginRequest, LoginResult};
pub use page::{PageRequest, UserPage};
pub use user::{
    date_to_epoch_millis, epoch_millis_to_date, CreateUserRequest, Gender, ParseGenderError,
    UpdateUserRequest, User,
};
