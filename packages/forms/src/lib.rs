//! # Forms: client-side validation for the administration console
//!
//! Pure, UI-independent state machines for the three forms of the console.
//! Each form owns its raw input strings plus a [`FieldErrors`] map holding the
//! helper text shown under each input. Rules run on change, on blur and on
//! submit; a submit only yields a request payload when no field has an error.
//!
//! | Form | Produces |
//! |------|----------|
//! | [`LoginForm`] | [`api::LoginRequest`] |
//! | [`CreateUserForm`] | [`api::CreateUserRequest`] |
//! | [`EditUserForm`] | [`api::UpdateUserRequest`] |

pub mod create_user;
pub mod edit_user;
pub mod field;
pub mod login;
pub mod rules;

pub use create_user::CreateUserForm;
pub use edit_user::EditUserForm;
pub use field::{Field, FieldErrors};
pub use login::{LoginError, LoginForm};
pub use rules::{FieldError, CREATE_NAME_MAX, EDIT_NAME_MAX, PHONE_MAX};
