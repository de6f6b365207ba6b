//! # API crate: typed client for the user-management REST API
//!
//! Everything the console knows about the server lives here: where it is, what
//! its payloads look like and how failures are classified.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and page size from the environment |
//! | [`envelope`] | The `{code, result, message}` wrapper and its decoding rules |
//! | [`error`] | [`ApiError`], the failure type of every call |
//! | [`models`] | Users, pages, login and create/update payloads |
//! | [`client`] | [`ApiClient`], including the `-3003` session interceptor |

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use envelope::{ApiResponse, CODE_SESSION_INVALID, CODE_SUCCESS};
pub use error::ApiError;
pub use models::{
    date_to_epoch_millis, epoch_millis_to_date, CreateUserRequest, Gender, LoginRequest,
    LoginResult, PageRequest, UpdateUserRequest, User,
    UserPage,
};

pub use store::Session;
