//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Anything else**: in-memory [`store::MemoryStore`] (the session ends with the process)
//!
//! The client is wired so that a `-3003` response sends the browser back to
//! the login page.

use api::{ApiClient, ApiConfig, ApiError};

pub const LOGIN_PATH: &str = "/login";

/// Create the platform-appropriate client from the environment configuration.
pub fn make_client() -> Result<ApiClient, ApiError> {
    let config = ApiConfig::from_env();
    tracing::info!("Using API at {}", config.api_root());

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let session = store::LocalStorageStore::new();
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let session = store::MemoryStore::new();

    Ok(ApiClient::new(config, session)?.on_session_expired(redirect_to_login))
}

/// Full page navigation to the login route, discarding all in-memory state.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Session expired; sign in again at {}", LOGIN_PATH);
    }
}
