//! API client configuration from the environment.
//!
//! The console only needs to know where the user-management API lives and how
//! many users to show per page:
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | `BASE_API_URL` | `http://localhost:3000` | Origin of the API server; `/api` is appended. |
//! | `USER_PAGE_SIZE` | `10` | Rows per page in the user table. |
//!
//! Browser builds have no process environment, so both variables are also read
//! at compile time (`option_env!`). Native builds additionally load a `.env`
//! file and let runtime variables override the compiled-in values.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where the API lives and how the user list pages through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    option_env!("BASE_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

fn default_page_size() -> u32 {
    option_env!("USER_PAGE_SIZE")
        .and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Builder method to set the page size. Zero is ignored.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Resolve the configuration for the current platform.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();

            let mut config = Self::default();
            if let Ok(url) = std::env::var("BASE_API_URL") {
                if !url.trim().is_empty() {
                    config.base_url = url.trim().to_string();
                }
            }
            if let Some(size) = std::env::var("USER_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                config = config.with_page_size(size);
            }
            config
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Root every endpoint path is joined onto, e.g. `http://host/api`.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }

    /// Absolute URL of an endpoint path such as `/user/42`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_root(), path.trim_start_matches('/'))
    }
}
