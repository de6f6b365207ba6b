//! # ApiClient: typed access to the user-management REST API
//!
//! One [`ApiClient`] is built at startup and shared by every view. It owns:
//!
//! - a `reqwest` client preconfigured with the JSON content type and with
//!   credentials attached to every request (`credentials: include` in the
//!   browser, a cookie store on native targets), so the server-side session
//!   cookie travels with each call;
//! - the [`ApiConfig`] that resolves endpoint paths;
//! - the [`SessionStore`] holding the signed-in identity.
//!
//! ## Session invalidation
//!
//! Every failed call passes through [`ApiClient::intercept`]. When the server
//! answers with envelope code `-3003` the stored session is cleared and the
//! hook registered with [`ApiClient::on_session_expired`] runs; the web front
//! end uses it to send the browser back to `/login`. The error is still
//! returned so callers can stop whatever they were doing.
//!
//! ## Operations
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`login`](ApiClient::login) | `POST /common/login` |
//! | [`list_users`](ApiClient::list_users) | `GET /user?limit&offset` |
//! | [`create_user`](ApiClient::create_user) | `POST /user` |
//! | [`update_user`](ApiClient::update_user) | `PUT /user/{id}` |
//! | [`delete_user`](ApiClient::delete_user) | `DELETE /user/{id}` |
//!
//! There is no retry, no timeout beyond the transport default and no
//! cancellation; concurrent calls are independent.

use std::fmt;
use std::rc::Rc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use store::{Session, SessionStore};

use crate::config::ApiConfig;
use crate::envelope::decode_response;
use crate::error::ApiError;
use crate::models::{
    CreateUserRequest, LoginRequest, LoginResult, PageRequest, UpdateUserRequest, UserPage,
};

/// Shared handle to the REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Rc<dyn SessionStore>,
    on_session_expired: Option<Rc<dyn Fn()>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session.load())
            .field("on_session_expired", &self.on_session_expired.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: impl SessionStore + 'static) -> Result<Self, ApiError> {
        let http = Self::build_reqwest()?;
        Ok(Self {
            http,
            config,
            session: Rc::new(session),
            on_session_expired: None,
        })
    }

    /// Register the hook run after a `-3003` response cleared the session.
    pub fn on_session_expired(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_session_expired = Some(Rc::new(hook));
        self
    }

    fn build_reqwest() -> Result<reqwest::Client, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let builder = reqwest::Client::builder().default_headers(headers);

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        builder.build()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The identity currently persisted in the session store.
    pub fn current_session(&self) -> Option<Session> {
        self.session.load()
    }

    /// Whether `user_id` is the signed-in user.
    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.session.is_current_user(user_id)
    }

    /// Post-process a failed call; ends the session on `-3003`.
    pub fn intercept(&self, err: ApiError) -> ApiError {
        if err.is_session_expired() {
            tracing::warn!("Server rejected the session, clearing local identity");
            self.session.clear();
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
        }
        err
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        self.round_trip(request)
            .await
            .map_err(|e| self.intercept(e))
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }

    async fn perform_get_request<T: DeserializeOwned>(
        &self,
        dest: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.config.endpoint(dest);
        tracing::debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }

    async fn perform_post_request<R: Serialize, T: DeserializeOwned>(
        &self,
        dest: &str,
        body: &R,
    ) -> Result<Option<T>, ApiError> {
        let url = self.config.endpoint(dest);
        tracing::debug!("POST {}", url);
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.send(self.http.post(url).body(body)).await
    }

    async fn perform_put_request<R: Serialize, T: DeserializeOwned>(
        &self,
        dest: &str,
        body: &R,
    ) -> Result<Option<T>, ApiError> {
        let url = self.config.endpoint(dest);
        tracing::debug!("PUT {}", url);
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.send(self.http.put(url).body(body)).await
    }

    async fn perform_delete_request(&self, dest: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint(dest);
        tracing::debug!("DELETE {}", url);
        self.send::<IgnoredAny>(self.http.delete(url)).await?;
        Ok(())
    }

    /// Authenticate and persist the returned identity as the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result: LoginResult = self
            .perform_post_request("/common/login", &request)
            .await?
            .ok_or(ApiError::EmptyResult)?;

        self.session.save(&Session::from(result.clone()));
        tracing::info!("Signed in as {}", result.name);
        Ok(result)
    }

    /// Forget the signed-in identity. The API has no logout endpoint.
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("Signed out");
    }

    pub async fn list_users(&self, page: PageRequest) -> Result<UserPage, ApiError> {
        let dest = format!("/user?limit={}&offset={}", page.limit, page.offset);
        self.perform_get_request(&dest)
            .await?
            .ok_or(ApiError::EmptyResult)
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError> {
        self.perform_post_request::<_, IgnoredAny>("/user", request)
            .await?;
        tracing::info!("Created user {}", request.email);
        Ok(())
    }

    /// Update a user. Renaming the signed-in user also renames the session.
    pub async fn update_user(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<(), ApiError> {
        self.perform_put_request::<_, IgnoredAny>(&format!("/user/{user_id}"), request)
            .await?;
        if self.session.rename_current_user(user_id, &request.name) {
            tracing::debug!("Updated session display name");
        }
        Ok(())
    }

    /// Delete a user. The signed-in account is refused without a request.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        if self.session.is_current_user(user_id) {
            tracing::warn!("Refusing to delete the signed-in account");
            return Err(ApiError::SelfDelete);
        }
        self.perform_delete_request(&format!("/user/{user_id}"))
            .await?;
        tracing::info!("Deleted user {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use store::MemoryStore;

    fn client_with(store: &MemoryStore) -> ApiClient {
        ApiClient::new(ApiConfig::new("http://127.0.0.1:1"), store.clone()).unwrap()
    }

    #[test]
    fn test_session_expired_clears_store_and_runs_hook() {
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let redirected = Rc::new(Cell::new(false));
        let flag = redirected.clone();
        let client = client_with(&store).on_session_expired(move || flag.set(true));

        let err = client.intercept(ApiError::SessionExpired);

        assert!(err.is_session_expired());
        assert!(store.load().is_none());
        assert!(client.current_session().is_none());
        assert!(redirected.get());
    }

    #[test]
    fn test_other_errors_keep_session() {
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let redirected = Rc::new(Cell::new(false));
        let flag = redirected.clone();
        let client = client_with(&store).on_session_expired(move || flag.set(true));

        let err = client.intercept(ApiError::Status {
            status: 500,
            code: Some(5000),
            message: None,
        });

        assert!(!err.is_session_expired());
        assert_eq!(store.load(), Some(Session::new("42", "Alice")));
        assert!(!redirected.get());
    }

    #[test]
    fn test_session_expired_without_hook() {
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let client = client_with(&store);

        client.intercept(ApiError::SessionExpired);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_delete_self_is_refused_locally() {
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let client = client_with(&store);

        let err = client.delete_user("42").await.unwrap_err();
        assert!(matches!(err, ApiError::SelfDelete));
        assert!(client.is_current_user("42"));
        assert!(!client.is_current_user("7"));
    }

    /// Serve exactly one canned HTTP response on a local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_expired_response_from_server_ends_session() {
        let base_url = serve_once(
            "401 Unauthorized",
            r#"{"code":-3003,"message":"session invalid"}"#,
        );
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let redirected = Rc::new(Cell::new(false));
        let flag = redirected.clone();
        let client = ApiClient::new(ApiConfig::new(base_url), store.clone())
            .unwrap()
            .on_session_expired(move || flag.set(true));

        let err = client
            .list_users(PageRequest::for_page(1, 10))
            .await
            .unwrap_err();

        assert!(err.is_session_expired());
        assert!(store.load().is_none());
        assert!(redirected.get());
    }

    #[tokio::test]
    async fn test_rejected_response_from_server_keeps_session() {
        let base_url = serve_once("200 OK", r#"{"code":5001,"message":"busy"}"#);
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let client = ApiClient::new(ApiConfig::new(base_url), store.clone()).unwrap();

        let err = client
            .list_users(PageRequest::for_page(1, 10))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "busy");
        assert_eq!(store.load(), Some(Session::new("42", "Alice")));
    }

    #[test]
    fn test_logout_clears_session() {
        let store = MemoryStore::with_session(&Session::new("42", "Alice"));
        let client = client_with(&store);

        client.logout();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_debug_does_not_panic() {
        let client = client_with(&MemoryStore::new());
        let text = format!("{client:?}");
        assert!(text.contains("127.0.0.1"));
    }
}
