//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

/// Failure of a single API round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: u16,
        code: Option<i32>,
        message: Option<String>,
    },

    /// 2xx response whose envelope carries a non-success code.
    #[error("request rejected ({code}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { code: i32, message: Option<String> },

    /// The server no longer recognises the session.
    #[error("session expired")]
    SessionExpired,

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be serialised.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Success envelope without the `result` the operation needs.
    #[error("response did not contain a result")]
    EmptyResult,

    /// Attempt to delete the signed-in account.
    #[error("the signed-in account cannot be deleted")]
    SelfDelete,
}

impl ApiError {
    /// Text suitable for a banner shown to the operator.
    ///
    /// Prefers the server-provided message, falling back to a generic one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            }
            | ApiError::Rejected {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            ApiError::Transport(_) => "Unable to reach the server, please try again later".into(),
            ApiError::SessionExpired => "Your session has expired, please sign in again".into(),
            ApiError::SelfDelete => "You cannot delete the account you are signed in with".into(),
            _ => "Request failed".into(),
        }
    }

    /// Whether this error forced the session to end.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_failure_is_not_reported_as_bad_response() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = ApiError::Encode(source);
        assert!(err.to_string().starts_with("could not encode request body"));
        assert!(!err.to_string().contains("response"));
        assert_eq!(err.user_message(), "Request failed");
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::Rejected {
            code: 2001,
            message: Some("Wrong password".into()),
        };
        assert_eq!(err.user_message(), "Wrong password");

        let err = ApiError::Status {
            status: 409,
            code: Some(2002),
            message: Some("Email already registered".into()),
        };
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Status {
            status: 500,
            code: None,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed");

        let err = ApiError::Rejected {
            code: 2001,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message(), "Request failed");
        assert!(ApiError::SelfDelete.user_message().contains("cannot delete"));
    }
}
