//! # Response envelope
//!
//! Every endpoint answers with the same JSON wrapper:
//!
//! ```json
//! { "code": 1000, "result": { ... }, "message": "ok" }
//! ```
//!
//! [`decode_response`] turns an HTTP status plus raw body into either the
//! `result` payload or an [`ApiError`]. The order of the checks matters: the
//! session-invalid code wins over everything else, because the server sends it
//! with an error status and the client must still recognise it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope code of a successful call.
pub const CODE_SUCCESS: i32 = 1000;

/// Envelope code telling the client its session is no longer valid.
pub const CODE_SESSION_INVALID: i32 = -3003;

/// JSON wrapper around every API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: Option<i32>,
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Decode a response body into its `result` payload.
///
/// An empty or whitespace-only body is accepted for 2xx responses (some
/// endpoints answer `DELETE` with no content) and yields `Ok(None)`.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<Option<T>, ApiError> {
    let success_status = (200..300).contains(&status);

    if body.iter().all(u8::is_ascii_whitespace) {
        return if success_status {
            Ok(None)
        } else {
            Err(ApiError::Status {
                status,
                code: None,
                message: None,
            })
        };
    }

    // Error bodies are inspected loosely so a payload that does not match `T`
    // still surfaces its code and message.
    if !success_status {
        let envelope: ApiResponse<serde::de::IgnoredAny> = match serde_json::from_slice(body) {
            Ok(envelope) => envelope,
            Err(_) => {
                return Err(ApiError::Status {
                    status,
                    code: None,
                    message: None,
                })
            }
        };
        if envelope.code == Some(CODE_SESSION_INVALID) {
            return Err(ApiError::SessionExpired);
        }
        return Err(ApiError::Status {
            status,
            code: envelope.code,
            message: envelope.message,
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(body)?;
    match envelope.code {
        Some(CODE_SESSION_INVALID) => Err(ApiError::SessionExpired),
        Some(code) if code != CODE_SUCCESS => Err(ApiError::Rejected {
            code,
            message: envelope.message,
        }),
        _ => Ok(envelope.result),
    }
}
