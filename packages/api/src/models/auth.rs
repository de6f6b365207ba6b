use serde::{Deserialize, Serialize};

/// Body of `POST /common/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    #[serde(deserialize_with = "super::user::string_or_number")]
    pub id: String,
    pub name: String,
}

impl From<LoginResult> for store::Session {
    fn from(result: LoginResult) -> Self {
        store::Session::new(result.id, result.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_response;
    use store::Session;

    #[test]
    fn test_login_result_accepts_numeric_id() {
        let body = br#"{"code":1000,"result":{"id":42,"name":"Alice"}}"#;
        let result: Option<LoginResult> = decode_response(200, body).unwrap();
        let session = Session::from(result.unwrap());
        assert_eq!(session.user_id, "42");
        assert_eq!(session.user_name, "Alice");
    }

    #[test]
    fn test_login_result_accepts_string_id() {
        let result: LoginResult = serde_json::from_str(r#"{"id":"u-7","name":"Bob"}"#).unwrap();
        assert_eq!(result.id, "u-7");
    }
}
