use api::LoginRequest;
use thiserror::Error;

use crate::rules::validate_email;

/// First problem found with the login form, shown in the page banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("The account must be an email address")]
    InvalidEmail,
}

/// Credentials typed on the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form; the first failure wins in the order email, password, email shape.
    pub fn validate(&self) -> Result<LoginRequest, LoginError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        if validate_email(email).is_err() {
            return Err(LoginError::InvalidEmail);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login() {
        let req = LoginForm::new("  admin@example.com ", "Secret123")
            .validate()
            .unwrap();
        assert_eq!(req.email, "admin@example.com");
        assert_eq!(req.password, "Secret123");
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(LoginForm::new("", "").validate(), Err(LoginError::MissingEmail));
        assert_eq!(
            LoginForm::new("not-an-email", "").validate(),
            Err(LoginError::MissingPassword)
        );
        assert_eq!(
            LoginForm::new("not-an-email", "pw").validate(),
            Err(LoginError::InvalidEmail)
        );
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let req = LoginForm::new("a@b.co", " pw ").validate().unwrap();
        assert_eq!(req.password, " pw ");
    }
}
