//! Field rules shared by the login, create and edit forms.
//!
//! Every rule is a plain function returning `Result<_, FieldError>`; the
//! error's `Display` is the helper text shown under the input.

use api::Gender;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use time::macros::format_description;
use time::Date;

/// Longest name accepted when creating a user.
pub const CREATE_NAME_MAX: usize = 15;
/// Longest name accepted when editing a user.
pub const EDIT_NAME_MAX: usize = 20;
/// Longest phone number accepted.
pub const PHONE_MAX: usize = 10;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex");

    /// Shape only; the character-class requirements are checked separately.
    static ref PASSWORD_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9]{8,12}$").expect("Invalid password regex");

    static ref DIGITS_RE: Regex =
        Regex::new(r"^[0-9]*$").expect("Invalid digits regex");
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Birthday is required")]
    BirthdayRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be 8-12 characters with uppercase, lowercase letters and digits")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Phone may only contain digits")]
    PhoneNotDigits,
    #[error("Phone cannot exceed {max} characters, currently {len}")]
    PhoneTooLong { max: usize, len: usize },
    #[error("Name cannot exceed {max} characters, currently {len}")]
    NameTooLong { max: usize, len: usize },
    #[error("Please choose male, female or other")]
    InvalidGender,
    #[error("Invalid date")]
    InvalidDate,
    #[error("Birthday cannot be in the future")]
    BirthdayInFuture,
}

pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// 8-12 ASCII letters/digits with at least one uppercase, one lowercase and one digit.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if PASSWORD_RE.is_match(value) && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(FieldError::WeakPassword)
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password == confirm {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

/// Digits only, then at most [`PHONE_MAX`] characters.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if !DIGITS_RE.is_match(value) {
        return Err(FieldError::PhoneNotDigits);
    }
    let len = value.chars().count();
    if len > PHONE_MAX {
        return Err(FieldError::PhoneTooLong {
            max: PHONE_MAX,
            len,
        });
    }
    Ok(())
}

pub fn validate_name(value: &str, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len > max {
        Err(FieldError::NameTooLong { max, len })
    } else {
        Ok(())
    }
}

pub fn validate_gender(value: &str) -> Result<Gender, FieldError> {
    value.parse().map_err(|_| FieldError::InvalidGender)
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`).
///
/// An empty input means "no date picked" and yields `Ok(None)`.
pub fn parse_date_input(value: &str) -> Result<Option<Date>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format)
        .map(Some)
        .map_err(|_| FieldError::InvalidDate)
}

/// Format a date for an `<input type="date">`.
pub fn format_date_input(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn validate_birthday_not_future(date: Date, today: Date) -> Result<(), FieldError> {
    if date > today {
        Err(FieldError::BirthdayInFuture)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn date(y: i32, m: Month, d: u8) -> Date {
        Date::from_calendar_date(y, m, d).unwrap()
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.org").is_ok());

        assert_eq!(validate_email("alice"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("alice@example"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("al ice@example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b@example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email(""), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password("Abcdefg1").is_ok());
        assert!(validate_password("Abcdefghij12").is_ok());

        // Length bounds
        assert!(validate_password("Abcdef1").is_err());
        assert!(validate_password("Abcdefghij123").is_err());
        // Missing classes
        assert!(validate_password("abcdefg1").is_err());
        assert!(validate_password("ABCDEFG1").is_err());
        assert!(validate_password("Abcdefgh").is_err());
        // Symbols and non-ASCII are not allowed
        assert!(validate_password("Abcdef1!").is_err());
        assert!(validate_password("Abcdéfg1").is_err());
    }

    #[test]
    fn test_confirm_password() {
        assert!(validate_confirm_password("Abcdefg1", "Abcdefg1").is_ok());
        assert_eq!(
            validate_confirm_password("Abcdefg1", "Abcdefg2"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("0912345678").is_ok());
        assert_eq!(validate_phone("09-123"), Err(FieldError::PhoneNotDigits));
        assert_eq!(validate_phone("+886912"), Err(FieldError::PhoneNotDigits));
        assert_eq!(
            validate_phone("09123456789"),
            Err(FieldError::PhoneTooLong { max: 10, len: 11 })
        );
        // Digit check runs first
        assert_eq!(validate_phone("0912345678x"), Err(FieldError::PhoneNotDigits));
    }

    #[test]
    fn test_name_length_counts_chars() {
        assert!(validate_name("王小明", CREATE_NAME_MAX).is_ok());
        assert!(validate_name(&"a".repeat(15), CREATE_NAME_MAX).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(16), CREATE_NAME_MAX),
            Err(FieldError::NameTooLong { max: 15, len: 16 })
        );
        assert!(validate_name(&"a".repeat(20), EDIT_NAME_MAX).is_ok());
        assert!(validate_name(&"a".repeat(21), EDIT_NAME_MAX).is_err());
    }

    #[test]
    fn test_helper_text_reports_length() {
        let err = validate_name(&"a".repeat(18), CREATE_NAME_MAX).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot exceed 15 characters, currently 18");
    }

    #[test]
    fn test_required() {
        assert_eq!(validate_required(""), Err(FieldError::Required));
        assert_eq!(validate_required("   "), Err(FieldError::Required));
        assert!(validate_required("x").is_ok());
    }

    #[test]
    fn test_gender() {
        assert_eq!(validate_gender("other"), Ok(Gender::Other));
        assert_eq!(validate_gender(""), Err(FieldError::InvalidGender));
    }

    #[test]
    fn test_date_input() {
        assert_eq!(parse_date_input(""), Ok(None));
        assert_eq!(
            parse_date_input("1990-05-17"),
            Ok(Some(date(1990, Month::May, 17)))
        );
        assert_eq!(parse_date_input("1990/05/17"), Err(FieldError::InvalidDate));
        assert_eq!(parse_date_input("1990-02-30"), Err(FieldError::InvalidDate));
        assert_eq!(format_date_input(date(2001, Month::March, 4)), "2001-03-04");
    }

    #[test]
    fn test_birthday_not_future() {
        let today = date(2024, Month::June, 1);
        assert!(validate_birthday_not_future(today, today).is_ok());
        assert!(validate_birthday_not_future(date(1999, Month::December, 31), today).is_ok());
        assert_eq!(
            validate_birthday_not_future(date(2024, Month::June, 2), today),
            Err(FieldError::BirthdayInFuture)
        );
    }
}
