//! # User records as the API sends and accepts them
//!
//! [`User`] is one row of `GET /user`. The server is not strict about its
//! output: identifiers may arrive as JSON numbers or strings, and optional
//! profile fields may be `null` or missing. Deserialisation normalises all of
//! that so the UI only ever sees a `String` id and empty strings for absent text.
//!
//! Birthdays travel as epoch milliseconds. [`date_to_epoch_millis`] and
//! [`epoch_millis_to_date`] convert at UTC midnight, so a date picked in the
//! form reads back as the same calendar day in the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const MILLIS_PER_SECOND: i64 = 1000;

/// Gender options offered by the create and edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Human-readable label for tables and selects.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0:?}")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// A user row as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_gender")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
    /// Epoch milliseconds.
    #[serde(default)]
    pub birthday: Option<i64>,
}

impl User {
    pub fn birthday_date(&self) -> Option<Date> {
        self.birthday.and_then(epoch_millis_to_date)
    }

    /// Birthday formatted as `YYYY/MM/DD`, or empty when unknown.
    pub fn birthday_display(&self) -> String {
        let format = format_description!("[year]/[month]/[day]");
        self.birthday_date()
            .and_then(|d| d.format(&format).ok())
            .unwrap_or_default()
    }

    /// Gender label; anything unrecognised is shown as "Other".
    pub fn gender_label(&self) -> &'static str {
        self.gender.unwrap_or(Gender::Other).label()
    }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    /// Epoch milliseconds.
    pub birthday: i64,
}

/// Body of `PUT /user/{id}`. Email is immutable and therefore absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    /// Epoch milliseconds.
    pub birthday: i64,
}

/// Epoch milliseconds of `date` at UTC midnight.
pub fn date_to_epoch_millis(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp() * MILLIS_PER_SECOND
}

/// UTC calendar date of an epoch-milliseconds timestamp.
pub fn epoch_millis_to_date(millis: i64) -> Option<Date> {
    let nanos = i128::from(millis) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .map(|dt| dt.date())
}

/// Ids arrive as JSON strings or numbers; both become a `String`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_user_from_api_row() {
        let json = r#"{
            "id": 17,
            "email": "alice@example.com",
            "name": "Alice",
            "gender": "female",
            "phone": "0912345678",
            "birthday": 631152000000
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "17");
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(user.gender_label(), "Female");
        assert_eq!(
            user.birthday_date(),
            Some(Date::from_calendar_date(1990, Month::January, 1).unwrap())
        );
        assert_eq!(user.birthday_display(), "1990/01/01");
    }

    #[test]
    fn test_user_with_missing_and_null_fields() {
        let json = r#"{"id":"abc","email":"bob@example.com","name":null,"gender":"unknown"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc");
        assert_eq!(user.name, "");
        assert_eq!(user.phone, "");
        assert_eq!(user.gender, None);
        assert_eq!(user.gender_label(), "Other");
        assert_eq!(user.birthday, None);
        assert_eq!(user.birthday_display(), "");

        let user: User = serde_json::from_str(r#"{"id":1,"birthday":null}"#).unwrap();
        assert_eq!(user.birthday, None);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("".parse::<Gender>().is_err());
        assert!("robot".parse::<Gender>().is_err());
    }

    #[test]
    fn test_create_request_wire_format() {
        let req = CreateUserRequest {
            email: "carol@example.com".into(),
            password: "Secret123".into(),
            name: "Carol".into(),
            gender: Gender::Other,
            phone: "0800".into(),
            birthday: 0,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["gender"], "other");
        assert_eq!(value["birthday"], 0);
        assert_eq!(value["email"], "carol@example.com");
    }

    #[test]
    fn test_update_request_has_no_email() {
        let req = UpdateUserRequest {
            name: "Dan".into(),
            gender: Gender::Male,
            phone: "".into(),
            birthday: 86_400_000,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("email").is_none());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_epoch_conversion_is_day_stable() {
        let date = Date::from_calendar_date(2000, Month::February, 29).unwrap();
        let millis = date_to_epoch_millis(date);
        assert_eq!(millis, 951_782_400_000);
        assert_eq!(epoch_millis_to_date(millis), Some(date));

        let before_epoch = Date::from_calendar_date(1969, Month::July, 20).unwrap();
        assert_eq!(
            epoch_millis_to_date(date_to_epoch_millis(before_epoch)),
            Some(before_epoch)
        );
    }
}
