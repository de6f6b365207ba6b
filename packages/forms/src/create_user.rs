//! State of the "create user" dialog.
//!
//! Rules run as the user types ([`CreateUserForm::set_field`]); changing the
//! password re-checks an already-typed confirmation. [`CreateUserForm::submit`]
//! adds the required-field check and re-runs every rule before producing a
//! request.

use api::{date_to_epoch_millis, CreateUserRequest};
use time::Date;

use crate::field::{Field, FieldErrors};
use crate::rules::{
    parse_date_input, validate_birthday_not_future, validate_confirm_password, validate_email,
    validate_gender, validate_name, validate_password, validate_phone, validate_required,
    FieldError, CREATE_NAME_MAX,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    /// Raw `<select>` value; empty until a gender is picked.
    pub gender: String,
    pub phone: String,
    pub birthday: Option<Date>,
    pub errors: FieldErrors,
}

impl CreateUserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to an empty form, as when the dialog is reopened.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Phone => &self.phone,
            Field::Birthday => "",
        }
    }

    /// Apply a change to a text/select field and run its rule.
    ///
    /// Birthday changes go through [`Self::set_birthday`] or
    /// [`Self::set_birthday_input`] instead.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => {
                self.errors.record(Field::Email, validate_email(&value));
                self.email = value;
            }
            Field::Password => {
                self.errors.record(Field::Password, validate_password(&value));
                if self.confirm_password.is_empty() {
                    self.errors.clear(Field::ConfirmPassword);
                } else {
                    self.errors.record(
                        Field::ConfirmPassword,
                        validate_confirm_password(&value, &self.confirm_password),
                    );
                }
                self.password = value;
            }
            Field::ConfirmPassword => {
                self.errors.record(
                    Field::ConfirmPassword,
                    validate_confirm_password(&self.password, &value),
                );
                self.confirm_password = value;
            }
            Field::Name => {
                self.errors
                    .record(Field::Name, validate_name(&value, CREATE_NAME_MAX));
                self.name = value;
            }
            Field::Gender => {
                self.errors.clear(Field::Gender);
                self.gender = value;
            }
            Field::Phone => {
                self.errors.record(Field::Phone, validate_phone(&value));
                self.phone = value;
            }
            Field::Birthday => {}
        }
    }

    pub fn set_birthday(&mut self, date: Option<Date>, today: Date) {
        match date {
            Some(d) => {
                self.errors
                    .record(Field::Birthday, validate_birthday_not_future(d, today));
            }
            None => self.errors.clear(Field::Birthday),
        }
        self.birthday = date;
    }

    /// Apply the raw value of the date input.
    pub fn set_birthday_input(&mut self, value: &str, today: Date) {
        match parse_date_input(value) {
            Ok(date) => self.set_birthday(date, today),
            Err(e) => {
                self.birthday = None;
                self.errors.set(Field::Birthday, e);
            }
        }
    }

    /// Validate everything; returns the request only when the form is clean.
    pub fn submit(&mut self, today: Date) -> Option<CreateUserRequest> {
        let text_rules: [(Field, fn(&Self) -> Result<(), FieldError>); 6] = [
            (Field::Email, |f| validate_email(f.email.trim())),
            (Field::Password, |f| validate_password(&f.password)),
            (Field::ConfirmPassword, |f| {
                validate_confirm_password(&f.password, &f.confirm_password)
            }),
            (Field::Name, |f| validate_name(f.name.trim(), CREATE_NAME_MAX)),
            (Field::Gender, |f| validate_gender(&f.gender).map(|_| ())),
            (Field::Phone, |f| validate_phone(&f.phone)),
        ];

        for (field, rule) in text_rules {
            let outcome = validate_required(self.value(field)).and_then(|_| rule(self));
            self.errors.record(field, outcome);
        }

        match self.birthday {
            Some(d) => {
                self.errors
                    .record(Field::Birthday, validate_birthday_not_future(d, today));
            }
            None => self.errors.set(Field::Birthday, FieldError::Required),
        }

        if self.errors.has_errors() {
            return None;
        }

        let gender = validate_gender(&self.gender).ok()?;
        let birthday = self.birthday?;
        Some(CreateUserRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            gender,
            phone: self.phone.clone(),
            birthday: date_to_epoch_millis(birthday),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Gender;
    use time::Month;

    fn today() -> Date {
        Date::from_calendar_date(2024, Month::June, 1).unwrap()
    }

    fn filled() -> CreateUserForm {
        let mut form = CreateUserForm::new();
        form.set_field(Field::Email, "carol@example.com".into());
        form.set_field(Field::Password, "Secret123".into());
        form.set_field(Field::ConfirmPassword, "Secret123".into());
        form.set_field(Field::Name, "Carol".into());
        form.set_field(Field::Gender, "female".into());
        form.set_field(Field::Phone, "0912345678".into());
        form.set_birthday_input("1990-01-01", today());
        form
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = filled();
        let req = form.submit(today()).unwrap();
        assert_eq!(req.email, "carol@example.com");
        assert_eq!(req.gender, Gender::Female);
        assert_eq!(req.birthday, 631_152_000_000);
        assert!(!form.errors.has_errors());
    }

    #[test]
    fn test_empty_submit_marks_every_field_required() {
        let mut form = CreateUserForm::new();
        assert!(form.submit(today()).is_none());
        for field in [
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
            Field::Name,
            Field::Gender,
            Field::Phone,
            Field::Birthday,
        ] {
            assert_eq!(form.errors.get(field), Some(&FieldError::Required), "{field:?}");
        }
    }

    #[test]
    fn test_on_change_rules() {
        let mut form = CreateUserForm::new();

        form.set_field(Field::Email, "carol@".into());
        assert_eq!(form.errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        form.set_field(Field::Email, "carol@example.com".into());
        assert!(!form.errors.has_error(Field::Email));

        form.set_field(Field::Phone, "12ab".into());
        assert_eq!(form.errors.get(Field::Phone), Some(&FieldError::PhoneNotDigits));

        form.set_field(Field::Name, "A very long name!".into());
        assert_eq!(
            form.errors.get(Field::Name),
            Some(&FieldError::NameTooLong { max: 15, len: 17 })
        );
    }

    #[test]
    fn test_password_change_rechecks_confirmation() {
        let mut form = CreateUserForm::new();

        // No confirmation yet: nothing to compare against
        form.set_field(Field::Password, "Secret123".into());
        assert!(!form.errors.has_error(Field::ConfirmPassword));

        form.set_field(Field::ConfirmPassword, "Secret123".into());
        assert!(!form.errors.has_error(Field::ConfirmPassword));

        form.set_field(Field::Password, "Secret1234".into());
        assert_eq!(
            form.errors.get(Field::ConfirmPassword),
            Some(&FieldError::PasswordMismatch)
        );

        form.set_field(Field::Password, "Secret123".into());
        assert!(!form.errors.has_error(Field::ConfirmPassword));
    }

    #[test]
    fn test_format_errors_block_submit() {
        let mut form = filled();
        form.set_field(Field::Phone, "091234567890".into());
        assert!(form.submit(today()).is_none());
        assert_eq!(
            form.errors.get(Field::Phone),
            Some(&FieldError::PhoneTooLong { max: 10, len: 12 })
        );
    }

    #[test]
    fn test_future_birthday_rejected() {
        let mut form = filled();
        form.set_birthday_input("2024-06-02", today());
        assert_eq!(
            form.errors.get(Field::Birthday),
            Some(&FieldError::BirthdayInFuture)
        );
        assert!(form.submit(today()).is_none());
    }

    #[test]
    fn test_invalid_birthday_input() {
        let mut form = filled();
        form.set_birthday_input("not-a-date", today());
        assert!(form.birthday.is_none());
        assert_eq!(form.errors.get(Field::Birthday), Some(&FieldError::InvalidDate));
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = filled();
        form.set_field(Field::Email, "bad".into());
        form.reset();
        assert_eq!(form, CreateUserForm::new());
    }
}
