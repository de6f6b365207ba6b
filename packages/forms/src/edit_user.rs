//! State of the "edit user" dialog.
//!
//! The email is shown but never sent: it is immutable once the account exists.
//! Text rules run on change, the required check runs when a field loses focus,
//! and the date picker reports a missing birthday immediately.

use api::{date_to_epoch_millis, UpdateUserRequest, User};
use time::Date;

use crate::field::{Field, FieldErrors};
use crate::rules::{
    parse_date_input, validate_birthday_not_future, validate_gender, validate_name,
    validate_phone, validate_required, FieldError, EDIT_NAME_MAX,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUserForm {
    pub user_id: String,
    /// Read-only.
    pub email: String,
    /// Name at the time the dialog opened, used in the title.
    pub original_name: String,
    pub name: String,
    pub gender: String,
    pub phone: String,
    pub birthday: Option<Date>,
    pub errors: FieldErrors,
}

impl EditUserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            original_name: user.name.clone(),
            name: user.name.clone(),
            gender: user.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
            phone: user.phone.clone(),
            birthday: user.birthday_date(),
            errors: FieldErrors::new(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Password | Field::ConfirmPassword | Field::Birthday => "",
        }
    }

    fn change_rule(&self, field: Field, value: &str) -> Result<(), FieldError> {
        match field {
            Field::Name => validate_name(value, EDIT_NAME_MAX),
            Field::Phone => validate_phone(value),
            _ => Ok(()),
        }
    }

    /// Apply a change to name, gender or phone. Other fields are not editable.
    pub fn set_field(&mut self, field: Field, value: String) {
        let outcome = self.change_rule(field, &value);
        match field {
            Field::Name => self.name = value,
            Field::Gender => self.gender = value,
            Field::Phone => self.phone = value,
            _ => return,
        }
        self.errors.record(field, outcome);
    }

    /// The field lost focus: an empty value is an error, otherwise its
    /// change rule is re-applied.
    pub fn blur(&mut self, field: Field) {
        if !matches!(field, Field::Name | Field::Gender | Field::Phone) {
            return;
        }
        let value = self.value(field);
        let outcome = validate_required(value).and_then(|_| self.change_rule(field, value));
        self.errors.record(field, outcome);
    }

    pub fn set_birthday(&mut self, date: Option<Date>, today: Date) {
        let outcome = match date {
            Some(d) => validate_birthday_not_future(d, today),
            None => Err(FieldError::BirthdayRequired),
        };
        self.errors.record(Field::Birthday, outcome);
        self.birthday = date;
    }

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
    pub fn submit(&mut self, today: Date) -> Option<UpdateUserRequest> {
        for field in [Field::Name, Field::Gender, Field::Phone] {
            self.blur(field);
        }
        if !self.errors.has_error(Field::Gender) {
            let gender = validate_gender(&self.gender).map(|_| ());
            self.errors.record(Field::Gender, gender);
        }
        self.set_birthday(self.birthday, today);

        if self.errors.has_errors() {
            return None;
        }

        let gender = validate_gender(&self.gender).ok()?;
        let birthday = self.birthday?;
        Some(UpdateUserRequest {
            name: self.name.trim().to_string(),
            gender,
            phone: self.phone.clone(),
            birthday: date_to_epoch_millis(birthday),
        })
    }
}
