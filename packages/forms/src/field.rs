use std::collections::BTreeMap;

use crate::rules::FieldError;

/// Every input the user forms can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Name,
    Gender,
    Phone,
    Birthday,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Name => "Name",
            Field::Gender => "Gender",
            Field::Phone => "Phone",
            Field::Birthday => "Birthday",
        }
    }

    /// Stable identifier for `id`/`for` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Phone => "phone",
            Field::Birthday => "birthday",
        }
    }
}

/// Current helper text of each field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// Store the outcome of a rule: set on `Err`, clear on `Ok`.
    /// Returns whether the field is valid.
    pub fn record<T>(&mut self, field: Field, outcome: Result<T, FieldError>) -> bool {
        match outcome {
            Ok(_) => {
                self.clear(field);
                true
            }
            Err(e) => {
                self.set(field, e);
                false
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Helper text for `field`, empty when valid.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sets_and_clears() {
        let mut errors = FieldErrors::new();
        assert!(!errors.record(Field::Phone, Err::<(), _>(FieldError::PhoneNotDigits)));
        assert!(errors.has_error(Field::Phone));
        assert_eq!(errors.message(Field::Phone), "Phone may only contain digits");

        assert!(errors.record(Field::Phone, Ok(())));
        assert!(!errors.has_errors());
        assert_eq!(errors.message(Field::Phone), "");
    }

    #[test]
    fn test_fields_are_ordered() {
        let mut errors = FieldErrors::new();
        errors.set(Field::Birthday, FieldError::Required);
        errors.set(Field::Email, FieldError::Required);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Email, Field::Birthday]);

        errors.clear_all();
        assert!(!errors.has_errors());
    }
}
