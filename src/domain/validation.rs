// src/domain/validation.rs
//
// Local validation layer: every check runs before any simulated
// submission and surfaces as a list of field-level messages. The simulated
// backend call itself never fails; a real backend's rejection/conflict
// modes would attach at the gateway seam, not here.

use chrono::NaiveDate;

use crate::domain::fields::{derive_age, PHONE_MAX_DIGITS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Raw registration form as posted, before normalization.
#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub contact_number: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_registration(form: &RegistrationForm, as_of: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require(&mut errors, "first_name", &form.first_name, "First name is required");
    require(&mut errors, "last_name", &form.last_name, "Last name is required");
    require(&mut errors, "birth_date", &form.birth_date, "Birth date is required");
    require(&mut errors, "contact_number", &form.contact_number, "Contact number is required");
    require(&mut errors, "address", &form.address, "Address is required");
    require(&mut errors, "password", &form.password, "Password is required");

    if !form.birth_date.trim().is_empty() && derive_age(&form.birth_date, as_of).is_none() {
        errors.push(FieldError::new(
            "birth_date",
            "Birth date must be a valid MM/DD/YYYY date that is not in the future",
        ));
    }

    if !form.contact_number.trim().is_empty() && form.contact_number.len() != PHONE_MAX_DIGITS {
        errors.push(FieldError::new(
            "contact_number",
            "Contact number must be 11 digits",
        ));
    }

    if !form.password.is_empty() && form.password != form.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    errors
}

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Juan".into(),
            last_name: "Dela Cruz".into(),
            birth_date: "01/01/2000".into(),
            contact_number: "09171234567".into(),
            address: "Purok 3, Zone 2".into(),
            password: "s3cret".into(),
            confirm_password: "s3cret".into(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_registration(&valid_form(), today()).is_empty());
    }

    #[test]
    fn missing_required_fields_each_report() {
        let errors = validate_registration(&RegistrationForm::default(), today());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        for f in ["first_name", "last_name", "birth_date", "contact_number", "address", "password"] {
            assert!(fields.contains(&f), "missing error for {f}");
        }
    }

    #[test]
    fn password_mismatch_is_field_level() {
        let mut form = valid_form();
        form.confirm_password = "other".into();
        let errors = validate_registration(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_password");
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let mut form = valid_form();
        form.birth_date = "01/01/2030".into();
        let errors = validate_registration(&form, today());
        assert!(errors.iter().any(|e| e.field == "birth_date"));
    }

    #[test]
    fn short_contact_number_is_rejected() {
        let mut form = valid_form();
        form.contact_number = "0917123".into();
        let errors = validate_registration(&form, today());
        assert!(errors.iter().any(|e| e.field == "contact_number"));
    }
}
