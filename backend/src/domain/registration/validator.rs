//! Whole-form validation and caller-owned error state.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use super::{FormErrors, FormField, RegistrationForm, rules};

/// Validate every field of `form` as of `today`.
///
/// Total and side-effect free: each field's rule chain runs independently and
/// contributes at most one message. An empty result means the form may be
/// submitted.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use showcase::domain::registration::{FormField, RegistrationForm, validate_form};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
/// let errors = validate_form(&RegistrationForm::default(), today);
/// assert_eq!(errors.get(FormField::Email), Some("Email is required"));
/// assert!(!errors.contains(FormField::Newsletter));
/// ```
pub fn validate_form(form: &RegistrationForm, today: NaiveDate) -> FormErrors {
    let checks = [
        (FormField::Email, rules::email(&form.email)),
        (FormField::Password, rules::password(&form.password)),
        (
            FormField::ConfirmPassword,
            rules::confirm_password(&form.password, &form.confirm_password),
        ),
        (FormField::FirstName, rules::name(&form.first_name, "First name")),
        (FormField::LastName, rules::name(&form.last_name, "Last name")),
        (FormField::BirthDate, rules::birth_date(&form.birth_date, today)),
        (FormField::Country, rules::country(&form.country)),
        (FormField::PhoneNumber, rules::phone_number(&form.phone_number)),
        (FormField::Bio, rules::bio(&form.bio)),
        (FormField::AccountType, rules::account_type(form.account_type)),
        (
            FormField::DataProcessing,
            rules::data_processing(form.data_processing),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(field, message)| message.map(|message| (field, message)))
        .collect()
}

/// Error state for one form instance.
///
/// The caller owns the validator and decides how long the errors live; there
/// is no shared state between forms.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use showcase::domain::registration::{FormValidator, RegistrationForm};
///
/// let mut validator = FormValidator::new(Arc::new(DefaultClock));
/// assert!(!validator.validate(&RegistrationForm::default()).is_empty());
/// validator.clear_errors();
/// assert!(validator.errors().is_empty());
/// ```
pub struct FormValidator {
    clock: Arc<dyn Clock>,
    errors: FormErrors,
}

impl FormValidator {
    /// Validator reading "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            errors: FormErrors::new(),
        }
    }

    /// Validator backed by the system clock.
    pub fn with_default_clock() -> Self {
        Self::new(Arc::new(DefaultClock))
    }

    /// Validate `form` against today's UTC date, replacing the stored errors.
    pub fn validate(&mut self, form: &RegistrationForm) -> &FormErrors {
        let today = self.clock.utc().date_naive();
        self.errors = validate_form(form, today);
        &self.errors
    }

    /// Errors from the last pass or the last [`FormValidator::set_errors`].
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Forget all errors, e.g. when the form is reset.
    pub fn clear_errors(&mut self) {
        self.errors = FormErrors::new();
    }

    /// Replace the stored errors, e.g. with feedback from the server.
    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::with_default_clock()
    }
}
