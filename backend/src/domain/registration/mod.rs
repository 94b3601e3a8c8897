//! Registration form validation.
//!
//! [`validate_form`] is a pure function from a [`RegistrationForm`] snapshot
//! and a reference date to a [`FormErrors`] map. [`FormValidator`] wraps it
//! with caller-owned error state, and [`RegistrationService`] adds submission
//! through the users directory port.
//!
//! Rule chains, first failure wins:
//!
//! | Field | Checks |
//! |---|---|
//! | email | required, address pattern |
//! | password | required, 8+ characters, upper, lower, digit |
//! | confirmPassword | required, equals password |
//! | firstName / lastName | required, 2+ characters, letters spaces `-` `'` |
//! | birthDate | required, valid date, in the past, age 13..=120 |
//! | country, accountType | required |
//! | phoneNumber | optional, digits spaces `-` `(` `)` `+` |
//! | bio | at most 500 characters |
//! | dataProcessing | must be accepted |

mod form;
mod rules;
mod service;
mod submission;
mod validator;

pub use form::{AccountType, FormErrors, FormField, RegistrationForm, UnknownAccountType};
pub use rules::{BIO_MAX, MAX_AGE, MIN_AGE, NAME_MIN, PASSWORD_MIN, age_on};
pub use service::{RegistrationOutcome, RegistrationService};
pub use submission::{RegistrationReceipt, RegistrationSubmission};
pub use validator::{FormValidator, validate_form};
