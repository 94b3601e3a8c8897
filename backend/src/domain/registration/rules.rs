//! Per-field rule chains.
//!
//! Each rule returns the message of the first check that fails, or `None`
//! when the value is acceptable. Lengths count Unicode scalar values.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;

use super::AccountType;

/// Minimum password length.
pub const PASSWORD_MIN: usize = 8;
/// Minimum first/last name length.
pub const NAME_MIN: usize = 2;
/// Maximum bio length.
pub const BIO_MAX: usize = 500;
/// Youngest age allowed to register.
pub const MIN_AGE: i32 = 13;
/// Upper sanity bound on age.
pub const MAX_AGE: i32 = 120;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static NAME_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("rule regex {pattern} failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    compiled(&EMAIL_RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn name_regex() -> &'static Regex {
    compiled(&NAME_RE, r"^[a-zA-Z\s'-]+$")
}

fn phone_regex() -> &'static Regex {
    compiled(&PHONE_RE, r"^[0-9\s\-()+]+$")
}

pub(crate) fn email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_owned());
    }
    if !email_regex().is_match(value) {
        return Some("Please enter a valid email address".to_owned());
    }
    None
}

pub(crate) fn password(value: &str) -> Option<String> {
    let message = if value.is_empty() {
        "Password is required"
    } else if value.chars().count() < PASSWORD_MIN {
        "Password must be at least 8 characters long"
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        "Password must contain at least one uppercase letter"
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        "Password must contain at least one lowercase letter"
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        "Password must contain at least one number"
    } else {
        return None;
    };
    Some(message.to_owned())
}

pub(crate) fn confirm_password(password: &str, confirmation: &str) -> Option<String> {
    if confirmation.is_empty() {
        return Some("Please confirm your password".to_owned());
    }
    if password != confirmation {
        return Some("Passwords do not match".to_owned());
    }
    None
}

/// Shared chain for first and last names; `label` prefixes each message.
pub(crate) fn name(value: &str, label: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{label} is required"));
    }
    if value.chars().count() < NAME_MIN {
        return Some(format!("{label} must be at least 2 characters long"));
    }
    if !name_regex().is_match(value) {
        return Some(format!(
            "{label} can only contain letters, spaces, hyphens, and apostrophes"
        ));
    }
    None
}

pub(crate) fn birth_date(value: &str, today: NaiveDate) -> Option<String> {
    const INVALID: &str = "Please enter a valid birth date";

    if value.is_empty() {
        return Some("Date of birth is required".to_owned());
    }
    let Some(birth) = parse_birth_date(value) else {
        return Some(INVALID.to_owned());
    };
    if birth >= today {
        return Some("Birth date must be in the past".to_owned());
    }
    let age = age_on(birth, today);
    if age < MIN_AGE {
        return Some("You must be at least 13 years old to create an account".to_owned());
    }
    if age > MAX_AGE {
        return Some(INVALID.to_owned());
    }
    None
}

/// Accepts the `YYYY-MM-DD` value of a date input, or a full RFC 3339
/// timestamp.
fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Whole years elapsed between `birth` and `today`.
///
/// One less than the calendar-year difference until the birthday has come
/// round in `today`'s year.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

pub(crate) fn country(value: &str) -> Option<String> {
    value
        .is_empty()
        .then(|| "Please select your country".to_owned())
}

pub(crate) fn phone_number(value: &str) -> Option<String> {
    (!value.is_empty() && !phone_regex().is_match(value))
        .then(|| "Please enter a valid phone number".to_owned())
}

pub(crate) fn bio(value: &str) -> Option<String> {
    (value.chars().count() > BIO_MAX).then(|| "Bio must be 500 characters or less".to_owned())
}

pub(crate) fn account_type(value: Option<AccountType>) -> Option<String> {
    value
        .is_none()
        .then(|| "Please select an account type".to_owned())
}

pub(crate) fn data_processing(consented: bool) -> Option<String> {
    (!consented).then(|| "You must agree to data processing to create an account".to_owned())
}
