//! Registration form record, field identifiers, and the error map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Account tier picked in the account type radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
    Enterprise,
}

impl AccountType {
    /// Wire value, as sent by the radio group.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Raised when an account type string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account type: {0}")]
pub struct UnknownAccountType(String);

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(UnknownAccountType(other.to_owned())),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<AccountType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Snapshot of the registration form at submit time.
///
/// Field values are kept as the user typed them; every rule lives in
/// [`crate::domain::registration::validate_form`]. `birth_date` stays a
/// string so a malformed date surfaces as a field error rather than a
/// decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "1990-01-01")]
    pub birth_date: String,
    #[schema(example = "us")]
    pub country: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub data_processing: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub account_type: Option<AccountType>,
}

/// Every field of the registration form, in top-to-bottom order.
///
/// The derived `Ord` follows declaration order, so sorting by field gives the
/// order a keyboard user tabs through the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    BirthDate,
    Country,
    PhoneNumber,
    Bio,
    AccountType,
    DataProcessing,
    Newsletter,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [Self; 12] = [
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::FirstName,
        Self::LastName,
        Self::BirthDate,
        Self::Country,
        Self::PhoneNumber,
        Self::Bio,
        Self::AccountType,
        Self::DataProcessing,
        Self::Newsletter,
    ];

    /// JSON key and DOM id of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::BirthDate => "birthDate",
            Self::Country => "country",
            Self::PhoneNumber => "phoneNumber",
            Self::Bio => "bio",
            Self::AccountType => "accountType",
            Self::DataProcessing => "dataProcessing",
            Self::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message map produced by one validation pass.
///
/// A field is valid exactly when it has no entry. Iteration follows form
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    /// Empty map: every field valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message recorded for `field`.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` failed validation.
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// First invalid field in form order; the one to move focus to.
    ///
    /// # Examples
    /// ```
    /// use showcase::domain::registration::{FormErrors, FormField};
    ///
    /// let errors: FormErrors = [
    ///     (FormField::Country, "Please select your country"),
    ///     (FormField::Password, "Password is required"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(errors.first_invalid_field(), Some(FormField::Password));
    /// ```
    pub fn first_invalid_field(&self) -> Option<FormField> {
        self.0.keys().next().copied()
    }

    /// Overlay `other` on top of these errors; `other` wins per field.
    pub fn merge(&mut self, other: FormErrors) {
        self.0.extend(other.0);
    }
}

impl<M: Into<String>> FromIterator<(FormField, M)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, M)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field, message.into()))
                .collect(),
        )
    }
}
