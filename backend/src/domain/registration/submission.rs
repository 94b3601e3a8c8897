//! Payload posted to the users directory once a form validates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AccountType, RegistrationForm};

/// New account record sent to the directory.
///
/// Carries every form value except the two password fields, plus the
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub country: String,
    pub phone_number: String,
    pub bio: String,
    pub account_type: Option<AccountType>,
    pub newsletter: bool,
    pub data_processing: bool,
    #[schema(example = "2026-10-17T09:30:00.000Z")]
    pub created_at: String,
}

impl RegistrationSubmission {
    /// Build the submission for `form`, stamped with `created_at`.
    pub fn from_form(form: &RegistrationForm, created_at: DateTime<Utc>) -> Self {
        Self {
            email: form.email.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            birth_date: form.birth_date.clone(),
            country: form.country.clone(),
            phone_number: form.phone_number.clone(),
            bio: form.bio.clone(),
            account_type: form.account_type,
            newsletter: form.newsletter,
            data_processing: form.data_processing,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Directory acknowledgement for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    #[schema(example = "16")]
    pub user_id: String,
}
