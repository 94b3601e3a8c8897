//! DTOs for the directory's `/users` payloads.
//!
//! Responses decode into these first and map to domain records in one pass.
//! Record ids arrive as numbers or strings depending on how the record was
//! created, so both are accepted.

use serde::Deserialize;

use crate::domain::registration::RegistrationReceipt;
use crate::domain::{User, UserStatus};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RecordIdDto {
    Number(u64),
    Text(String),
}

impl RecordIdDto {
    fn into_string(self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub(super) id: RecordIdDto,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) email: String,
    /// Records created through registration carry no role.
    #[serde(default)]
    pub(super) role: String,
    #[serde(default = "default_status")]
    pub(super) status: UserStatus,
    #[serde(default)]
    pub(super) avatar: Option<String>,
    #[serde(default)]
    pub(super) created_at: Option<String>,
    #[serde(default)]
    pub(super) last_login: Option<String>,
}

/// Registered users have not been deactivated, so a missing status reads
/// as active.
const fn default_status() -> UserStatus {
    UserStatus::Active
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id.into_string(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            role: value.role,
            status: value.status,
            avatar: value.avatar,
            created_at: value.created_at,
            last_login: value.last_login,
        }
    }
}

/// Record echoed back by the directory after a create.
#[derive(Debug, Deserialize)]
pub(super) struct CreatedRecordDto {
    pub(super) id: RecordIdDto,
}

impl From<CreatedRecordDto> for RegistrationReceipt {
    fn from(value: CreatedRecordDto) -> Self {
        Self {
            user_id: value.id.into_string(),
        }
    }
}
