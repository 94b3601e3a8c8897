//! Directory user records and the paged view served to the users table.

use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account status shown in the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User record as held by the upstream directory.
///
/// The showcase never creates or edits these records; they arrive as a flat
/// collection and are only sliced for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Admin")]
    pub role: String,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl User {
    /// Name shown in table rows, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of users plus the size of the whole directory.
///
/// ## Invariants
/// - `users.len() == min(limit, total.saturating_sub((page - 1) * limit))`
/// - `total` is the directory size, independent of `page` and `limit`.
///
/// # Examples
/// ```
/// use pagination::{Page, PageRequest};
/// use showcase::domain::UsersPage;
///
/// let page = UsersPage::from(Page::from_collection(Vec::new(), PageRequest::default()));
/// assert_eq!((page.users.len(), page.total, page.page, page.limit), (0, 0, 1, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<User>,
    #[schema(example = 47)]
    pub total: usize,
    #[schema(example = 1)]
    pub page: usize,
    #[schema(example = 10)]
    pub limit: usize,
}

impl From<Page<User>> for UsersPage {
    fn from(value: Page<User>) -> Self {
        let (users, total, page, limit) = value.into_parts();
        Self {
            users,
            total,
            page,
            limit,
        }
    }
}
