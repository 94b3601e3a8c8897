//! Driven port for the upstream users directory.
//!
//! The directory exposes the whole collection in one flat list; paging
//! happens on this side of the port.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::User;
use crate::domain::registration::{RegistrationReceipt, RegistrationSubmission};

define_port_error! {
    /// Errors surfaced by the users directory.
    ///
    /// Non-success responses collapse into [`UserDirectoryError::Status`] so
    /// callers never branch on raw status codes.
    pub enum UserDirectoryError {
        /// The directory answered with a non-success status.
        Status => "Failed to fetch users",
        /// The request never produced a response; carries the transport message.
        Transport { message: String } => "{message}",
        /// The response body was not a users collection.
        Decode { message: String } => "invalid users payload: {message}",
        /// The directory refused a new registration.
        Rejected => "Failed to submit registration",
    }
}

/// Port for reading the users collection and adding accounts to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch every user, in the directory's own order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use showcase::domain::ports::{FixtureUserDirectory, UserDirectory};
    ///
    /// let directory = FixtureUserDirectory::default();
    /// let users = directory.fetch_users().await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), showcase::domain::ports::UserDirectoryError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Store a new account built from a validated registration form.
    async fn register(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<RegistrationReceipt, UserDirectoryError>;
}

/// In-memory directory serving a fixed collection.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    users: Vec<User>,
}

impl FixtureUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.users.clone())
    }

    async fn register(
        &self,
        _submission: &RegistrationSubmission,
    ) -> Result<RegistrationReceipt, UserDirectoryError> {
        Ok(RegistrationReceipt {
            user_id: (self.users.len() + 1).to_string(),
        })
    }
}
