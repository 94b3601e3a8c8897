//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! domain services and stay testable without network I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::UsersPageService;
use crate::domain::ports::UserDirectory;
use crate::domain::registration::RegistrationService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_pages: UsersPageService,
    pub registrations: RegistrationService,
}

impl HttpState {
    /// Wire both services against one directory and clock.
    pub fn new(directory: Arc<dyn UserDirectory>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users_pages: UsersPageService::new(directory.clone(), clock.clone()),
            registrations: RegistrationService::new(directory, clock),
        }
    }

    /// Replace the users page service, e.g. to change its staleness window.
    pub fn with_users_pages(mut self, users_pages: UsersPageService) -> Self {
        self.users_pages = users_pages;
        self
    }
}
