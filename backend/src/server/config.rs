//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use showcase::settings::{SettingsError, ShowcaseSettings};
use url::Url;

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users_base_url: Url,
    pub(crate) request_timeout: Duration,
    pub(crate) stale_after: Duration,
}

impl ServerConfig {
    /// Resolve every setting, applying defaults for unset values.
    ///
    /// # Errors
    ///
    /// Returns the first setting that fails to parse.
    pub fn from_settings(settings: &ShowcaseSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            users_base_url: settings.users_base_url()?,
            request_timeout: settings.request_timeout()?,
            stale_after: settings.stale_after(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
