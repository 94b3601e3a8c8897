//! Service configuration loaded via OrthoConfig.
//!
//! Every value may come from CLI flags, `SHOWCASE_*` environment variables,
//! or a configuration file; unset values fall back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::DEFAULT_STALE_AFTER;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_USERS_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("invalid users base URL {value:?}: {message}")]
    UsersBaseUrl { value: String, message: String },
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Runtime settings for the showcase service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHOWCASE")]
pub struct ShowcaseSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the users directory; `/users` is appended.
    pub users_base_url: Option<String>,
    /// Per-request timeout for directory calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// How long a users page is served from cache, in seconds.
    pub stale_after_secs: Option<u64>,
}

impl ShowcaseSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|error: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Configured directory base URL, falling back to `http://localhost:3001`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UsersBaseUrl`] when the value is not an
    /// absolute URL.
    pub fn users_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .users_base_url
            .as_deref()
            .unwrap_or(DEFAULT_USERS_BASE_URL);
        Url::parse(raw).map_err(|error| SettingsError::UsersBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Directory request timeout, falling back to ten seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero timeout, which
    /// reqwest would treat as an immediate failure.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Users page staleness window, falling back to five minutes. Zero
    /// disables caching.
    pub fn stale_after(&self) -> Duration {
        self.stale_after_secs
            .map_or(DEFAULT_STALE_AFTER, Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and fallbacks.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "SHOWCASE_BIND_ADDR",
        "SHOWCASE_USERS_BASE_URL",
        "SHOWCASE_REQUEST_TIMEOUT_SECS",
        "SHOWCASE_STALE_AFTER_SECS",
    ];

    fn load_from_empty_args() -> ShowcaseSettings {
        ShowcaseSettings::load_from_iter([OsString::from("showcase")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.users_base_url().expect("default URL").as_str(),
            "http://localhost:3001/"
        );
        assert_eq!(
            settings.request_timeout().expect("default timeout"),
            Duration::from_secs(10)
        );
        assert_eq!(settings.stale_after(), Duration::from_secs(300));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SHOWCASE_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "SHOWCASE_USERS_BASE_URL",
                Some("http://directory.internal:4000/api".to_owned()),
            ),
            ("SHOWCASE_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
            ("SHOWCASE_STALE_AFTER_SECS", Some("0".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.users_base_url().expect("URL").as_str(),
            "http://directory.internal:4000/api"
        );
        assert_eq!(
            settings.request_timeout().expect("timeout"),
            Duration::from_secs(3)
        );
        assert_eq!(settings.stale_after(), Duration::ZERO);
    }

    #[rstest]
    #[case("SHOWCASE_BIND_ADDR", "not-an-address")]
    #[case("SHOWCASE_USERS_BASE_URL", "not a url")]
    #[case("SHOWCASE_REQUEST_TIMEOUT_SECS", "0")]
    fn malformed_values_are_reported(#[case] var: &str, #[case] value: &str) {
        let _guard = lock_env(VARS.map(|name| {
            (name, (name == var).then(|| value.to_owned()))
        }));

        let settings = load_from_empty_args();
        let failures = [
            settings.bind_addr().err(),
            settings.users_base_url().err(),
            settings.request_timeout().err(),
        ];
        assert_eq!(failures.iter().flatten().count(), 1, "{failures:?}");
    }
}
