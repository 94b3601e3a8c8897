//! Reqwest-backed users directory adapter.
//!
//! This adapter owns transport details only: endpoint resolution, timeout,
//! status mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::warn;

use super::dto::{CreatedRecordDto, UserDto};
use crate::domain::User;
use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::registration::{RegistrationReceipt, RegistrationSubmission};

const USERS_PATH: &str = "users";
const PREVIEW_CHAR_LIMIT: usize = 160;

/// Failure to assemble the adapter at startup.
#[derive(Debug, thiserror::Error)]
pub enum UsersApiBuildError {
    /// The reqwest client rejected its configuration.
    #[error("failed to build users API client: {0}")]
    Client(#[from] reqwest::Error),
    /// The base URL cannot carry a `/users` path.
    #[error("invalid users API base URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Directory adapter issuing `GET` and `POST` against `<base>/users`.
pub struct UsersApiHttpSource {
    client: Client,
    endpoint: Url,
}

impl UsersApiHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// A base URL with a path prefix keeps it: `http://host/api` resolves to
    /// `http://host/api/users`.
    ///
    /// ```rust,ignore
    /// let source = UsersApiHttpSource::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// base URL cannot be joined.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, UsersApiBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = users_endpoint(base_url)?;
        Ok(Self { client, endpoint })
    }

    /// Fully resolved `/users` endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for UsersApiHttpSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log_status_failure("fetch", status, response).await;
            return Err(UserDirectoryError::status());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_users(body.as_ref())
    }

    async fn register(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<RegistrationReceipt, UserDirectoryError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log_status_failure("register", status, response).await;
            return Err(UserDirectoryError::rejected());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_receipt(body.as_ref())
    }
}

fn users_endpoint(mut base_url: Url) -> Result<Url, url::ParseError> {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.join(USERS_PATH)
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserDirectoryError> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body)
        .map_err(|error| UserDirectoryError::decode(error.to_string()))?;
    Ok(decoded.into_iter().map(User::from).collect())
}

fn parse_receipt(body: &[u8]) -> Result<RegistrationReceipt, UserDirectoryError> {
    let decoded: CreatedRecordDto = serde_json::from_slice(body)
        .map_err(|error| UserDirectoryError::decode(error.to_string()))?;
    Ok(decoded.into())
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    UserDirectoryError::transport(error.to_string())
}

/// Log a non-success answer. The body only feeds the preview, so an
/// unreadable one is logged as such and never changes the outcome.
async fn log_status_failure(operation: &str, status: StatusCode, response: Response) {
    let preview = match response.bytes().await {
        Ok(body) => body_preview(body.as_ref()),
        Err(error) => format!("<unreadable body: {error}>"),
    };
    warn!(
        operation,
        status = status.as_u16(),
        body = %preview,
        "users API returned a non-success status"
    );
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
