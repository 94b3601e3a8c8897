//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every inbound HTTP endpoint and the domain schemas
//! they exchange. The document backs Swagger UI in debug builds and is
//! exported with `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::registration::{
    AccountType, FormField, RegistrationForm, RegistrationReceipt,
};
use crate::domain::{Error, ErrorCode, User, UserStatus, UsersPage};
use crate::inbound::http::registrations::ValidationReport;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accessible dashboard showcase API",
        description = "Paged users listing and registration form validation.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::registrations::validate_registration,
        crate::inbound::http::registrations::submit_registration,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        UserStatus,
        UsersPage,
        RegistrationForm,
        AccountType,
        FormField,
        RegistrationReceipt,
        ValidationReport,
    )),
    tags(
        (name = "users", description = "Paged users directory"),
        (name = "registrations", description = "Registration form validation and submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
