//! Registration API handlers.
//!
//! ```text
//! POST /api/v1/registrations/validate   Check a form without submitting it
//! POST /api/v1/registrations            Validate, then create the account
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;
use crate::domain::registration::{
    FormErrors, FormField, RegistrationForm, RegistrationOutcome, RegistrationReceipt,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Outcome of a dry-run validation.
///
/// `firstInvalidField` names the field a form should move focus to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    #[schema(value_type = Object, example = json!({"email": "Email is required"}))]
    pub errors: FormErrors,
    pub first_invalid_field: Option<FormField>,
}

impl From<FormErrors> for ValidationReport {
    fn from(errors: FormErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            first_invalid_field: errors.first_invalid_field(),
            errors,
        }
    }
}

fn rejected(errors: &FormErrors) -> Error {
    Error::invalid_request("registration form has errors").with_details(json!({
        "errors": errors,
        "firstInvalidField": errors.first_invalid_field(),
    }))
}

/// Validate a registration form without side effects.
#[utoipa::path(
    post,
    path = "/api/v1/registrations/validate",
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 400, description = "Body is not a registration form")
    ),
    tags = ["registrations"],
    operation_id = "validateRegistration"
)]
#[post("/registrations/validate")]
pub async fn validate_registration(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationForm>,
) -> web::Json<ValidationReport> {
    web::Json(state.registrations.check(&payload).into())
}

/// Validate a registration form and create the account.
///
/// A successful registration drops cached users pages so the new account
/// shows up on the next listing.
#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    request_body = RegistrationForm,
    responses(
        (status = 201, description = "Account created", body = RegistrationReceipt),
        (status = 400, description = "Form has errors; see details.errors", body = Error),
        (status = 503, description = "Users directory unavailable", body = Error)
    ),
    tags = ["registrations"],
    operation_id = "submitRegistration"
)]
#[post("/registrations")]
pub async fn submit_registration(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationForm>,
) -> ApiResult<HttpResponse> {
    match state.registrations.submit(&payload).await? {
        RegistrationOutcome::Rejected(errors) => Err(rejected(&errors)),
        RegistrationOutcome::Accepted(receipt) => {
            state.users_pages.invalidate();
            Ok(HttpResponse::Created().json(receipt))
        }
    }
}
