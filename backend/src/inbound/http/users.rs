//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users?page=2&limit=25
//! ```

use actix_web::{get, web};
use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest, PageRequestError};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::{Error, UsersPage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw query parameters for `GET /api/v1/users`.
///
/// Values stay strings until parsed so malformed input reports the offending
/// field instead of a generic extractor failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsersPageQuery {
    /// 1-based page number; defaults to 1.
    #[param(value_type = Option<usize>, minimum = 1, example = 1)]
    pub page: Option<String>,
    /// Page size; defaults to 10, at most 50.
    #[param(value_type = Option<usize>, minimum = 1, maximum = 50, example = 10)]
    pub limit: Option<String>,
}

impl TryFrom<UsersPageQuery> for PageRequest {
    type Error = Error;

    fn try_from(value: UsersPageQuery) -> Result<Self, Self::Error> {
        let page = parse_positive("page", value.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive("limit", value.limit.as_deref(), DEFAULT_LIMIT)?;
        if limit > MAX_LIMIT {
            return Err(
                Error::invalid_request(format!("limit must be at most {MAX_LIMIT}")).with_details(
                    json!({
                        "field": "limit",
                        "code": "above_maximum",
                        "maximum": MAX_LIMIT,
                    }),
                ),
            );
        }
        PageRequest::new(page, limit).map_err(map_page_request_error)
    }
}

fn parse_positive(field: &'static str, raw: Option<&str>, default: usize) -> Result<usize, Error> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim().parse::<usize>().map_err(|_| {
        Error::invalid_request(format!("{field} must be a positive integer")).with_details(json!({
            "field": field,
            "value": raw,
            "code": "invalid_integer",
        }))
    })
}

fn map_page_request_error(err: PageRequestError) -> Error {
    let field = match err {
        PageRequestError::ZeroPage => "page",
        PageRequestError::ZeroLimit => "limit",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "below_minimum",
    }))
}

/// One page of the users directory.
///
/// Pages past the end come back empty with the true `total`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use showcase::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(UsersPageQuery),
    responses(
        (status = 200, description = "Users page", body = UsersPage),
        (status = 400, description = "Invalid page, or limit outside 1..=50", body = Error),
        (status = 503, description = "Users directory unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<UsersPageQuery>,
) -> ApiResult<web::Json<UsersPage>> {
    let request = PageRequest::try_from(query.into_inner())?;
    let page = state.users_pages.users_page(request).await?;
    Ok(web::Json(page))
}
