//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};

use showcase::Trace;
#[cfg(debug_assertions)]
use showcase::doc::ApiDoc;
use showcase::domain::UsersPageService;
use showcase::domain::ports::UserDirectory;
use showcase::inbound::http::health::{HealthState, live, ready};
use showcase::inbound::http::registrations::{submit_registration, validate_registration};
use showcase::inbound::http::state::HttpState;
use showcase::inbound::http::users::list_users;
use showcase::outbound::users_api::UsersApiHttpSource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let source = UsersApiHttpSource::new(config.users_base_url.clone(), config.request_timeout)
        .map_err(std::io::Error::other)?;
    info!(endpoint = %source.endpoint(), "users directory configured");

    let directory: Arc<dyn UserDirectory> = Arc::new(source);
    let clock = Arc::new(DefaultClock);
    let users_pages = UsersPageService::new(directory.clone(), clock.clone())
        .with_stale_after(config.stale_after);
    Ok(HttpState::new(directory, clock).with_users_pages(users_pages))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(list_users)
        .service(validate_registration)
        .service(submit_registration);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from resolved configuration.
///
/// Marks `health_state` ready once the listener is bound. The server does
/// not install its own signal handlers; pair it with [`drain_on`].
///
/// # Errors
/// Propagates [`std::io::Error`] when the directory client cannot be built or
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    info!(bind_addr = %config.bind_addr(), "showcase listening");
    Ok(server)
}

/// Fail liveness, then stop the server gracefully, once `signal` resolves.
///
/// A failed signal listener is logged and leaves the server running.
pub async fn drain_on<F>(health_state: web::Data<HealthState>, handle: ServerHandle, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed");
        return;
    }
    health_state.mark_unhealthy();
    info!("shutdown requested; draining connections");
    handle.stop(true).await;
}
