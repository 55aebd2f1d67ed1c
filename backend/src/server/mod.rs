//! Server construction and wiring.

mod config;

pub use config::{
    BIND_ADDR_VAR, ConfigError, EMPLOYEE_API_URL_VAR, REQUEST_TIMEOUT_VAR, ServerConfig,
};

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, Scope, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::EmployeeService;
use crate::domain::ports::EmployeeDirectory;
use crate::inbound::http::employees::{
    create_employee, delete_employee, get_employee_by_id, highest_salary, list_employees,
    search_employees, top_earners,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::employee_source::EmployeeHttpSource;

/// Employee routes under `/api/v1`.
///
/// Literal segments (`search`, `highest-salary`, `top-earners`) register
/// ahead of the `{id}` matcher so they are never captured as identifiers.
pub fn employee_scope() -> Scope {
    web::scope("/api/v1")
        .service(list_employees)
        .service(search_employees)
        .service(highest_salary)
        .service(top_earners)
        .service(create_employee)
        .service(get_employee_by_id)
        .service(delete_employee)
}

/// Build and start the HTTP server against the configured downstream
/// endpoint.
///
/// # Errors
///
/// Returns an error when the downstream client cannot be constructed or the
/// listener fails to bind.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let source =
        EmployeeHttpSource::with_timeout(config.employee_api_url.clone(), config.request_timeout)
            .map_err(|error| {
                std::io::Error::other(format!("failed to build employee client: {error}"))
            })?;
    let directory: Arc<dyn EmployeeDirectory> = Arc::new(EmployeeService::new(Arc::new(source)));
    let state = HttpState::new(directory);

    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .service(live)
            .service(ready)
            .service(employee_scope());
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind(config.bind_addr)?
    .run();

    info!(addr = %config.bind_addr, downstream = %config.employee_api_url, "employee facade listening");
    health_state.mark_ready();
    Ok(server)
}
