//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the employee and health endpoints into one
//! specification. Swagger UI serves it at `/docs` in debug builds only.

use utoipa::OpenApi;

/// OpenAPI document for the employee facade REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee facade API",
        description = "REST facade over the downstream employee mock server: \
                       queries, search, salary aggregation, and guarded deletes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_earners,
        crate::inbound::http::employees::get_employee_by_id,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::employees::EmployeeResponse,
        crate::inbound::http::employees::CreateEmployeeRequest,
        crate::domain::Error,
        crate::domain::ErrorCode,
    )),
    tags(
        (name = "employees", description = "Employee queries, aggregation, and lifecycle"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
