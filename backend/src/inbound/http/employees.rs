//! Employee HTTP handlers.
//!
//! ```text
//! GET    /api/v1/employees
//! GET    /api/v1/employees/search/{query}
//! GET    /api/v1/employees/highest-salary
//! GET    /api/v1/employees/top-earners
//! GET    /api/v1/employees/{id}
//! POST   /api/v1/employees
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Responses reuse the downstream JSON field names so clients see one
//! employee shape end to end. Errors serialise as the
//! `{errorCode, errorMessage}` envelope with a status derived from the
//! error kind.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::employee::{CreateEmployee, Employee, EmployeeValidationError};
use crate::domain::error::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Employee payload mirroring the downstream JSON field names.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    /// Downstream-owned identifier.
    pub id: String,
    /// Display name.
    pub employee_name: String,
    /// Currency-agnostic salary.
    pub employee_salary: i64,
    /// Age in whole years.
    pub employee_age: u32,
    /// Job title.
    pub employee_title: String,
    /// Contact address, when known.
    pub employee_email: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            employee_name: value.name,
            employee_salary: value.salary,
            employee_age: value.age,
            employee_title: value.title,
            employee_email: value.email,
        }
    }
}

/// Request payload for creating an employee.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployeeRequest {
    /// Display name; required, non-blank.
    pub name: Option<String>,
    /// Salary; required, at least 1.
    pub salary: Option<i64>,
    /// Age; required, between 16 and 75.
    pub age: Option<u32>,
    /// Job title; required, non-blank.
    pub title: Option<String>,
}

fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn invalid_field_error(error: EmployeeValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": "invalid_field",
    }))
}

fn parse_create_request(payload: CreateEmployeeRequest) -> Result<CreateEmployee, Error> {
    let name = payload.name.ok_or_else(|| missing_field_error("name"))?;
    let salary = payload.salary.ok_or_else(|| missing_field_error("salary"))?;
    let age = payload.age.ok_or_else(|| missing_field_error("age"))?;
    let title = payload.title.ok_or_else(|| missing_field_error("title"))?;

    CreateEmployee::new(name, salary, age, title).map_err(invalid_field_error)
}

fn to_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}

/// List every employee known to the downstream service.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tags = ["employees"],
    responses(
        (status = 200, description = "Full employee collection", body = [EmployeeResponse]),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let employees = state.employees.list_all().await?;
    Ok(HttpResponse::Ok().json(to_responses(employees)))
}

/// Search employees whose name contains the query, case-insensitively.
#[utoipa::path(
    get,
    path = "/api/v1/employees/search/{query}",
    tags = ["employees"],
    params(("query" = String, Path, description = "Name fragment to match")),
    responses(
        (status = 200, description = "Matching employees in downstream order", body = [EmployeeResponse]),
        (status = 400, description = "Blank search string", body = Error),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[get("/employees/search/{query}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    query: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employees = state.employees.search(&query).await?;
    Ok(HttpResponse::Ok().json(to_responses(employees)))
}

/// Highest salary across the collection; 204 when there are no records.
#[utoipa::path(
    get,
    path = "/api/v1/employees/highest-salary",
    tags = ["employees"],
    responses(
        (status = 200, description = "Highest salary", body = i64),
        (status = 204, description = "No employee records exist"),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[get("/employees/highest-salary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    match state.employees.highest_salary().await? {
        Some(salary) => Ok(HttpResponse::Ok().json(salary)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

/// Names of the ten highest-paid employees, salary descending.
#[utoipa::path(
    get,
    path = "/api/v1/employees/top-earners",
    tags = ["employees"],
    responses(
        (status = 200, description = "Top earner names, highest first", body = [String]),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[get("/employees/top-earners")]
pub async fn top_earners(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let names = state.employees.top_earners().await?;
    Ok(HttpResponse::Ok().json(names))
}

/// Fetch one employee by UUID identifier.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tags = ["employees"],
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No record for this identifier", body = Error),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[get("/employees/{id}")]
pub async fn get_employee_by_id(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Create an employee record downstream.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tags = ["employees"],
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Created employee record", body = EmployeeResponse),
        (status = 400, description = "Structurally invalid input", body = Error),
        (status = 500, description = "Create produced no usable record", body = Error),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_request(payload.into_inner())?;
    let employee = state.employees.create(request).await?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Delete an employee by identifier, returning the deleted name.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tags = ["employees"],
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Name of the deleted employee", body = String),
        (status = 404, description = "No record for this identifier", body = Error),
        (status = 409, description = "Several records share the resolved name", body = Error),
        (status = 502, description = "Downstream employee service failure", body = Error),
    )
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = state.employees.delete_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(name))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
