//! End-to-end endpoint tests over an in-memory employee source.
//!
//! These exercise the real handlers, orchestration service, and route
//! wiring; only the downstream HTTP hop is substituted with the fixture
//! source.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use employee_api::domain::ports::{EmployeeDirectory, FixtureEmployeeSource};
use employee_api::domain::{Employee, EmployeeService};
use employee_api::inbound::http::state::HttpState;
use employee_api::server::employee_scope;

fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_owned(),
        name: name.to_owned(),
        salary,
        age: 30,
        title: "Engineer".to_owned(),
        email: None,
    }
}

fn seed() -> Vec<Employee> {
    vec![
        employee(
            "8a10edba-5f8b-4b9a-8a49-85ebd1f1f111",
            "Liam Anderson",
            95_000,
        ),
        employee(
            "0d0c6ddb-5f85-4757-a481-5a361e5b7a22",
            "Olivia Chen",
            120_000,
        ),
        employee(
            "b2d1b1a2-93b4-4dbb-86c9-92a0a1e6ce33",
            "Ethan Miller",
            80_000,
        ),
    ]
}

async fn spawn_app(
    records: Vec<Employee>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let source = Arc::new(FixtureEmployeeSource::seeded(records));
    let directory: Arc<dyn EmployeeDirectory> = Arc::new(EmployeeService::new(source));
    let state = HttpState::new(directory);

    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(employee_scope()),
    )
    .await
}

#[actix_web::test]
async fn create_then_get_round_trips_the_request_fields() {
    let app = spawn_app(Vec::new()).await;

    let create = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .set_json(json!({
            "name": "Ada Lovelace",
            "salary": 120_000,
            "age": 36,
            "title": "Engineer",
        }))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, create).await;
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("created record carries an id")
        .to_owned();

    let get = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/employees/{id}"))
        .to_request();
    let fetched: Value = actix_test::call_and_read_body_json(&app, get).await;

    assert_eq!(
        fetched.get("employee_name").and_then(Value::as_str),
        Some("Ada Lovelace")
    );
    assert_eq!(
        fetched.get("employee_salary").and_then(Value::as_i64),
        Some(120_000)
    );
    assert_eq!(fetched.get("employee_age").and_then(Value::as_u64), Some(36));
    assert_eq!(
        fetched.get("employee_title").and_then(Value::as_str),
        Some("Engineer")
    );
}

#[actix_web::test]
async fn search_matches_case_insensitively_end_to_end() {
    let app = spawn_app(seed()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/employees/search/MILLER")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    let names: Vec<&str> = body
        .as_array()
        .expect("search returns an array")
        .iter()
        .filter_map(|entry| entry.get("employee_name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Ethan Miller"]);
}

#[actix_web::test]
async fn top_earners_are_sorted_by_salary_descending() {
    let app = spawn_app(seed()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/employees/top-earners")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body, json!(["Olivia Chen", "Liam Anderson", "Ethan Miller"]));
}

#[actix_web::test]
async fn highest_salary_is_no_content_when_nothing_exists() {
    let app = spawn_app(Vec::new()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/employees/highest-salary")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn malformed_ids_are_rejected_as_bad_requests() {
    let app = spawn_app(seed()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/employees/not-a-uuid")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("errorCode").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_web::test]
async fn deleting_a_unique_employee_removes_it_from_the_listing() {
    let app = spawn_app(seed()).await;

    let delete = actix_test::TestRequest::delete()
        .uri("/api/v1/employees/b2d1b1a2-93b4-4dbb-86c9-92a0a1e6ce33")
        .to_request();
    let deleted: Value = actix_test::call_and_read_body_json(&app, delete).await;
    assert_eq!(deleted, json!("Ethan Miller"));

    let list = actix_test::TestRequest::get()
        .uri("/api/v1/employees")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, list).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("list returns an array")
        .iter()
        .filter_map(|entry| entry.get("employee_name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Liam Anderson", "Olivia Chen"]);
}

#[actix_web::test]
async fn deleting_one_of_two_namesakes_is_a_conflict() {
    let mut records = seed();
    records.push(employee(
        "f47ac10b-58cc-4372-a567-0e02b2c3d455",
        "ethan miller",
        60_000,
    ));
    let app = spawn_app(records).await;

    let delete = actix_test::TestRequest::delete()
        .uri("/api/v1/employees/b2d1b1a2-93b4-4dbb-86c9-92a0a1e6ce33")
        .to_request();
    let response = actix_test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("errorCode").and_then(Value::as_str),
        Some("ambiguous_delete")
    );

    // Nothing was deleted; both namesakes survive.
    let list = actix_test::TestRequest::get()
        .uri("/api/v1/employees")
        .to_request();
    let listing: Value = actix_test::call_and_read_body_json(&app, list).await;
    assert_eq!(listing.as_array().map(Vec::len), Some(4));
}
