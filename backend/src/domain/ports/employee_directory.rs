//! Driving port for employee orchestration operations.

use async_trait::async_trait;

use crate::domain::employee::{CreateEmployee, Employee};
use crate::domain::error::Error;

/// Operations contract the employee orchestration service fulfils.
///
/// HTTP handlers depend on this trait object so they stay free of business
/// rules and testable without I/O. Each call works over a fresh downstream
/// snapshot; nothing is cached between invocations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// List the full employee collection; an empty result is valid.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// Case-insensitive name substring search over a fresh snapshot.
    /// Fails with `invalid_request` before any network call when the query
    /// is blank.
    async fn search(&self, query: &str) -> Result<Vec<Employee>, Error>;

    /// Fetch a single employee by UUID identifier. Malformed identifiers
    /// fail with `invalid_request` before any network call; a downstream
    /// 404 surfaces as `not_found`.
    async fn get_by_id(&self, id: &str) -> Result<Employee, Error>;

    /// Maximum salary over the collection; `None` when it is empty.
    async fn highest_salary(&self) -> Result<Option<i64>, Error>;

    /// Names of the highest-paid employees, salary descending, at most ten.
    async fn top_earners(&self) -> Result<Vec<String>, Error>;

    /// Create a record downstream from already-validated input.
    async fn create(&self, request: CreateEmployee) -> Result<Employee, Error>;

    /// Delete by identifier via the lookup-then-delete protocol; returns the
    /// deleted employee's name.
    async fn delete_by_id(&self, id: &str) -> Result<String, Error>;
}
