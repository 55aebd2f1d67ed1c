//! Employee orchestration service.
//!
//! All business rules live here: input validation ahead of any network
//! call, snapshot aggregation (search, max, top-N), and the
//! lookup-then-delete protocol. The service is stateless between calls;
//! every operation fetches a fresh snapshot from the downstream source.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::employee::{CreateEmployee, Employee};
use crate::domain::error::Error;
use crate::domain::ports::{EmployeeDirectory, EmployeeSource, EmployeeSourceError};

/// Number of names returned by the top-earners aggregation.
pub const TOP_EARNER_COUNT: usize = 10;

fn map_source_error(source_error: EmployeeSourceError) -> Error {
    match source_error {
        EmployeeSourceError::Unavailable { message } => {
            Error::upstream_unavailable(format!("employee service unavailable: {message}"))
        }
        EmployeeSourceError::Malformed { message } => {
            Error::upstream_malformed(format!("employee service response malformed: {message}"))
        }
        EmployeeSourceError::Serialization { message } => {
            Error::serialization_failure(format!("employee request serialisation failed: {message}"))
        }
    }
}

/// Employee orchestration service implementing the driving port.
///
/// Read operations run concurrently with no shared mutable state. Deletes
/// serialise on an internal mutex: the downstream delete primitive is
/// name-keyed with no transactional read-then-act, so two concurrent
/// deletes could otherwise both observe a "unique" name for what is
/// momentarily two still-present records.
pub struct EmployeeService<S> {
    source: Arc<S>,
    delete_guard: Mutex<()>,
}

impl<S> EmployeeService<S> {
    /// Create a service over the given downstream source.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            delete_guard: Mutex::new(()),
        }
    }
}

impl<S> EmployeeService<S>
where
    S: EmployeeSource,
{
    async fn snapshot(&self) -> Result<Vec<Employee>, Error> {
        let employees = self.source.fetch_all().await.map_err(map_source_error)?;
        debug!(count = employees.len(), "fetched employee snapshot");
        Ok(employees)
    }

    fn validate_id(id: &str) -> Result<(), Error> {
        if id.trim().is_empty() {
            return Err(Error::invalid_request("employee id must not be empty"));
        }
        if Uuid::parse_str(id).is_err() {
            return Err(Error::invalid_request(
                "employee id must be a valid UUID",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<S> EmployeeDirectory for EmployeeService<S>
where
    S: EmployeeSource,
{
    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        self.snapshot().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Employee>, Error> {
        if query.trim().is_empty() {
            return Err(Error::invalid_request(
                "search string must not be empty or whitespace-only",
            ));
        }

        let needle = query.to_lowercase();
        let employees = self.snapshot().await?;
        Ok(employees
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Employee, Error> {
        Self::validate_id(id)?;

        self.source
            .fetch_by_id(id)
            .await
            .map_err(map_source_error)?
            .ok_or_else(|| Error::not_found(format!("no employee record for id {id}")))
    }

    async fn highest_salary(&self) -> Result<Option<i64>, Error> {
        let employees = self.snapshot().await?;
        Ok(employees.iter().map(|employee| employee.salary).max())
    }

    async fn top_earners(&self) -> Result<Vec<String>, Error> {
        let mut employees = self.snapshot().await?;
        // Stable sort keeps the downstream order for equal salaries.
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        Ok(employees
            .into_iter()
            .take(TOP_EARNER_COUNT)
            .map(|employee| employee.name)
            .collect())
    }

    async fn create(&self, request: CreateEmployee) -> Result<Employee, Error> {
        let created = self
            .source
            .create(&request)
            .await
            .map_err(map_source_error)?;

        created.ok_or_else(|| {
            Error::creation_failed("employee create operation returned no record")
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, Error> {
        // Held across the whole read-then-act sequence so concurrent deletes
        // cannot interleave between the snapshot and the name-keyed delete.
        let _guard = self.delete_guard.lock().await;

        let employees = self.snapshot().await?;
        let target = employees
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| Error::not_found(format!("no employee record for id {id}")))?;
        let name = target.name.clone();

        let lowered = name.to_lowercase();
        let sharing_name = employees
            .iter()
            .filter(|employee| employee.name.to_lowercase() == lowered)
            .count();
        if sharing_name > 1 {
            error!(
                %name,
                count = sharing_name,
                "rejecting delete: name is shared by multiple records"
            );
            return Err(Error::ambiguous_delete(
                "multiple employees share this name; a delete by id would be ambiguous",
            ));
        }

        info!(%id, %name, "resolved unique employee, proceeding with delete by name");
        let removed = self
            .source
            .delete_by_name(&name)
            .await
            .map_err(map_source_error)?;
        if !removed {
            // The snapshot just showed this record; a miss here means the
            // downstream state diverged mid-operation.
            return Err(Error::upstream_unavailable(format!(
                "employee {name} vanished between snapshot and delete"
            )));
        }

        Ok(name)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
