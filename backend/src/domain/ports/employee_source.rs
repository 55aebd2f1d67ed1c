//! Driven port for the downstream employee record service.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::employee::{CreateEmployee, Employee};

/// Errors surfaced by the downstream employee source adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeSourceError {
    /// Transport failure or an unexpected downstream status.
    #[error("employee source unavailable: {message}")]
    Unavailable { message: String },
    /// Downstream body could not be decoded after a successful status.
    #[error("employee source returned a malformed response: {message}")]
    Malformed { message: String },
    /// Request payload could not be serialised. A local bug, never retried.
    #[error("employee request serialisation failed: {message}")]
    Serialization { message: String },
}

impl EmployeeSourceError {
    /// Helper for transport and status failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Helper for undecodable response bodies.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Helper for request serialisation failures.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Contract the downstream employee-record adapter fulfils.
///
/// A `fetch_by_id` miss is a first-class outcome (`Ok(None)`), distinct from
/// adapter faults; every other non-success downstream status is an error.
/// The downstream delete primitive is name-keyed, which is why
/// [`EmployeeSource::delete_by_name`] exists at all; the orchestrator
/// resolves identifiers to names before calling it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetch the full employee collection.
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeSourceError>;

    /// Fetch one employee; `Ok(None)` when the downstream reports 404.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeSourceError>;

    /// Submit a create request; `Ok(None)` when the response envelope
    /// carried no record despite a successful status.
    async fn create(
        &self,
        request: &CreateEmployee,
    ) -> Result<Option<Employee>, EmployeeSourceError>;

    /// Delete by exact name; the boolean reports whether a record was removed.
    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeSourceError>;
}

/// In-memory employee source used by integration tests.
///
/// Mimics the mock server contract: identifiers are minted on create and
/// deletes are name-keyed.
#[derive(Debug, Default)]
pub struct FixtureEmployeeSource {
    records: Mutex<Vec<Employee>>,
}

impl FixtureEmployeeSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-populated with the given records.
    pub fn seeded(records: Vec<Employee>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Employee>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeSource for FixtureEmployeeSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeSourceError> {
        Ok(self.lock().clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeSourceError> {
        Ok(self.lock().iter().find(|record| record.id == id).cloned())
    }

    async fn create(
        &self,
        request: &CreateEmployee,
    ) -> Result<Option<Employee>, EmployeeSourceError> {
        let record = Employee {
            id: Uuid::new_v4().to_string(),
            name: request.name().to_owned(),
            salary: request.salary(),
            age: request.age(),
            title: request.title().to_owned(),
            email: None,
        };
        self.lock().push(record.clone());
        Ok(Some(record))
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeSourceError> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|record| !record.name.eq_ignore_ascii_case(name));
        Ok(records.len() < before)
    }
}
