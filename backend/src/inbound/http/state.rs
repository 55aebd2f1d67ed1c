//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Employee orchestration operations.
    pub employees: Arc<dyn EmployeeDirectory>,
}

impl HttpState {
    /// Bundle the employee driving port for handler injection.
    pub fn new(employees: Arc<dyn EmployeeDirectory>) -> Self {
        Self { employees }
    }
}
