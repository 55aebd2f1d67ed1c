//! Domain entities, ports, and the employee orchestration service.
//!
//! Public surface:
//! - [`Employee`] / [`CreateEmployee`]: employee records and validated
//!   create input.
//! - [`Error`] / [`ErrorCode`]: the transport-agnostic failure taxonomy.
//! - [`ports`]: driven and driving port traits.
//! - [`EmployeeService`]: the orchestration service implementing the
//!   driving port.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;

pub use self::employee::{CreateEmployee, Employee, EmployeeValidationError};
pub use self::employee_service::{EmployeeService, TOP_EARNER_COUNT};
pub use self::error::{Error, ErrorCode};
