//! DTOs for the downstream employee service envelopes.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain [`Employee`] records in one pass. Every downstream response is
//! wrapped in a `{data, status}` envelope; unknown fields anywhere in the
//! payload are tolerated, and the `status` string is never consulted
//! because HTTP status codes are authoritative.

use serde::{Deserialize, Serialize};

use crate::domain::employee::{CreateEmployee, Employee};

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeListEnvelopeDto {
    #[serde(default)]
    pub(super) data: Vec<EmployeeDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeEnvelopeDto {
    pub(super) data: Option<EmployeeDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteEnvelopeDto {
    #[serde(default)]
    pub(super) data: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeDto {
    pub(super) id: String,
    #[serde(rename = "employee_name")]
    pub(super) name: String,
    #[serde(rename = "employee_salary")]
    pub(super) salary: i64,
    #[serde(rename = "employee_age")]
    pub(super) age: u32,
    #[serde(rename = "employee_title")]
    pub(super) title: String,
    #[serde(rename = "employee_email", default)]
    pub(super) email: Option<String>,
}

impl EmployeeDto {
    pub(super) fn into_domain(self) -> Employee {
        Employee {
            id: self.id,
            name: self.name,
            salary: self.salary,
            age: self.age,
            title: self.title,
            email: self.email,
        }
    }
}

/// Body for the downstream create call.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeBodyDto<'a> {
    name: &'a str,
    salary: i64,
    age: u32,
    title: &'a str,
}

impl<'a> From<&'a CreateEmployee> for CreateEmployeeBodyDto<'a> {
    fn from(value: &'a CreateEmployee) -> Self {
        Self {
            name: value.name(),
            salary: value.salary(),
            age: value.age(),
            title: value.title(),
        }
    }
}

/// Body for the downstream name-keyed delete call.
#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeBodyDto<'a> {
    pub(super) name: &'a str,
}
