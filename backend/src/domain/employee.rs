//! Employee data model.
//!
//! [`Employee`] is a snapshot record owned by whichever call produced it; the
//! facade never caches one across operations. [`CreateEmployee`] is the
//! validated create input: construction enforces the structural rules so an
//! invalid request can never reach the network.

use std::fmt;

/// Youngest age accepted when creating an employee record.
pub const MIN_EMPLOYEE_AGE: u32 = 16;

/// Oldest age accepted when creating an employee record.
pub const MAX_EMPLOYEE_AGE: u32 = 75;

/// Employee record as returned by the downstream employee service.
///
/// The `id` field is assigned exclusively by the downstream service; the
/// facade never mints or reuses identifiers. `email` is carried verbatim and
/// is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Downstream-owned identifier in UUID string format.
    pub id: String,
    /// Display name; the key the downstream delete primitive operates on.
    pub name: String,
    /// Currency-agnostic positive salary.
    pub salary: i64,
    /// Age in whole years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Contact address, when the downstream service supplies one.
    pub email: Option<String>,
}

/// Validation errors returned by [`CreateEmployee::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Name is empty or whitespace-only.
    BlankName,
    /// Salary is below the minimum of 1.
    SalaryNotPositive,
    /// Age falls outside [`MIN_EMPLOYEE_AGE`]..=[`MAX_EMPLOYEE_AGE`].
    AgeOutOfRange,
    /// Title is empty or whitespace-only.
    BlankTitle,
}

impl EmployeeValidationError {
    /// Name of the request field that failed validation.
    pub fn field(self) -> &'static str {
        match self {
            Self::BlankName => "name",
            Self::SalaryNotPositive => "salary",
            Self::AgeOutOfRange => "age",
            Self::BlankTitle => "title",
        }
    }
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::SalaryNotPositive => write!(f, "salary must be at least 1"),
            Self::AgeOutOfRange => write!(
                f,
                "age must be between {MIN_EMPLOYEE_AGE} and {MAX_EMPLOYEE_AGE}"
            ),
            Self::BlankTitle => write!(f, "title must not be blank"),
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

/// Validated input for creating an employee downstream.
///
/// # Examples
/// ```
/// use employee_api::domain::CreateEmployee;
///
/// let request = CreateEmployee::new("Ada Lovelace", 120_000, 36, "Engineer")
///     .expect("valid request");
/// assert_eq!(request.name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployee {
    name: String,
    salary: i64,
    age: u32,
    title: String,
}

impl CreateEmployee {
    /// Validate and construct a create request.
    ///
    /// # Errors
    ///
    /// Returns an [`EmployeeValidationError`] naming the offending field when
    /// the name or title is blank, the salary is below 1, or the age falls
    /// outside the accepted range.
    pub fn new(
        name: impl Into<String>,
        salary: i64,
        age: u32,
        title: impl Into<String>,
    ) -> Result<Self, EmployeeValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EmployeeValidationError::BlankName);
        }
        if salary < 1 {
            return Err(EmployeeValidationError::SalaryNotPositive);
        }
        if !(MIN_EMPLOYEE_AGE..=MAX_EMPLOYEE_AGE).contains(&age) {
            return Err(EmployeeValidationError::AgeOutOfRange);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EmployeeValidationError::BlankTitle);
        }
        Ok(Self {
            name,
            salary,
            age,
            title,
        })
    }

    /// Employee display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested salary.
    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Requested age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Requested job title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::blank_name("", 50_000, 30, "Engineer", EmployeeValidationError::BlankName)]
    #[case::whitespace_name("   ", 50_000, 30, "Engineer", EmployeeValidationError::BlankName)]
    #[case::zero_salary("Ada", 0, 30, "Engineer", EmployeeValidationError::SalaryNotPositive)]
    #[case::negative_salary("Ada", -1, 30, "Engineer", EmployeeValidationError::SalaryNotPositive)]
    #[case::too_young("Ada", 50_000, 15, "Engineer", EmployeeValidationError::AgeOutOfRange)]
    #[case::too_old("Ada", 50_000, 76, "Engineer", EmployeeValidationError::AgeOutOfRange)]
    #[case::blank_title("Ada", 50_000, 30, " ", EmployeeValidationError::BlankTitle)]
    fn rejects_invalid_input(
        #[case] name: &str,
        #[case] salary: i64,
        #[case] age: u32,
        #[case] title: &str,
        #[case] expected: EmployeeValidationError,
    ) {
        let error = CreateEmployee::new(name, salary, age, title).expect_err("input must fail");
        assert_eq!(error, expected);
        assert!(!error.field().is_empty());
    }

    #[rstest]
    #[case::youngest(16)]
    #[case::oldest(75)]
    fn accepts_age_boundaries(#[case] age: u32) {
        let request =
            CreateEmployee::new("Ada", 1, age, "Engineer").expect("boundary ages are valid");
        assert_eq!(request.age(), age);
    }
}
