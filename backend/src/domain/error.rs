//! Domain error payload and failure taxonomy.
//!
//! These errors are transport agnostic; the inbound HTTP adapter maps each
//! code to a status in `inbound/http/error.rs`. Every failure kind stays
//! distinct from detection through to the boundary: a validation failure
//! must never look like a downstream fault.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Caller-supplied input failed local validation; never reached the network.
    InvalidRequest,
    /// The requested resource does not exist downstream.
    NotFound,
    /// A delete-by-id would be underspecified because several records share the name.
    AmbiguousDelete,
    /// The downstream create nominally succeeded but produced no usable record.
    CreationFailed,
    /// Transport failure or an unexpected downstream status.
    UpstreamUnavailable,
    /// The downstream body could not be decoded after a successful status.
    UpstreamMalformed,
    /// A request payload could not be serialised; a local bug.
    SerializationFailure,
}

/// Error response payload.
///
/// Serialises as `{errorCode, errorMessage}` plus optional structured
/// `details`, the envelope every facade endpoint returns on failure.
///
/// # Examples
/// ```
/// use employee_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code, ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[serde(rename = "errorCode")]
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[serde(rename = "errorMessage")]
    #[schema(example = "The employee ID provided is not a valid UUID")]
    pub message: String,
    /// Supplementary structured details, such as the failing field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use employee_api::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::AmbiguousDelete`].
    pub fn ambiguous_delete(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AmbiguousDelete, message)
    }

    /// Convenience constructor for [`ErrorCode::CreationFailed`].
    pub fn creation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CreationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamUnavailable`].
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamMalformed`].
    pub fn upstream_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamMalformed, message)
    }

    /// Convenience constructor for [`ErrorCode::SerializationFailure`].
    pub fn serialization_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationFailure, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
