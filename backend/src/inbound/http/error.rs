//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type transport agnostic while letting Actix
//! handlers turn domain failures into consistent JSON responses and status
//! codes. The mapping is the only place error kinds meet HTTP statuses;
//! the kinds themselves are never collapsed into one another.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::AmbiguousDelete => StatusCode::CONFLICT,
        ErrorCode::CreationFailed | ErrorCode::SerializationFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ErrorCode::UpstreamUnavailable | ErrorCode::UpstreamMalformed => StatusCode::BAD_GATEWAY,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
