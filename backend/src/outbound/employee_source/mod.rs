//! Employee source outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `EmployeeSource`
//! port against the downstream employee mock server.

mod dto;
mod http_source;

pub use http_source::EmployeeHttpSource;
