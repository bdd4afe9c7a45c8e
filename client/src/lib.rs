//! Synchronous API client core for the employee service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the client fully deterministic and
//! testable without a running server.
//!
//! # Design
//! - `EmployeeClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the integration
//!   test boots the real server and catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::EmployeeClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Employee, EmployeeId, EmployeeInput};
