//! Error types for the employee API client.
//!
//! `NotFound` and `AlreadyExists` get dedicated variants because they are
//! the two domain outcomes callers branch on (missing id, duplicate email).
//! Every other non-2xx status lands in `Http` with the raw status and body
//! for debugging.

use thiserror::Error;

/// Errors returned by `EmployeeClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — no employee with the requested id.
    #[error("employee not found")]
    NotFound,

    /// The server returned 409 — the email is already taken.
    #[error("employee already exists")]
    AlreadyExists,

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
