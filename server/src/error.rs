//! Domain errors for the employee service.
//!
//! # Design
//! Two variants cover every business-rule failure: a lookup that found
//! nothing and a create that would duplicate a unique field. Both carry the
//! entity name, the field checked, and the offending value so the message
//! pinpoints the failed rule. Infrastructure failures are not modeled here;
//! they surface as 5xx at the transport layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors returned by `EmployeeService`. Non-retryable; no partial side
/// effects occur before either variant is raised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A lookup by the named field found no record.
    #[error("{entity} not found with {field}: '{value}'")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A create would violate the uniqueness rule on the named field.
    #[error("{entity} already exists with {field}: '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}

impl ServiceError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        ServiceError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn already_exists(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        ServiceError::AlreadyExists {
            entity,
            field,
            value: value.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
