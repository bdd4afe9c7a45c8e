//! Wire DTOs for the employee API.
//!
//! Defined independently from the server crate so the client has no compile
//! dependency on axum internals; the integration test boots the real server
//! and catches any schema drift between the two. Field names on the wire
//! are camelCase.

use serde::{Deserialize, Serialize};

/// Numeric surrogate key assigned by the server on create.
pub type EmployeeId = u64;

/// An employee record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request payload for create and update. Update replaces all three fields;
/// the id in the path selects the record and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
