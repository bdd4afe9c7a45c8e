//! Domain types for the employee service.
//!
//! # Design
//! `Employee` is the persisted record; `EmployeeInput` is the request body
//! shared by create and update (the store assigns the id on create, so the
//! input carries none — an `id` field in the posted JSON is simply ignored).
//! Wire field names are camelCase via serde rename.

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store on insert. Carries no business
/// meaning; the first assigned id is 1.
pub type EmployeeId = u64;

/// A persisted employee record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request payload for creating or updating an employee. Update replaces
/// all three fields on the existing record; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
