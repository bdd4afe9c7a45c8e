//! Business rules atop the employee store.
//!
//! # Design
//! The service enforces exactly two invariants before delegating to the
//! store: email uniqueness on create and record existence on get, update,
//! and delete. Each operation is a single check followed by at most one
//! store write; the check and the write are separate store calls, so two
//! concurrent creates with the same email can race past the uniqueness
//! check. A relational backend closes that gap with a unique index on
//! `email` (see `store`).
//!
//! Update deliberately re-checks existence but NOT email uniqueness, so an
//! update can introduce a duplicate email. Known behavior, kept as-is.

use std::sync::Arc;

use crate::error::ServiceError;
use crate::model::{Employee, EmployeeId, EmployeeInput};
use crate::store::EmployeeStore;

const ENTITY: &str = "Employee";

/// Employee CRUD with business-rule checks. Cheap to clone; shares the store.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Persist a new employee. Fails with `AlreadyExists` if another record
    /// already holds this email; nothing is written in that case.
    pub fn create_employee(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        if self.store.find_by_email(&input.email).is_some() {
            return Err(ServiceError::already_exists(ENTITY, "email", &input.email));
        }
        Ok(self.store.insert(input))
    }

    /// All employees, insertion order. No filtering, no pagination.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.store.find_all()
    }

    pub fn get_employee_by_id(&self, id: EmployeeId) -> Result<Employee, ServiceError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found(ENTITY, "id", id))
    }

    /// Replace firstName, lastName, and email on an existing record. The id
    /// never changes. Fails with `NotFound` if the id does not exist.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        input: EmployeeInput,
    ) -> Result<Employee, ServiceError> {
        let found = self
            .store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found(ENTITY, "id", id))?;
        Ok(self.store.replace(Employee {
            id: found.id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }))
    }

    /// Permanently remove an employee. Fails with `NotFound` if the id does
    /// not exist.
    pub fn delete_employee_by_id(&self, id: EmployeeId) -> Result<(), ServiceError> {
        let found = self
            .store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found(ENTITY, "id", id))?;
        self.store.delete_by_id(found.id);
        Ok(())
    }
}
