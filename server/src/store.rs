//! Persistence gateway for employee records.
//!
//! # Design
//! `EmployeeStore` is the seam where a relational backend would plug in; the
//! service depends only on this trait. Each method is a single atomic store
//! operation — no transactional guarantees span two calls, and the service
//! knows it. `InMemoryStore` is the bundled implementation: a `BTreeMap`
//! keyed by id behind an `RwLock`, so iteration order is ascending id order,
//! which coincides with insertion order because ids are assigned from a
//! monotonically increasing counter.
//!
//! Uniqueness of `email` is NOT enforced here — the service checks it before
//! inserting. A relational implementation is expected to back this with a
//! unique index as a second line of defense.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::model::{Employee, EmployeeId, EmployeeInput};

/// CRUD primitives over employee records.
///
/// `insert` and `replace` together cover the classic `save`: insert when the
/// record has no id yet (the store assigns one), replace when it does.
pub trait EmployeeStore: Send + Sync {
    /// Persist a new record, assigning the next id. Returns the stored record.
    fn insert(&self, input: EmployeeInput) -> Employee;

    /// Overwrite the record with `employee.id`. Returns the stored record.
    fn replace(&self, employee: Employee) -> Employee;

    fn find_by_id(&self, id: EmployeeId) -> Option<Employee>;

    fn find_by_email(&self, email: &str) -> Option<Employee>;

    /// All records in insertion order.
    fn find_all(&self) -> Vec<Employee>;

    /// Remove the record with this id, if any. Permanent; no soft delete.
    fn delete_by_id(&self, id: EmployeeId);
}

#[derive(Debug, Default)]
struct Rows {
    next_id: EmployeeId,
    by_id: BTreeMap<EmployeeId, Employee>,
}

/// In-memory `EmployeeStore` backed by an id-ordered map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<Rows>,
}

impl EmployeeStore for InMemoryStore {
    fn insert(&self, input: EmployeeInput) -> Employee {
        let mut rows = self.rows.write().expect("store lock poisoned");
        rows.next_id += 1;
        let employee = Employee {
            id: rows.next_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        };
        rows.by_id.insert(employee.id, employee.clone());
        employee
    }

    fn replace(&self, employee: Employee) -> Employee {
        let mut rows = self.rows.write().expect("store lock poisoned");
        rows.by_id.insert(employee.id, employee.clone());
        employee
    }

    fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        let rows = self.rows.read().expect("store lock poisoned");
        rows.by_id.get(&id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<Employee> {
        let rows = self.rows.read().expect("store lock poisoned");
        rows.by_id.values().find(|e| e.email == email).cloned()
    }

    fn find_all(&self) -> Vec<Employee> {
        let rows = self.rows.read().expect("store lock poisoned");
        rows.by_id.values().cloned().collect()
    }

    fn delete_by_id(&self, id: EmployeeId) {
        let mut rows = self.rows.write().expect("store lock poisoned");
        rows.by_id.remove(&id);
    }
}
