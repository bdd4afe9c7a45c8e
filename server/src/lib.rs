//! Employee CRUD REST service.
//!
//! # Overview
//! Thin orchestration in three layers: `handlers` parses HTTP input and maps
//! status codes, `service` applies the business rules (email uniqueness on
//! create, existence on get/update/delete), `store` persists records behind
//! the `EmployeeStore` trait. `app()` wires the layers with the bundled
//! in-memory store; swap the store at the `routes()` seam to change backends.

pub mod error;
pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use error::ServiceError;
pub use model::{Employee, EmployeeId, EmployeeInput};
pub use service::EmployeeService;
pub use store::{EmployeeStore, InMemoryStore};

/// The full application with a fresh in-memory store.
pub fn app() -> Router {
    let service = EmployeeService::new(Arc::new(InMemoryStore::default()));
    handlers::routes(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
