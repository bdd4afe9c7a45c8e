//! HTTP adapter: maps the REST surface onto `EmployeeService` calls.
//!
//! Status mapping lives in two places by design: success codes here
//! (201 on create, 204 on delete, 200 otherwise) and failure codes on
//! `ServiceError`'s `IntoResponse` impl (404 / 409). Non-numeric path ids
//! are rejected by the `Path<u64>` extractor with 400 before any handler
//! runs; malformed JSON bodies are rejected by the `Json` extractor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ServiceError;
use crate::model::{Employee, EmployeeId, EmployeeInput};
use crate::service::EmployeeService;

pub fn routes(service: EmployeeService) -> Router {
    Router::new()
        .route("/api/v1/employees", get(list_employees).post(create_employee))
        .route(
            "/api/v1/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(service)
}

async fn create_employee(
    State(service): State<EmployeeService>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), ServiceError> {
    let employee = service.create_employee(input)?;
    tracing::debug!(id = employee.id, "created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn list_employees(State(service): State<EmployeeService>) -> Json<Vec<Employee>> {
    Json(service.list_employees())
}

async fn get_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ServiceError> {
    service.get_employee_by_id(id).map(Json)
}

async fn update_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, ServiceError> {
    let employee = service.update_employee(id, input)?;
    tracing::debug!(id = employee.id, "updated employee");
    Ok(Json(employee))
}

async fn delete_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, ServiceError> {
    service.delete_employee_by_id(id)?;
    tracing::debug!(id, "deleted employee");
    Ok(StatusCode::NO_CONTENT)
}
