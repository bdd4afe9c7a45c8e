//! Stateless request builder and response parser for the employee API.
//!
//! `EmployeeClient` holds only a `base_url` and carries no mutable state
//! between calls. Each of the five CRUD operations is split into a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming an
//! `HttpResponse`, so the I/O boundary stays explicit and the client stays
//! deterministic and testable without a server.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeId, EmployeeInput};

/// Synchronous, stateless client for the employee API. The caller executes
/// the HTTP round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/v1/employees", self.base_url)
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/api/v1/employees/{id}", self.base_url)
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_employee(&self, id: EmployeeId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.record_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_employee(&self, input: &EmployeeInput) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.record_url(id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_employee(&self, id: EmployeeId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.record_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        409 => Err(ApiError::AlreadyExists),
        s => Err(ApiError::Http {
            status: s,
            body: response.body.clone(),
        }),
    }
}
