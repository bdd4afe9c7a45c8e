use axum::http::{self, Request, StatusCode};
use employee_server::{app, Employee};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const AMAR: &str = r#"{"firstName":"Amar","lastName":"Patil","email":"amarpatil@outlook.com"}"#;

// --- list ---

#[tokio::test]
async fn list_employees_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/api/v1/employees")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let employees: Vec<Employee> = body_json(resp).await;
    assert!(employees.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_employee_returns_201_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/v1/employees", AMAR))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: Employee = body_json(resp).await;
    assert_eq!(employee.id, 1);
    assert_eq!(employee.first_name, "Amar");
    assert_eq!(employee.last_name, "Patil");
    assert_eq!(employee.email, "amarpatil@outlook.com");
}

#[tokio::test]
async fn create_employee_duplicate_email_returns_409() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/v1/employees", AMAR))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/v1/employees", AMAR))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body["error"],
        "Employee already exists with email: 'amarpatil@outlook.com'"
    );

    // the conflicting create must not have written a second record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/employees"))
        .await
        .unwrap();
    let employees: Vec<Employee> = body_json(resp).await;
    assert_eq!(employees.len(), 1);
}

#[tokio::test]
async fn create_employee_missing_field_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/employees",
            r#"{"firstName":"Amar","lastName":"Patil"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_employee_not_found() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/employees/999999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Employee not found with id: '999999'");
}

#[tokio::test]
async fn get_employee_non_numeric_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/employees/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_employee_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/api/v1/employees/999999", AMAR))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_employee_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/employees/999999")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two employees
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/v1/employees", AMAR))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let amar: Employee = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/v1/employees",
            r#"{"firstName":"Peter","lastName":"Parker","email":"peter.parker@outlook.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let peter: Employee = body_json(resp).await;
    assert_ne!(amar.id, peter.id);

    // list — both present, insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/employees"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let employees: Vec<Employee> = body_json(resp).await;
    assert_eq!(employees, vec![amar.clone(), peter.clone()]);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/v1/employees/{}", amar.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Employee = body_json(resp).await;
    assert_eq!(fetched, amar);

    // update — all three fields replaced, id preserved
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/v1/employees/{}", amar.id),
            r#"{"firstName":"Amar","lastName":"Patil","email":"amar.patil@gmail.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Employee = body_json(resp).await;
    assert_eq!(updated.id, amar.id);
    assert_eq!(updated.email, "amar.patil@gmail.com");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/employees/{}", amar.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/v1/employees/{}", amar.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list — only the untouched record remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/employees"))
        .await
        .unwrap();
    let employees: Vec<Employee> = body_json(resp).await;
    assert_eq!(employees, vec![peter]);
}
