//! Router-level tests driving the API end to end against a temp-file store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use outgo_api::{AppState, create_router};
use outgo_core::store::ExpenseStore;

fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = ExpenseStore::open(dir.path().join("expenses.json"));
    (create_router(AppState::new(store)), dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn create_expense(app: &Router, amount: &str, description: &str, category: &str, date: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/expenses",
            &json!({
                "amount": amount,
                "description": description,
                "category": category,
                "date": date
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let (app, _dir) = test_app();

    let response = app.oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_create_get_update_delete_flow() {
    let (app, _dir) = test_app();

    let created = create_expense(&app, "12.5", "Lunch", "Food", "2024-01-01").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["amount"], "12.5");
    assert_eq!(created["category"], "Food");
    assert_eq!(created["date"], "2024-01-01");

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/expenses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["description"], "Lunch");

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/v1/expenses/{id}"),
            &json!({ "description": "Team lunch" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], "Team lunch");
    // Untouched fields survive the partial update.
    assert_eq!(updated["amount"], "12.5");
    assert_eq!(updated["created_at"], created["created_at"]);

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/v1/expenses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/expenses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_not_found_error_shape() {
    let (app, _dir) = test_app();

    let id = uuid::Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/expenses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "NOT_FOUND");

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/v1/expenses/{id}"),
            &json!({ "description": "x" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/v1/expenses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation_rejections() {
    let (app, _dir) = test_app();

    for payload in [
        json!({ "amount": "-5", "description": "x", "category": "Food", "date": "2024-01-01" }),
        json!({ "amount": "0", "description": "x", "category": "Food", "date": "2024-01-01" }),
        json!({ "amount": "abc", "description": "x", "category": "Food", "date": "2024-01-01" }),
        json!({ "amount": "5", "description": "x", "category": "Groceries", "date": "2024-01-01" }),
        json!({ "amount": "5", "description": "   ", "category": "Food", "date": "2024-01-01" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/expenses", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {payload}");
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_list_sorts_and_filters() {
    let (app, _dir) = test_app();

    create_expense(&app, "12.5", "Lunch", "Food", "2024-01-01").await;
    create_expense(&app, "2.75", "Bus", "Transportation", "2024-01-02").await;

    let response = app.clone().oneshot(get("/api/v1/expenses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let expenses = body["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 2);
    // Most recent expense date first.
    assert_eq!(expenses[0]["description"], "Bus");

    let response = app
        .clone()
        .oneshot(get("/api/v1/expenses?category=Food"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let expenses = body["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["description"], "Lunch");

    let response = app
        .clone()
        .oneshot(get("/api/v1/expenses?q=bus&from=2024-01-01"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["expenses"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get("/api/v1/expenses?category=Nonsense"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summary_shapes() {
    let (app, _dir) = test_app();

    let response = app.clone().oneshot(get("/api/v1/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], "0");
    assert_eq!(body["monthlyTotal"], "0");
    assert_eq!(body["categoryBreakdown"].as_object().unwrap().len(), 6);
    assert_eq!(body["topCategories"].as_array().unwrap().len(), 6);

    create_expense(&app, "100", "Groceries", "Food", "2024-01-01").await;
    create_expense(&app, "50", "Electricity", "Bills", "2024-01-02").await;

    let response = app.clone().oneshot(get("/api/v1/summary")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], "150");
    assert_eq!(body["categoryBreakdown"]["Food"], "100");
    assert_eq!(body["categoryBreakdown"]["Bills"], "50");
    let top = body["topCategories"].as_array().unwrap();
    assert_eq!(top[0]["category"], "Food");
    assert_eq!(top[0]["percentage"], "66.67");
    assert_eq!(top[1]["category"], "Bills");
    assert_eq!(top[1]["percentage"], "33.33");
}

#[tokio::test]
async fn test_export_csv() {
    let (app, _dir) = test_app();

    let response = app.clone().oneshot(get("/api/v1/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "");

    create_expense(&app, "12.5", "Lunch", "Food", "2024-01-01").await;
    create_expense(&app, "2.75", "Bus", "Transportation", "2024-01-02").await;

    let response = app.clone().oneshot(get("/api/v1/export")).await.unwrap();
    assert_eq!(
        body_text(response).await,
        "\"Date\",\"Description\",\"Category\",\"Amount\"\n\
         \"2024-01-01\",\"Lunch\",\"Food\",\"12.5\"\n\
         \"2024-01-02\",\"Bus\",\"Transportation\",\"2.75\""
    );
}

#[tokio::test]
async fn test_clear_all() {
    let (app, _dir) = test_app();

    create_expense(&app, "5", "a", "Other", "2024-01-01").await;
    create_expense(&app, "6", "b", "Other", "2024-01-02").await;

    let response = app
        .clone()
        .oneshot(request("DELETE", "/api/v1/expenses"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/api/v1/expenses")).await.unwrap();
    let body = body_json(response).await;
    assert!(body["expenses"].as_array().unwrap().is_empty());
}
