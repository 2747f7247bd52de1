use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use promptchart::catalog::{DatasetCatalog, InMemoryCatalog};
use promptchart::intent::{IntentSource, OpenAiConfig, OpenAiIntentSource, StaticIntentSource};
use promptchart::model::{ChartIntent, Dimension, Metric};
use promptchart::resolver::IntentResolver;
use promptchart::web::{router, AppState, ErrorResponse};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(source: Arc<dyn IntentSource>) -> Router {
    let catalog: Arc<dyn DatasetCatalog> = Arc::new(InMemoryCatalog::sample().unwrap());
    router(Arc::new(AppState::new(IntentResolver::new(source, catalog))))
}

fn app() -> Router {
    let intent = ChartIntent::new("sales", "line")
        .with_metric(Metric::new("amount", "sum"))
        .with_dimension(Dimension::new("month"));
    app_with(Arc::new(StaticIntentSource::new(intent)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_chart_from_prompt() {
    let (status, body) = send(app(), post_json("/api/chart", r#"{"prompt": "sales per month"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chartSpec"]["type"], "line");
    assert_eq!(body["chartSpec"]["title"], "sum(amount) by month");
    assert_eq!(body["data"]["labels"], serde_json::json!(["Jan", "Feb", "Mar"]));
    assert_eq!(
        body["data"]["datasets"][0]["data"],
        serde_json::json!([83000.0, 93000.0, 92000.0])
    );
    assert_eq!(body["metadata"]["recordCount"], 3);
}

#[tokio::test]
async fn test_missing_prompt_is_invalid_request() {
    let (status, body) = send(app(), post_json("/api/chart", r#"{"context": {}}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, "INVALID_REQUEST");
    assert_eq!(error.error, "Missing or invalid prompt");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_request() {
    let (status, body) = send(app(), post_json("/api/chart", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_source_failure_is_internal_error() {
    let source = Arc::new(OpenAiIntentSource::new(OpenAiConfig::default()));

    let (status, body) = send(app_with(source), post_json("/api/chart", r#"{"prompt": "sales"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_invalid_generated_intent() {
    let source = Arc::new(StaticIntentSource::new(ChartIntent::new("sales", "bar")));

    let (status, body) = send(app_with(source), post_json("/api/chart", r#"{"prompt": "sales"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INTENT");
}

#[tokio::test]
async fn test_structured_intent_endpoint() {
    let intent = r#"{
        "dataset": "orders",
        "metrics": [{"field": "amount", "aggregation": "sum"}],
        "dimensions": [{"field": "status"}],
        "chartType": "doughnut"
    }"#;

    let (status, body) = send(app(), post_json("/api/chart/intent", intent)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["labels"], serde_json::json!(["completed", "pending"]));
    assert_eq!(
        body["data"]["datasets"][0]["data"],
        serde_json::json!([415000.0, 8500.0])
    );
    assert!(body["data"]["datasets"][0]["backgroundColor"].is_array());
    assert_eq!(body["chartSpec"]["legend"]["display"], true);
}

#[tokio::test]
async fn test_list_datasets() {
    let request = Request::builder()
        .uri("/api/datasets")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["sales", "users", "products", "orders", "inventory"]);
}
