//! Integration tests for the consultation API.

use std::sync::{Arc, OnceLock};

use api::routes::consultations::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusHandle;
use registry::InMemoryConsultationStore;
use serde_json::{Value, json};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    setup_with_state().0
}

fn setup_with_state() -> (axum::Router, Arc<AppState<InMemoryConsultationStore>>) {
    let state = api::create_default_state();
    let app = api::create_app(state.clone(), get_metrics_handle());
    (app, state)
}

fn consultation(id: i64) -> Value {
    json!({
        "id": id,
        "doctor_name": "Dr. A",
        "patient_name": "P",
        "appointment_time": "10:00",
        "appointment_date": "2024-01-01"
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok", "service": "api" }));
}

#[tokio::test]
async fn test_list_empty() {
    let app = setup();

    let response = app
        .oneshot(empty_request("GET", "/consultations"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_echoes_record_with_null_description() {
    let app = setup();

    let response = app
        .oneshot(json_request("POST", "/consultations", &consultation(1)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let mut expected = consultation(1);
    expected["description"] = Value::Null;
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = setup();

    let create = app
        .clone()
        .oneshot(json_request("POST", "/consultations", &consultation(1)))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::OK);
    let created = body_json(create).await;

    let get = app
        .clone()
        .oneshot(empty_request("GET", "/consultations/1"))
        .await
        .unwrap();
    assert_eq!(get.status(), StatusCode::OK);
    assert_eq!(body_json(get).await, created);

    let mut follow_up = consultation(1);
    follow_up["description"] = json!("follow-up");
    let update = app
        .clone()
        .oneshot(json_request("PUT", "/consultations/1", &follow_up))
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::OK);
    assert_eq!(body_json(update).await, follow_up);

    let delete = app
        .clone()
        .oneshot(empty_request("DELETE", "/consultations/1"))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::OK);
    assert_eq!(
        body_json(delete).await,
        json!({ "message": "Consultation schedule deleted" })
    );

    let missing = app
        .oneshot(empty_request("GET", "/consultations/1"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(missing).await,
        json!({ "detail": "Consultation schedule not found" })
    );
}

#[tokio::test]
async fn test_create_duplicate_returns_400() {
    let (app, state) = setup_with_state();

    let first = app
        .clone()
        .oneshot(json_request("POST", "/consultations", &consultation(5)))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(json_request("POST", "/consultations", &consultation(5)))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(second).await["detail"],
        "Consultation schedule with this ID already exists"
    );

    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn test_list_returns_insertion_order() {
    let app = setup();

    for id in [2, 1] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/consultations", &consultation(id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(empty_request("GET", "/consultations"))
        .await
        .unwrap();
    let list = body_json(response).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_update_missing_returns_404_and_leaves_registry() {
    let (app, state) = setup_with_state();

    app.clone()
        .oneshot(json_request("POST", "/consultations", &consultation(1)))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PUT", "/consultations/2", &consultation(2)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn test_update_can_rewrite_id() {
    let app = setup();

    app.clone()
        .oneshot(json_request("POST", "/consultations", &consultation(1)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/consultations/1", &consultation(9)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let old = app
        .clone()
        .oneshot(empty_request("GET", "/consultations/1"))
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::NOT_FOUND);

    let new = app
        .oneshot(empty_request("GET", "/consultations/9"))
        .await
        .unwrap();
    assert_eq!(new.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_missing_returns_404() {
    let app = setup();

    let response = app
        .oneshot(empty_request("DELETE", "/consultations/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_path_is_rejected() {
    let app = setup();

    let response = app
        .oneshot(empty_request("GET", "/consultations/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_missing_field_is_rejected_without_insert() {
    let (app, state) = setup_with_state();

    let response = app
        .oneshot(json_request(
            "POST",
            "/consultations",
            &json!({ "id": 1, "doctor_name": "Dr. A" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_create_coerces_string_id() {
    let app = setup();

    let mut body = consultation(5);
    body["id"] = json!("5");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/consultations", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 5);

    let fetched = app
        .oneshot(empty_request("GET", "/consultations/5"))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint_reports_registry_operations() {
    let app = setup();

    app.clone()
        .oneshot(json_request("POST", "/consultations", &consultation(1)))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("consultations_operations_total"));
}
