use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use customer_contacts::{
    build_router,
    state::{AppState, PagingDefaults},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_app() -> Router {
    build_router(AppState::with_in_memory_store(PagingDefaults {
        page: 0,
        items_per_page: 10,
    }))
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request must succeed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body must be json")
    };
    (status, value)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn assert_failure(body: &Value, reason_contains: &str) {
    let reason = body
        .get("reason")
        .and_then(Value::as_str)
        .expect("failure body must carry a reason");
    assert!(
        reason.contains(reason_contains),
        "reason {reason:?} must contain {reason_contains:?}"
    );
    assert!(
        body.get("stackDepth").and_then(Value::as_u64).is_some(),
        "failure body must carry stackDepth"
    );
}
