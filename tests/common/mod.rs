use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use edudesk::router::init_router;
use edudesk::state::AppState;
use edudesk_access::AccessControl;
use edudesk_config::CorsConfig;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn setup_test_app() -> Router {
    let state = AppState {
        access: AccessControl::builtin().unwrap(),
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

/// Sends a GET, optionally as `role`, and returns status plus parsed JSON body.
pub async fn get_json(uri: &str, role: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(role) = role {
        builder = builder.header("x-user-role", role);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = setup_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse response. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    (status, body)
}
