use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use eventdesk::router::init_router;
use eventdesk::state::AppState;
use eventdesk_access::{PermissionCatalog, PermissionRegistry};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Codenames granted to the seeded `Base` role.
#[allow(dead_code)]
pub const BASE_PERMISSIONS: &[&str] = &[
    "events.view_own",
    "events.create",
    "events.edit_own",
    "events.delete_own",
];

pub fn setup_test_app() -> axum::Router {
    setup_test_app_with(PermissionRegistry::builtin())
}

#[allow(dead_code)]
pub fn setup_test_app_with(registry: PermissionRegistry) -> axum::Router {
    let state = AppState::new(registry, PermissionCatalog::builtin());
    init_router(state)
}

#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    into_json(response).await
}

#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn into_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response is not JSON. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}
