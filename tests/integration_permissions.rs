mod common;

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, ETAG, IF_NONE_MATCH};
use axum::http::{Request, StatusCode};
use common::{get, into_json, setup_test_app, setup_test_app_with};
use eventdesk::router::init_router;
use eventdesk::state::AppState;
use eventdesk_access::{PermissionCatalog, PermissionRegistry, Position, Section};
use eventdesk_config::CorsConfig;
use tower::ServiceExt;

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();
    let (status, body) = into_json(get(app, "/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(
        body["registry_fingerprint"],
        PermissionRegistry::builtin().fingerprint()
    );
}

#[tokio::test]
async fn test_get_registry() {
    let app = setup_test_app();
    let response = get(app, "/api/permissions/registry").await;

    let fingerprint = PermissionRegistry::builtin().fingerprint().to_string();
    assert_eq!(response.headers()[ETAG], format!("\"{fingerprint}\"").as_str());
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=300");

    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fingerprint"], fingerprint);
    assert_eq!(body["positions"][0]["name"], "dashboard");

    let sections: Vec<&str> = body["positions"][0]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(sections, vec!["eventi", "biglietti", "utenti", "ruoli"]);
}

#[tokio::test]
async fn test_get_registry_not_modified() {
    let app = setup_test_app();
    let fingerprint = PermissionRegistry::builtin().fingerprint().to_string();

    let request = Request::builder()
        .method("GET")
        .uri("/api/permissions/registry")
        .header(IF_NONE_MATCH, format!("\"{fingerprint}\""))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(response.headers()[ETAG], format!("\"{fingerprint}\"").as_str());
}

#[tokio::test]
async fn test_get_registry_stale_etag_returns_body() {
    let app = setup_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/permissions/registry")
        .header(IF_NONE_MATCH, "\"stale\"")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_custom_registry_is_served() {
    let registry = PermissionRegistry::new(vec![
        Position::new("dashboard", vec![Section::new("eventi", ["events.view_all"])]),
        Position::new("sidebar", vec![Section::new("report", ["reports.view"])]),
    ])
    .unwrap();
    let fingerprint = registry.fingerprint().to_string();

    let app = setup_test_app_with(registry);
    let (status, body) = into_json(get(app, "/api/permissions/registry").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fingerprint"], fingerprint);
    assert_eq!(body["positions"][1]["sections"][0]["permissions"][0], "reports.view");
}

#[tokio::test]
async fn test_get_catalog() {
    let app = setup_test_app();
    let response = get(app, "/api/permissions/catalog").await;
    assert!(response.headers().contains_key(ETAG));

    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permissions"].as_array().unwrap().len(), 15);
    assert_eq!(
        body["categories"],
        serde_json::json!(["Eventi", "Ruoli", "Utenti", "Biglietti"])
    );
}

#[tokio::test]
async fn test_get_catalog_filtered() {
    let app = setup_test_app();
    let (status, body) = into_json(get(app, "/api/permissions/catalog?category=utenti").await).await;

    assert_eq!(status, StatusCode::OK);
    let permissions = body["permissions"].as_array().unwrap();
    assert_eq!(permissions.len(), 2);
    assert_eq!(permissions[0]["codename"], "users.view");
    assert_eq!(permissions[1]["name"], "Assegna Ruoli");
}

#[tokio::test]
async fn test_get_catalog_unknown_category_is_empty() {
    let app = setup_test_app();
    let (status, body) = into_json(get(app, "/api/permissions/catalog?category=Report").await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["permissions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_default_roles() {
    let app = setup_test_app();
    let (status, body) = into_json(get(app, "/api/permissions/roles").await).await;

    assert_eq!(status, StatusCode::OK);
    let roles = body["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);

    assert_eq!(roles[0]["name"], "Super Admin");
    assert_eq!(roles[0]["is_deletable"], false);
    assert_eq!(roles[0]["permissions"].as_array().unwrap().len(), 15);

    assert_eq!(roles[1]["name"], "Base");
    assert_eq!(
        roles[1]["permissions"],
        serde_json::json!([
            "events.view_own",
            "events.create",
            "events.edit_own",
            "events.delete_own"
        ])
    );
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = setup_test_app();
    let (status, body) = into_json(get(app, "/api-docs/openapi.json").await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/access/check"].is_object());
    assert!(body["paths"]["/api/permissions/registry"].is_object());
}

#[tokio::test]
async fn test_wildcard_allowed_origin_does_not_break_startup() {
    let mut state = AppState::new(PermissionRegistry::builtin(), PermissionCatalog::builtin());
    state.cors_config =
        CorsConfig::from_lookup(|key| (key == "ALLOWED_ORIGINS").then(|| "*".to_string()));

    let app = init_router(state);
    let (status, body) = into_json(get(app, "/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
