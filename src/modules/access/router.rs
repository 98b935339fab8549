use axum::{Router, routing::post};

use crate::middleware::http_cache::{CacheControlConfig, cache_control};
use crate::state::AppState;

use super::controller::{
    check_access, evaluate_event, evaluate_role, get_manifest, resolve_role_assignment,
};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/check", post(check_access))
        .route("/manifest", post(get_manifest))
        .route("/events", post(evaluate_event))
        .route("/roles", post(evaluate_role))
        .route("/roles/assignment", post(resolve_role_assignment))
        .layer(cache_control(CacheControlConfig::no_store()))
}
