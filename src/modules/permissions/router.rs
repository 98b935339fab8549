use axum::{Router, middleware, routing::get};

use crate::middleware::http_cache::{CacheControlConfig, cache_control, etag_middleware};
use crate::state::AppState;

use super::controller::{get_catalog, get_default_roles, get_registry};

pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/registry", get(get_registry))
        .route("/catalog", get(get_catalog))
        .route("/roles", get(get_default_roles))
        .layer(middleware::from_fn(etag_middleware))
        .layer(cache_control(CacheControlConfig::public(300)))
}
