use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderValue, header::ETAG},
    response::{IntoResponse, Response},
};
use eventdesk_core::AppError;

use crate::middleware::http_cache::quote_etag;
use crate::state::AppState;

use super::model::{CatalogFilterParams, CatalogResponse, DefaultRolesResponse, RegistryResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions/registry",
    params(
        ("If-None-Match" = Option<String>, Header, description = "Registry fingerprint from a previous response")
    ),
    responses(
        (status = 200, description = "Positions, sections and the codenames that unlock them", body = RegistryResponse),
        (status = 304, description = "Registry unchanged")
    ),
    tag = "Permissions"
)]
pub async fn get_registry(State(state): State<AppState>) -> Result<Response, AppError> {
    let registry = service::get_registry(&state.registry);
    let etag = HeaderValue::from_str(&quote_etag(&registry.fingerprint))
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid registry fingerprint: {e}")))?;

    let mut response = Json(registry).into_response();
    response.headers_mut().insert(ETAG, etag);
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/permissions/catalog",
    params(
        ("category" = Option<String>, Query, description = "Filter by permission category")
    ),
    responses(
        (status = 200, description = "Grantable permissions", body = CatalogResponse)
    ),
    tag = "Permissions"
)]
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogFilterParams>,
) -> Result<Json<CatalogResponse>, AppError> {
    Ok(Json(service::get_catalog(&state.catalog, params)))
}

#[utoipa::path(
    get,
    path = "/api/permissions/roles",
    responses(
        (status = 200, description = "Default system roles", body = DefaultRolesResponse)
    ),
    tag = "Permissions"
)]
pub async fn get_default_roles(
    State(state): State<AppState>,
) -> Result<Json<DefaultRolesResponse>, AppError> {
    Ok(Json(service::get_default_roles(&state.catalog)))
}
