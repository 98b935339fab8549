use axum::{Json, extract::State};
use eventdesk_core::AppError;
use eventdesk_models::{
    AccessManifest, CheckAccessRequest, CheckAccessResponse, EventAccess, EventAccessRequest,
    ManifestRequest, RoleAccess, RoleAccessRequest, RoleAssignment, RoleAssignmentRequest,
};

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service;

#[utoipa::path(
    post,
    path = "/api/access/check",
    request_body = CheckAccessRequest,
    responses(
        (status = 200, description = "Whether the user may use the permission, section or position", body = CheckAccessResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Invalid target name")
    ),
    tag = "Access"
)]
pub async fn check_access(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CheckAccessRequest>,
) -> Result<Json<CheckAccessResponse>, AppError> {
    let result = service::check_access(&state.registry, payload.user.as_ref(), &payload.target);
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/access/manifest",
    request_body = ManifestRequest,
    responses(
        (status = 200, description = "Visibility of every position and section", body = AccessManifest),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Access"
)]
pub async fn get_manifest(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ManifestRequest>,
) -> Result<Json<AccessManifest>, AppError> {
    let manifest = service::build_manifest(&state.registry, payload.user.as_ref());
    Ok(Json(manifest))
}

#[utoipa::path(
    post,
    path = "/api/access/events",
    request_body = EventAccessRequest,
    responses(
        (status = 200, description = "What the user may do with the event", body = EventAccess),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Access"
)]
pub async fn evaluate_event(
    ValidatedJson(payload): ValidatedJson<EventAccessRequest>,
) -> Result<Json<EventAccess>, AppError> {
    let access = service::evaluate_event(payload.user.as_ref(), &payload.event);
    Ok(Json(access))
}

#[utoipa::path(
    post,
    path = "/api/access/roles",
    request_body = RoleAccessRequest,
    responses(
        (status = 200, description = "What the user may do in the role editor", body = RoleAccess),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Access"
)]
pub async fn evaluate_role(
    ValidatedJson(payload): ValidatedJson<RoleAccessRequest>,
) -> Result<Json<RoleAccess>, AppError> {
    let access = service::evaluate_role(payload.user.as_ref(), &payload.role);
    Ok(Json(access))
}

#[utoipa::path(
    post,
    path = "/api/access/roles/assignment",
    request_body = RoleAssignmentRequest,
    responses(
        (status = 200, description = "Role names that would be stored for the target user", body = RoleAssignment),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Access"
)]
pub async fn resolve_role_assignment(
    ValidatedJson(payload): ValidatedJson<RoleAssignmentRequest>,
) -> Result<Json<RoleAssignment>, AppError> {
    let assignment = service::resolve_role_assignment(
        payload.user.as_ref(),
        &payload.current_roles,
        &payload.requested_roles,
    );
    Ok(Json(assignment))
}
