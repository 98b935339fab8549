use utoipa::OpenApi;

use eventdesk_access::{Position, Section};
use eventdesk_models::{
    AccessManifest, AccessTarget, AccessTargetKind, CheckAccessRequest, CheckAccessResponse,
    EventAccess, EventAccessRequest, EventId, EventRef, ListingScope, ManifestRequest,
    PermissionEntry, PositionAccess, Role, RoleAccess, RoleAccessRequest, RoleAssignment,
    RoleAssignmentRequest, RoleRef, SectionAccess, UserId, UserProfile,
};

use crate::modules::permissions::model::{
    CatalogFilterParams, CatalogResponse, DefaultRolesResponse, RegistryResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::permissions::controller::get_registry,
        crate::modules::permissions::controller::get_catalog,
        crate::modules::permissions::controller::get_default_roles,
        crate::modules::access::controller::check_access,
        crate::modules::access::controller::get_manifest,
        crate::modules::access::controller::evaluate_event,
        crate::modules::access::controller::evaluate_role,
        crate::modules::access::controller::resolve_role_assignment,
    ),
    components(
        schemas(
            Position,
            Section,
            RegistryResponse,
            CatalogFilterParams,
            CatalogResponse,
            DefaultRolesResponse,
            PermissionEntry,
            Role,
            RoleRef,
            UserId,
            EventId,
            UserProfile,
            EventRef,
            AccessTargetKind,
            AccessTarget,
            CheckAccessRequest,
            CheckAccessResponse,
            ManifestRequest,
            SectionAccess,
            PositionAccess,
            AccessManifest,
            ListingScope,
            EventAccessRequest,
            EventAccess,
            RoleAccessRequest,
            RoleAccess,
            RoleAssignmentRequest,
            RoleAssignment,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Permissions", description = "Permission registry, catalog and default roles"),
        (name = "Access", description = "Access decisions for a user profile")
    ),
    info(
        title = "EventDesk Permissions API",
        version = "0.1.0",
        description = "Declarative permission registry and access evaluator for the EventDesk back-office.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
