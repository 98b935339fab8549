use eventdesk_access::Position;
use eventdesk_models::{PermissionEntry, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistryResponse {
    /// Changes whenever the registry contents change.
    pub fingerprint: String,
    pub positions: Vec<Position>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CatalogFilterParams {
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub categories: Vec<String>,
    pub permissions: Vec<PermissionEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DefaultRolesResponse {
    pub roles: Vec<Role>,
}
