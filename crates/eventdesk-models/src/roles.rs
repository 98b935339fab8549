//! Role and permission catalog models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One grantable permission with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionEntry {
    /// Codename, e.g. `events.create`.
    pub codename: String,
    /// Display name shown in the role editor.
    pub name: String,
    /// Category the permission is grouped under.
    pub category: String,
}

/// A role with the codenames it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub name: String,
    pub description: String,
    /// System roles cannot be deleted from the role editor.
    pub is_deletable: bool,
    pub permissions: Vec<String>,
}

/// The part of a role that role-management rules depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleRef {
    #[serde(default)]
    pub name: String,
    /// Missing means not deletable.
    #[serde(default)]
    pub is_deletable: bool,
}
