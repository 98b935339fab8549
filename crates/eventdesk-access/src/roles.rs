//! Default roles and the rules of the role editor.

use eventdesk_core::permissions;
use eventdesk_models::{Role, RoleAccess, RoleRef, UserProfile};

use crate::catalog::PermissionCatalog;
use crate::evaluator::has_permission;

pub const SUPER_ADMIN_ROLE: &str = "Super Admin";
pub const BASE_ROLE: &str = "Base";

/// Codenames granted to every new user.
pub const BASE_PERMISSIONS: &[&str] = &[
    permissions::EVENTS_VIEW_OWN,
    permissions::EVENTS_CREATE,
    permissions::EVENTS_EDIT_OWN,
    permissions::EVENTS_DELETE_OWN,
];

/// The system roles seeded by the backend. Neither can be deleted.
pub fn default_roles(catalog: &PermissionCatalog) -> Vec<Role> {
    vec![
        Role {
            name: SUPER_ADMIN_ROLE.to_string(),
            description: "Accesso completo a tutto il sistema".to_string(),
            is_deletable: false,
            permissions: catalog.codenames().map(str::to_string).collect(),
        },
        Role {
            name: BASE_ROLE.to_string(),
            description: "Permessi base per nuovi utenti".to_string(),
            is_deletable: false,
            permissions: BASE_PERMISSIONS.iter().map(|c| c.to_string()).collect(),
        },
    ]
}

pub fn can_view_roles(user: Option<&UserProfile>) -> bool {
    has_permission(user, permissions::ROLES_VIEW)
}

pub fn can_create_role(user: Option<&UserProfile>) -> bool {
    has_permission(user, permissions::ROLES_CREATE)
}

pub fn can_edit_role(user: Option<&UserProfile>) -> bool {
    has_permission(user, permissions::ROLES_EDIT)
}

/// System roles stay even for super-admins.
pub fn can_delete_role(user: Option<&UserProfile>, role: &RoleRef) -> bool {
    role.is_deletable && has_permission(user, permissions::ROLES_DELETE)
}

/// System roles keep their name.
pub fn can_rename_role(user: Option<&UserProfile>, role: &RoleRef) -> bool {
    role.is_deletable && can_edit_role(user)
}

pub fn can_assign_roles(user: Option<&UserProfile>) -> bool {
    has_permission(user, permissions::USERS_ASSIGN_ROLES)
}

fn is_super_admin(user: Option<&UserProfile>) -> bool {
    user.is_some_and(|profile| profile.is_super_admin)
}

/// Only super-admins hand out or take away the `Super Admin` role.
pub fn can_assign_role(user: Option<&UserProfile>, role: &RoleRef) -> bool {
    if role.name == SUPER_ADMIN_ROLE && !is_super_admin(user) {
        return false;
    }
    can_assign_roles(user)
}

/// The role set stored when `user` submits `requested` for someone holding
/// `current`.
///
/// Callers without super-admin rights cannot change whether the target holds
/// `Super Admin`: a new grant is dropped and a revoke is undone. Everything
/// else passes through in request order.
pub fn effective_role_assignment(
    user: Option<&UserProfile>,
    current: &[String],
    requested: &[String],
) -> Vec<String> {
    if is_super_admin(user) {
        return requested.to_vec();
    }

    let holds_now = current.iter().any(|name| name == SUPER_ADMIN_ROLE);
    let mut roles: Vec<String> = requested
        .iter()
        .filter(|name| holds_now || name.as_str() != SUPER_ADMIN_ROLE)
        .cloned()
        .collect();

    if holds_now && !roles.iter().any(|name| name == SUPER_ADMIN_ROLE) {
        roles.push(SUPER_ADMIN_ROLE.to_string());
    }
    roles
}

pub fn role_access(user: Option<&UserProfile>, role: &RoleRef) -> RoleAccess {
    RoleAccess {
        can_view: can_view_roles(user),
        can_create: can_create_role(user),
        can_edit: can_edit_role(user),
        can_delete: can_delete_role(user, role),
        can_rename: can_rename_role(user, role),
        can_assign: can_assign_roles(user),
        can_grant: can_assign_role(user, role),
    }
}
