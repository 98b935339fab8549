use eventdesk_access::{
    Evaluator, PermissionRegistry, effective_role_assignment, event_access, role_access,
};
use eventdesk_models::{
    AccessManifest, AccessTarget, CheckAccessResponse, EventAccess, EventRef, RoleAccess,
    RoleAssignment, RoleRef, UserProfile,
};
use tracing::{debug, instrument};

#[instrument(skip(registry, user), fields(kind = ?target.kind, name = %target.name))]
pub fn check_access(
    registry: &PermissionRegistry,
    user: Option<&UserProfile>,
    target: &AccessTarget,
) -> CheckAccessResponse {
    let allowed = Evaluator::new(registry).check(user, target);
    if !allowed {
        debug!(has_user = user.is_some(), "Access denied");
    }
    CheckAccessResponse { allowed }
}

#[instrument(skip(registry, user))]
pub fn build_manifest(registry: &PermissionRegistry, user: Option<&UserProfile>) -> AccessManifest {
    let manifest = Evaluator::new(registry).manifest(user);
    debug!(
        visible_sections = manifest.visible_sections().len(),
        "Access manifest built"
    );
    manifest
}

#[instrument(skip(user), fields(event_id = ?event.id))]
pub fn evaluate_event(user: Option<&UserProfile>, event: &EventRef) -> EventAccess {
    event_access(user, event)
}

#[instrument(skip(user), fields(role = %role.name))]
pub fn evaluate_role(user: Option<&UserProfile>, role: &RoleRef) -> RoleAccess {
    role_access(user, role)
}

#[instrument(skip(user, current, requested))]
pub fn resolve_role_assignment(
    user: Option<&UserProfile>,
    current: &[String],
    requested: &[String],
) -> RoleAssignment {
    let roles = effective_role_assignment(user, current, requested);
    if roles.len() != requested.len() {
        debug!(
            requested = requested.len(),
            stored = roles.len(),
            "Role assignment adjusted"
        );
    }
    RoleAssignment { roles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_models::AccessTargetKind;

    #[test]
    fn test_check_access_is_idempotent() {
        let registry = PermissionRegistry::builtin();
        let user = UserProfile::with_permissions(["roles.view"]);
        let target = AccessTarget {
            kind: AccessTargetKind::Section,
            name: "ruoli".to_string(),
        };

        let first = check_access(&registry, Some(&user), &target);
        let second = check_access(&registry, Some(&user), &target);
        assert!(first.allowed);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_manifest_without_user() {
        let registry = PermissionRegistry::builtin();
        let manifest = build_manifest(&registry, None);
        assert_eq!(manifest.position("dashboard"), Some(false));
    }
}
