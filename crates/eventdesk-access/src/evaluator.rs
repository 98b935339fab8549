//! Permission evaluation against a registry.
//!
//! Every answer is a plain `bool`. An absent user, an unknown section or an
//! unknown position all mean "no access"; nothing here returns an error.
//! Super-admins are granted everything, including names the registry does not
//! declare.

use eventdesk_models::{
    AccessManifest, AccessTarget, AccessTargetKind, PositionAccess, SectionAccess, UserProfile,
};

use crate::registry::PermissionRegistry;

/// Whether `user` holds `codename`.
pub fn has_permission(user: Option<&UserProfile>, codename: &str) -> bool {
    match user {
        None => false,
        Some(user) if user.is_super_admin => true,
        Some(user) => user.holds(codename),
    }
}

/// Whether `user` holds at least one of `codenames`.
pub fn has_any_permission(user: Option<&UserProfile>, codenames: &[&str]) -> bool {
    codenames.iter().any(|c| has_permission(user, c))
}

/// Evaluates section and position visibility for one registry.
///
/// ```ignore
/// let registry = PermissionRegistry::builtin();
/// let evaluator = Evaluator::new(&registry);
///
/// if evaluator.can_access_section(Some(&user), "eventi") {
///     // render the events tab
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a PermissionRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a PermissionRegistry) -> Self {
        Self { registry }
    }

    pub fn has_permission(&self, user: Option<&UserProfile>, codename: &str) -> bool {
        has_permission(user, codename)
    }

    /// True iff the user holds any codename of the section.
    pub fn can_access_section(&self, user: Option<&UserProfile>, section: &str) -> bool {
        let Some(profile) = user else {
            return false;
        };
        if profile.is_super_admin {
            return true;
        }

        self.registry.section(section).is_some_and(|s| {
            s.permissions
                .iter()
                .any(|codename| has_permission(user, codename))
        })
    }

    /// True iff at least one section of the position is accessible.
    pub fn can_access_position(&self, user: Option<&UserProfile>, position: &str) -> bool {
        let Some(profile) = user else {
            return false;
        };
        if profile.is_super_admin {
            return true;
        }

        self.registry.position(position).is_some_and(|p| {
            p.sections
                .iter()
                .any(|s| self.can_access_section(user, &s.name))
        })
    }

    pub fn check(&self, user: Option<&UserProfile>, target: &AccessTarget) -> bool {
        match target.kind {
            AccessTargetKind::Permission => self.has_permission(user, &target.name),
            AccessTargetKind::Section => self.can_access_section(user, &target.name),
            AccessTargetKind::Position => self.can_access_position(user, &target.name),
        }
    }

    /// Visibility of every position and section, in registry order.
    pub fn manifest(&self, user: Option<&UserProfile>) -> AccessManifest {
        let positions = self
            .registry
            .positions()
            .iter()
            .map(|position| {
                let sections: Vec<SectionAccess> = position
                    .sections
                    .iter()
                    .map(|section| SectionAccess {
                        name: section.name.clone(),
                        allowed: self.can_access_section(user, &section.name),
                    })
                    .collect();

                PositionAccess {
                    name: position.name.clone(),
                    allowed: self.can_access_position(user, &position.name),
                    sections,
                }
            })
            .collect();

        AccessManifest { positions }
    }
}
