//! Access-decision requests and responses.
//!
//! Requests carry the caller's cached user profile. A `user` that is missing,
//! `null` or not an object is treated as "no user" rather than rejected, so a
//! logged-out client simply gets `false` everywhere.

use eventdesk_core::serde::deserialize_object_or_none;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::events::EventRef;
use crate::roles::RoleRef;
use crate::users::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessTargetKind {
    Permission,
    Section,
    Position,
}

/// What the caller wants to know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct AccessTarget {
    pub kind: AccessTargetKind,
    /// Permission codename, section name or position name.
    #[validate(length(
        min = 1,
        max = 100,
        message = "Target name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckAccessRequest {
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub user: Option<UserProfile>,
    #[validate(nested)]
    pub target: AccessTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckAccessResponse {
    pub allowed: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ManifestRequest {
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SectionAccess {
    pub name: String,
    pub allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PositionAccess {
    pub name: String,
    pub allowed: bool,
    pub sections: Vec<SectionAccess>,
}

/// Visibility of every position and section, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccessManifest {
    pub positions: Vec<PositionAccess>,
}

impl AccessManifest {
    /// `None` when the registry has no such position.
    pub fn position(&self, name: &str) -> Option<bool> {
        self.positions
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.allowed)
    }

    /// `None` when the registry has no such section.
    pub fn section(&self, name: &str) -> Option<bool> {
        self.positions
            .iter()
            .flat_map(|p| p.sections.iter())
            .find(|s| s.name == name)
            .map(|s| s.allowed)
    }

    /// Names of the sections the user may see.
    pub fn visible_sections(&self) -> Vec<&str> {
        self.positions
            .iter()
            .flat_map(|p| p.sections.iter())
            .filter(|s| s.allowed)
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Which events a user's event list contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingScope {
    /// Every event.
    All,
    /// Only events the user organizes.
    Own,
    /// The event list is not available.
    Denied,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct EventAccessRequest {
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub event: EventRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventAccess {
    pub listing_scope: ListingScope,
    /// Whether the event list is reachable at all.
    pub can_list: bool,
    pub can_create: bool,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_purchase_tickets: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleAccessRequest {
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub user: Option<UserProfile>,
    pub role: RoleRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleAccess {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    /// System roles keep their name.
    pub can_rename: bool,
    /// May assign roles to users at all.
    pub can_assign: bool,
    /// May grant or revoke this particular role.
    pub can_grant: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RoleAssignmentRequest {
    #[serde(default, deserialize_with = "deserialize_object_or_none")]
    pub user: Option<UserProfile>,
    /// Role names the target user holds now.
    #[serde(default)]
    pub current_roles: Vec<String>,
    /// Role names the caller submitted.
    #[serde(default)]
    pub requested_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleAssignment {
    /// Role names that would actually be stored.
    pub roles: Vec<String>,
}
