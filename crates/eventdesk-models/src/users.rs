//! The user profile consumed by the permission evaluator.

use std::collections::BTreeSet;

use eventdesk_core::serde::{
    deserialize_lenient_option, deserialize_lenient_string_set, deserialize_strict_true,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::UserId;

/// User profile as returned by the backend's profile endpoint.
///
/// Only `all_permissions` and `is_super_admin` drive access decisions; `id`
/// is needed for ownership rules. Every field is optional on the wire and a
/// missing or malformed value degrades to "no access": an empty permission
/// set, `is_super_admin == false`, no id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub email: Option<String>,
    /// Every permission codename granted through the user's roles.
    #[serde(default, deserialize_with = "deserialize_lenient_string_set")]
    #[schema(value_type = Vec<String>, example = json!(["events.view_own", "events.create"]))]
    pub all_permissions: BTreeSet<String>,
    #[serde(default, deserialize_with = "deserialize_strict_true")]
    pub is_super_admin: bool,
}

impl UserProfile {
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            all_permissions: permissions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn super_admin() -> Self {
        Self {
            is_super_admin: true,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Plain membership test, without the super-admin bypass.
    pub fn holds(&self, codename: &str) -> bool {
        self.all_permissions.contains(codename)
    }

    /// Parses a profile from arbitrary JSON.
    ///
    /// Anything that is not a JSON object (including `null`) means "no user".
    pub fn from_json_value(value: serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}
