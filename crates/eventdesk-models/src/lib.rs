//! # EventDesk Models
//!
//! Domain models and DTOs for EventDesk.
//!
//! - [`access`]: Access-decision requests and responses
//! - [`events`]: The slice of an event that ownership rules look at
//! - [`ids`]: Strongly-typed backend identifiers
//! - [`roles`]: Role and permission catalog models
//! - [`users`]: The user profile consumed by the evaluator
//!
//! # Example
//!
//! ```ignore
//! use eventdesk_models::users::UserProfile;
//!
//! let user: UserProfile = serde_json::from_str(
//!     r#"{"all_permissions": ["events.create"], "is_super_admin": false}"#,
//! )?;
//! assert!(user.holds("events.create"));
//! ```

pub mod access;
pub mod events;
pub mod ids;
pub mod roles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use access::{
    AccessManifest, AccessTarget, AccessTargetKind, CheckAccessRequest, CheckAccessResponse,
    EventAccess, EventAccessRequest, ListingScope, ManifestRequest, PositionAccess, RoleAccess,
    RoleAccessRequest, RoleAssignment, RoleAssignmentRequest, SectionAccess,
};
pub use events::EventRef;
pub use ids::{EventId, UserId};
pub use roles::{PermissionEntry, Role, RoleRef};
pub use users::UserProfile;
