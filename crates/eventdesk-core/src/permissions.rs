//! Permission codename constants for EventDesk.
//!
//! Codenames follow the `resource.action` shape used by the backend. They are
//! opaque tokens: nothing in the workspace parses them beyond string equality.
//!
//! # Example
//!
//! ```ignore
//! use eventdesk_core::permissions;
//!
//! if evaluator.has_permission(Some(&user), permissions::EVENTS_CREATE) {
//!     // Show the "new event" button
//! }
//! ```

// =============================================================================
// Events permissions
// =============================================================================

/// Permission to view events organized by the user
pub const EVENTS_VIEW_OWN: &str = "events.view_own";
/// Permission to view every event
pub const EVENTS_VIEW_ALL: &str = "events.view_all";
/// Permission to create events
pub const EVENTS_CREATE: &str = "events.create";
/// Permission to edit events organized by the user
pub const EVENTS_EDIT_OWN: &str = "events.edit_own";
/// Permission to edit every event
pub const EVENTS_EDIT_ALL: &str = "events.edit_all";
/// Permission to delete events organized by the user
pub const EVENTS_DELETE_OWN: &str = "events.delete_own";
/// Permission to delete every event
pub const EVENTS_DELETE_ALL: &str = "events.delete_all";

// =============================================================================
// Tickets permissions
// =============================================================================

/// Permission to manage issued tickets and check-in
pub const TICKETS_MANAGE: &str = "tickets.manage";
/// Permission to purchase tickets
pub const TICKETS_PURCHASE: &str = "tickets.purchase";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to list users
pub const USERS_VIEW: &str = "users.view";
/// Permission to assign roles to users
pub const USERS_ASSIGN_ROLES: &str = "users.assign_roles";

// =============================================================================
// Roles permissions
// =============================================================================

/// Permission to list roles
pub const ROLES_VIEW: &str = "roles.view";
/// Permission to create roles
pub const ROLES_CREATE: &str = "roles.create";
/// Permission to edit roles
pub const ROLES_EDIT: &str = "roles.edit";
/// Permission to delete roles
pub const ROLES_DELETE: &str = "roles.delete";
