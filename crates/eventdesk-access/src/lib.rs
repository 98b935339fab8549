//! # EventDesk Access
//!
//! Decides what a user may see and do in the EventDesk UI.
//!
//! - [`registry`]: The validated position → section → codename table
//! - [`evaluator`]: Permission, section and position checks against a registry
//! - [`ownership`]: Per-event rules (own vs. all, ticket purchase)
//! - [`roles`]: System roles and role-editor rules
//! - [`catalog`]: Every grantable permission with its label and category
//!
//! The registry is built once and handed to the evaluator by reference:
//!
//! ```ignore
//! use eventdesk_access::{Evaluator, PermissionRegistry};
//!
//! let registry = PermissionRegistry::builtin();
//! let evaluator = Evaluator::new(&registry);
//!
//! let show_roles_tab = evaluator.can_access_section(Some(&user), "ruoli");
//! let show_dashboard = evaluator.can_access_position(Some(&user), "dashboard");
//! ```

pub mod catalog;
pub mod evaluator;
pub mod ownership;
pub mod registry;
pub mod roles;

// Re-export commonly used types at crate root
pub use catalog::PermissionCatalog;
pub use evaluator::{Evaluator, has_any_permission, has_permission};
pub use ownership::event_access;
pub use registry::{PermissionRegistry, Position, RegistryError, Section};
pub use roles::{default_roles, effective_role_assignment, role_access};
