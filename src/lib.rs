//! # EventDesk Permissions API
//!
//! Declarative permission registry and access evaluator for the EventDesk
//! back-office, served over HTTP with Axum.
//!
//! ## Overview
//!
//! The back-office is organised into **positions** (layout areas such as the
//! dashboard) that contain **sections** (navigable areas such as events or
//! roles). The registry declares which permission codenames unlock each
//! section. Given a user profile, the evaluator answers:
//!
//! - **Permission checks**: does the user hold `events.create`?
//! - **Section checks**: does the user hold any codename the section requires?
//! - **Position checks**: can the user see at least one section in the position?
//! - **Ownership rules**: `*_own` versus `*_all` event permissions
//! - **Role rules**: which roles the user may create, edit, delete or assign
//!
//! Super-admins pass every check except deleting a non-deletable role.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── eventdesk-core/          # AppError, codename constants, lenient serde helpers
//! ├── eventdesk-config/        # Server, CORS and registry configuration
//! ├── eventdesk-models/        # User profiles, events, roles, access DTOs
//! ├── eventdesk-access/        # Registry, evaluator, ownership and role rules
//! ├── eventdesk-observability/ # tracing subscriber setup
//! └── eventdesk-cli/           # Registry inspection CLI
//! src/
//! ├── middleware/   # HTTP caching (Cache-Control, ETag)
//! └── modules/
//!     ├── permissions/ # Registry, catalog and default roles
//!     └── access/      # Access decisions for a posted user profile
//! ```
//!
//! Each feature module follows the same layout: `controller.rs`, `service.rs`,
//! `router.rs` and, where it has its own DTOs, `model.rs`.
//!
//! ## Quick Start
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! PERMISSIONS_REGISTRY_PATH=./registry.json   # optional, built-in registry otherwise
//! ALLOWED_ORIGINS=http://localhost:5173
//! RUST_LOG=eventdesk=debug,tower_http=debug
//! ```
//!
//! API documentation is served at `/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use eventdesk_access;
pub use eventdesk_config;
pub use eventdesk_core;
pub use eventdesk_models;
