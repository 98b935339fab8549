//! # EventDesk Core
//!
//! Core types, errors, and utilities shared across the EventDesk crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission codename constants
//! - [`serde`]: Lenient deserialization helpers for backend-produced JSON
//!
//! # Example
//!
//! ```ignore
//! use eventdesk_core::errors::AppError;
//! use eventdesk_core::permissions;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("Invalid request body"));
//! let codename = permissions::EVENTS_CREATE;
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
