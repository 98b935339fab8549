//! # EventDesk Config
//!
//! Configuration types for the EventDesk access service and CLI.
//!
//! Every structure is loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`registry`]: Location of the permission registry file
//! - [`server`]: Listen address for the HTTP service
//!
//! # Example
//!
//! ```ignore
//! use eventdesk_config::{CorsConfig, RegistryConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let server = ServerConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let registry = RegistryConfig::from_env();
//! ```

pub mod cors;
pub mod registry;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use registry::RegistryConfig;
pub use server::ServerConfig;
