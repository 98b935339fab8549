//! Middleware for cross-cutting HTTP concerns.
//!
//! - [`http_cache`]: `Cache-Control` and `ETag` handling

pub mod http_cache;
