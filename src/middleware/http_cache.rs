//! HTTP caching for registry reads and no-store for access decisions.
//!
//! Registry and catalog responses only change when the process restarts with a
//! different registry, so clients may cache them and revalidate with
//! `If-None-Match`. Access decisions depend on the posted user profile and must
//! never be cached.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::http_cache::{cache_control, etag_middleware, CacheControlConfig};
//!
//! let app = Router::new()
//!     .route("/api/permissions/registry", get(handler))
//!     .layer(cache_control(CacheControlConfig::public(300)))
//!     .layer(axum::middleware::from_fn(etag_middleware));
//! ```

use axum::{
    body::Body,
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{CACHE_CONTROL, ETAG, IF_NONE_MATCH},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use sha2::{Digest, Sha256};
use tower_http::set_header::SetResponseHeaderLayer;

/// Configuration for the `Cache-Control` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheControlConfig {
    /// Cacheable by shared caches (public) or only by the browser (private).
    pub public: bool,
    /// Seconds the response is considered fresh.
    pub max_age: u64,
    pub no_store: bool,
}

impl CacheControlConfig {
    pub fn public(max_age: u64) -> Self {
        Self {
            public: true,
            max_age,
            no_store: false,
        }
    }

    /// Never store; used for per-user access decisions.
    pub fn no_store() -> Self {
        Self {
            public: false,
            max_age: 0,
            no_store: true,
        }
    }

    /// Build the Cache-Control header value.
    pub fn to_header_value(&self) -> HeaderValue {
        let mut directives = Vec::new();

        if self.no_store {
            directives.push("no-store".to_string());
        } else {
            if self.public {
                directives.push("public".to_string());
            } else {
                directives.push("private".to_string());
            }
            directives.push(format!("max-age={}", self.max_age));
        }

        HeaderValue::from_str(&directives.join(", "))
            .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
    }
}

/// Sets `Cache-Control` on responses that do not already carry one.
pub fn cache_control(config: CacheControlConfig) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, config.to_header_value())
}

/// Quoted hex ETag from response body bytes.
fn generate_etag(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    let hash = hasher.finalize();
    format!("\"{}\"", hex::encode(&hash[..16]))
}

/// Quotes an ETag value produced elsewhere (e.g. a registry fingerprint).
pub fn quote_etag(tag: &str) -> String {
    format!("\"{tag}\"")
}

/// Weak ETag comparison (ignores the W/ prefix).
fn etags_match(client_etag: &str, server_etag: &str) -> bool {
    let client = client_etag.trim().trim_start_matches("W/");
    let server = server_etag.trim().trim_start_matches("W/");
    client == "*" || client == server
}

fn if_none_match_hits(if_none_match: &str, server_etag: &str) -> bool {
    if_none_match
        .split(',')
        .any(|tag| etags_match(tag, server_etag))
}

/// ETag middleware for conditional GET requests.
///
/// Responses that already carry an `ETag` keep it; otherwise one is derived
/// from the body. A matching `If-None-Match` turns the response into
/// `304 Not Modified`.
pub async fn etag_middleware(request: Request, next: Next) -> Response {
    let is_get = request.method() == Method::GET;
    let if_none_match = request
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(request).await;

    if !is_get || !response.status().is_success() {
        return response;
    }

    if let Some(server_etag) = response.headers().get(ETAG).and_then(|v| v.to_str().ok()) {
        if let Some(client_etag) = &if_none_match {
            if if_none_match_hits(client_etag, server_etag) {
                return not_modified(server_etag);
            }
        }
        return response;
    }

    let (parts, body) = response.into_parts();

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return (parts, Body::empty()).into_response(),
    };

    let etag = generate_etag(&bytes);

    if let Some(client_etag) = &if_none_match {
        if if_none_match_hits(client_etag, &etag) {
            return not_modified(&etag);
        }
    }

    let mut response = Response::from_parts(parts, Body::from(bytes));
    if let Ok(etag_value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(ETAG, etag_value);
    }

    response
}

fn not_modified(etag: &str) -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    if let Ok(etag_value) = HeaderValue::from_str(etag) {
        response.headers_mut().insert(ETAG, etag_value);
    }
    response
}
