//! EventDesk Observability
//!
//! Tracing subscriber setup shared by the HTTP service and the CLI.
//!
//! # Configuration
//!
//! - `RUST_LOG`: full `EnvFilter` directive; takes precedence when set
//! - `LOG_LEVEL`: level for the EventDesk crates when `RUST_LOG` is unset (default `info`)
//! - `LOG_FORMAT`: `json` for one JSON object per line, anything else for compact text
//!
//! # Examples
//!
//! ```no_run
//! use eventdesk_observability::init_tracing;
//!
//! init_tracing();
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const EVENTDESK_TARGETS: &[&str] = &[
    "eventdesk",
    "eventdesk_access",
    "eventdesk_cli",
    "eventdesk_core",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => Self::Json,
            _ => Self::Compact,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// Default filter directive: `level` for EventDesk crates, `warn` for noisy dependencies.
pub fn default_directive(level: &str) -> String {
    let mut directives: Vec<String> = EVENTDESK_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("tower_http=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.push("axum::rejection=trace".to_string());
    directives.join(",")
}

/// Installs the global subscriber.
///
/// Calling it twice is harmless: the second installation attempt is ignored.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&log_level)));

    let console_layer = match LogFormat::from_env() {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Compact);
        assert_eq!(LogFormat::parse(None), LogFormat::Compact);
    }

    #[test]
    fn test_default_directive() {
        let directive = default_directive("debug");
        assert!(directive.contains("eventdesk=debug"));
        assert!(directive.contains("eventdesk_access=debug"));
        assert!(directive.contains("tower_http=warn"));
        assert!(EnvFilter::try_new(&directive).is_ok());
    }
}
