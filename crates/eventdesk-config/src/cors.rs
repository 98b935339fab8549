use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Origins must be listed explicitly; a `*` entry is dropped because
    /// credentialed CORS cannot use a wildcard origin.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let config = CorsConfig::default();
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_origins_are_trimmed_and_blank_entries_dropped() {
        let config = CorsConfig::from_lookup(|key| {
            (key == "ALLOWED_ORIGINS").then(|| " https://eventi.example , ,http://localhost:5173".to_string())
        });
        assert_eq!(
            config.allowed_origins,
            vec!["https://eventi.example", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_wildcard_origin_is_dropped() {
        let config = CorsConfig::from_lookup(|key| {
            (key == "ALLOWED_ORIGINS").then(|| "*, https://eventi.example".to_string())
        });
        assert_eq!(config.allowed_origins, vec!["https://eventi.example"]);

        let only_wildcard =
            CorsConfig::from_lookup(|key| (key == "ALLOWED_ORIGINS").then(|| "*".to_string()));
        assert!(only_wildcard.allowed_origins.is_empty());
    }
}
