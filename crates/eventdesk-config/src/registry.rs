use std::env;
use std::path::PathBuf;

/// Where the permission registry comes from.
///
/// `PERMISSIONS_REGISTRY_PATH` points at a JSON registry file. When unset or
/// blank the built-in registry is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub path: Option<PathBuf>,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("PERMISSIONS_REGISTRY_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}
