use std::sync::Arc;

use anyhow::Context;
use eventdesk_access::{PermissionCatalog, PermissionRegistry};
use eventdesk_config::{CorsConfig, RegistryConfig, ServerConfig};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<PermissionRegistry>,
    pub catalog: Arc<PermissionCatalog>,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    pub fn new(registry: PermissionRegistry, catalog: PermissionCatalog) -> Self {
        Self {
            registry: Arc::new(registry),
            catalog: Arc::new(catalog),
            cors_config: CorsConfig::default(),
            server_config: ServerConfig::default(),
        }
    }
}

/// Builds the state from the environment, loading the registry once.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let registry_config = RegistryConfig::from_env();
    let registry = PermissionRegistry::load_or_builtin(registry_config.path.as_deref())
        .context("Failed to load permission registry")?;
    let catalog = PermissionCatalog::builtin();

    let undeclared = registry.undeclared_codenames(&catalog);
    if !undeclared.is_empty() {
        warn!(
            codenames = ?undeclared,
            "Registry references codenames missing from the permission catalog"
        );
    }

    info!(
        positions = registry.positions().len(),
        fingerprint = %registry.fingerprint(),
        "Permission registry ready"
    );

    Ok(AppState {
        registry: Arc::new(registry),
        catalog: Arc::new(catalog),
        cors_config: CorsConfig::from_env(),
        server_config: ServerConfig::from_env(),
    })
}
