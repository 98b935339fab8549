use eventdesk_access::{PermissionCatalog, PermissionRegistry, default_roles};

use super::model::{CatalogFilterParams, CatalogResponse, DefaultRolesResponse, RegistryResponse};

pub fn get_registry(registry: &PermissionRegistry) -> RegistryResponse {
    RegistryResponse {
        fingerprint: registry.fingerprint().to_string(),
        positions: registry.positions().to_vec(),
    }
}

pub fn get_catalog(catalog: &PermissionCatalog, params: CatalogFilterParams) -> CatalogResponse {
    let permissions = match params.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            catalog.by_category(category).into_iter().cloned().collect()
        }
        _ => catalog.entries().to_vec(),
    };

    CatalogResponse {
        categories: catalog.categories().into_iter().map(str::to_string).collect(),
        permissions,
    }
}

pub fn get_default_roles(catalog: &PermissionCatalog) -> DefaultRolesResponse {
    DefaultRolesResponse {
        roles: default_roles(catalog),
    }
}
