//! # EventDesk CLI
//!
//! Inspection utilities for the permission registry, used by the
//! `eventdesk-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use eventdesk_cli::{load_registry, read_profile, render_manifest};
//! use eventdesk_access::Evaluator;
//!
//! let registry = load_registry(None)?;
//! let user = read_profile("profile.json".as_ref())?;
//! println!("{}", render_manifest(&Evaluator::new(&registry).manifest(user.as_ref())));
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eventdesk_access::{PermissionCatalog, PermissionRegistry};
use eventdesk_config::RegistryConfig;
use eventdesk_models::{AccessManifest, Role, UserProfile};

/// Loads the registry from `path`, falling back to `PERMISSIONS_REGISTRY_PATH`
/// and then to the built-in registry.
pub fn load_registry(path: Option<&Path>) -> Result<PermissionRegistry> {
    let config = match path {
        Some(path) => RegistryConfig::with_path(path),
        None => RegistryConfig::from_env(),
    };

    PermissionRegistry::load_or_builtin(config.path.as_deref())
        .context("Failed to load permission registry")
}

/// Reads a user profile JSON file.
///
/// A file containing `null` or a non-object yields `Ok(None)`: the evaluator
/// treats that as "no user".
pub fn read_profile(path: &Path) -> Result<Option<UserProfile>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Profile {} is not valid JSON", path.display()))?;
    Ok(UserProfile::from_json_value(value))
}

/// Outcome of `registry validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub fingerprint: String,
    pub positions: usize,
    pub sections: usize,
    pub undeclared: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.undeclared.is_empty()
    }
}

pub fn validate_registry(
    registry: &PermissionRegistry,
    catalog: &PermissionCatalog,
) -> ValidationReport {
    ValidationReport {
        fingerprint: registry.fingerprint().to_string(),
        positions: registry.positions().len(),
        sections: registry.sections().count(),
        undeclared: registry
            .undeclared_codenames(catalog)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

pub fn render_registry(registry: &PermissionRegistry) -> String {
    let mut out = String::new();
    for position in registry.positions() {
        let _ = writeln!(out, "{}", position.name);
        for section in &position.sections {
            let _ = writeln!(out, "  {:<12} {}", section.name, section.permissions.join(", "));
        }
    }
    let _ = writeln!(out, "fingerprint: {}", registry.fingerprint());
    out
}

pub fn render_manifest(manifest: &AccessManifest) -> String {
    let mark = |allowed: bool| if allowed { "✓" } else { "✗" };

    let mut out = String::new();
    for position in &manifest.positions {
        let _ = writeln!(out, "{} {}", mark(position.allowed), position.name);
        for section in &position.sections {
            let _ = writeln!(out, "  {} {}", mark(section.allowed), section.name);
        }
    }
    out
}

pub fn render_roles(roles: &[Role]) -> String {
    let mut out = String::new();
    for role in roles {
        let lock = if role.is_deletable { "" } else { " (system)" };
        let _ = writeln!(out, "{}{} - {}", role.name, lock, role.description);
        for codename in &role.permissions {
            let _ = writeln!(out, "  {codename}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_access::{Evaluator, Position, Section, default_roles};

    #[test]
    fn test_render_registry() {
        let rendered = render_registry(&PermissionRegistry::builtin());
        assert!(rendered.starts_with("dashboard\n"));
        assert!(rendered.contains("biglietti    tickets.manage, tickets.purchase"));
        assert!(rendered.contains("fingerprint: "));
    }

    #[test]
    fn test_render_manifest() {
        let registry = PermissionRegistry::builtin();
        let user = UserProfile::with_permissions(["users.view"]);
        let rendered = render_manifest(&Evaluator::new(&registry).manifest(Some(&user)));
        assert!(rendered.contains("✓ dashboard"));
        assert!(rendered.contains("  ✓ utenti"));
        assert!(rendered.contains("  ✗ ruoli"));
    }

    #[test]
    fn test_render_roles_marks_system_roles() {
        let rendered = render_roles(&default_roles(&PermissionCatalog::builtin()));
        assert!(rendered.contains("Super Admin (system)"));
        assert!(rendered.contains("Base (system) - Permessi base per nuovi utenti"));
    }

    #[test]
    fn test_validate_registry() {
        let catalog = PermissionCatalog::builtin();
        let report = validate_registry(&PermissionRegistry::builtin(), &catalog);
        assert!(report.is_clean());
        assert_eq!(report.positions, 1);
        assert_eq!(report.sections, 4);

        let custom = PermissionRegistry::new(vec![Position::new(
            "dashboard",
            vec![Section::new("report", ["reports.view"])],
        )])
        .unwrap();
        let report = validate_registry(&custom, &catalog);
        assert!(!report.is_clean());
        assert_eq!(report.undeclared, vec!["reports.view".to_string()]);
    }

    #[test]
    fn test_load_registry_explicit_missing_path() {
        let err = load_registry(Some(Path::new("/nonexistent/registry.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load permission registry"));
    }

    #[test]
    fn test_read_profile_missing_file() {
        assert!(read_profile(Path::new("/nonexistent/profile.json")).is_err());
    }
}
