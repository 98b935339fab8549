//! Catalog of every grantable permission, grouped by category.
//!
//! The catalog backs the role editor: it lists what can be granted and how it
//! is labelled. Entries keep seed order.

use eventdesk_core::permissions;
use eventdesk_models::PermissionEntry;

pub const CATEGORY_EVENTS: &str = "Eventi";
pub const CATEGORY_TICKETS: &str = "Biglietti";
pub const CATEGORY_ROLES: &str = "Ruoli";
pub const CATEGORY_USERS: &str = "Utenti";

const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    (permissions::EVENTS_VIEW_OWN, "Visualizza propri", CATEGORY_EVENTS),
    (permissions::EVENTS_VIEW_ALL, "Visualizza tutti", CATEGORY_EVENTS),
    (permissions::EVENTS_CREATE, "Crea", CATEGORY_EVENTS),
    (permissions::EVENTS_EDIT_OWN, "Modifica propri", CATEGORY_EVENTS),
    (permissions::EVENTS_EDIT_ALL, "Modifica tutti", CATEGORY_EVENTS),
    (permissions::EVENTS_DELETE_OWN, "Elimina propri", CATEGORY_EVENTS),
    (permissions::EVENTS_DELETE_ALL, "Elimina tutti", CATEGORY_EVENTS),
    (permissions::ROLES_VIEW, "Visualizza", CATEGORY_ROLES),
    (permissions::ROLES_CREATE, "Crea", CATEGORY_ROLES),
    (permissions::ROLES_EDIT, "Modifica", CATEGORY_ROLES),
    (permissions::ROLES_DELETE, "Elimina", CATEGORY_ROLES),
    (permissions::USERS_VIEW, "Visualizza", CATEGORY_USERS),
    (permissions::USERS_ASSIGN_ROLES, "Assegna Ruoli", CATEGORY_USERS),
    (permissions::TICKETS_MANAGE, "Gestisci", CATEGORY_TICKETS),
    (permissions::TICKETS_PURCHASE, "Acquista", CATEGORY_TICKETS),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    entries: Vec<PermissionEntry>,
}

impl PermissionCatalog {
    pub fn new(entries: Vec<PermissionEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ENTRIES
                .iter()
                .map(|&(codename, name, category)| PermissionEntry {
                    codename: codename.to_string(),
                    name: name.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PermissionEntry] {
        &self.entries
    }

    pub fn get(&self, codename: &str) -> Option<&PermissionEntry> {
        self.entries.iter().find(|e| e.codename == codename)
    }

    pub fn contains(&self, codename: &str) -> bool {
        self.get(codename).is_some()
    }

    /// Case-insensitive category filter.
    pub fn by_category(&self, category: &str) -> Vec<&PermissionEntry> {
        self.entries
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }

    pub fn codenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.codename.as_str())
    }
}
