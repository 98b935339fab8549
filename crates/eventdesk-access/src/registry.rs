//! The permission registry: positions, their sections, and the codenames that
//! open each section.
//!
//! A registry is built once, validated, and then only read. Section names are
//! unique across the whole registry, so a section lookup never depends on
//! which position happens to be scanned first.
//!
//! # File format
//!
//! ```json
//! {
//!   "positions": [
//!     {
//!       "name": "dashboard",
//!       "sections": [
//!         { "name": "eventi", "permissions": ["events.view_own", "events.create"] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use eventdesk_core::permissions;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::catalog::PermissionCatalog;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read registry file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("position name must not be empty")]
    EmptyPositionName,

    #[error("section name in position `{position}` must not be empty")]
    EmptySectionName { position: String },

    #[error("section `{section}` in position `{position}` declares an empty permission codename")]
    EmptyCodename { position: String, section: String },

    #[error("position `{0}` is declared more than once")]
    DuplicatePosition(String),

    #[error("section `{section}` is declared under both `{first}` and `{second}`")]
    DuplicateSection {
        section: String,
        first: String,
        second: String,
    },
}

/// A named UI area and the codenames that grant access to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Section {
    pub name: String,
    /// Holding any one of these opens the section.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Section {
    pub fn new<I, S>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// A group of sections, e.g. the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Position {
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    positions: Vec<Position>,
}

#[derive(Debug, Serialize)]
struct RegistryDocumentRef<'a> {
    positions: &'a [Position],
}

/// Validated, immutable permission registry.
#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    positions: Vec<Position>,
    /// section name -> (position index, section index)
    section_index: HashMap<String, (usize, usize)>,
    fingerprint: String,
}

impl PermissionRegistry {
    /// Validates `positions` and builds the registry.
    pub fn new(positions: Vec<Position>) -> Result<Self, RegistryError> {
        let section_index = index_sections(&positions)?;
        let fingerprint = fingerprint(&positions);

        Ok(Self {
            positions,
            section_index,
            fingerprint,
        })
    }

    /// The registry shipped with EventDesk.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in table is covered by tests. A panic here
    /// means the table itself was edited into an invalid state.
    pub fn builtin() -> Self {
        Self::new(vec![Position::new(
            "dashboard",
            vec![
                Section::new(
                    "eventi",
                    [
                        permissions::EVENTS_VIEW_OWN,
                        permissions::EVENTS_VIEW_ALL,
                        permissions::EVENTS_CREATE,
                        permissions::EVENTS_EDIT_OWN,
                        permissions::EVENTS_EDIT_ALL,
                        permissions::EVENTS_DELETE_OWN,
                        permissions::EVENTS_DELETE_ALL,
                    ],
                ),
                Section::new(
                    "biglietti",
                    [permissions::TICKETS_MANAGE, permissions::TICKETS_PURCHASE],
                ),
                Section::new(
                    "utenti",
                    [permissions::USERS_VIEW, permissions::USERS_ASSIGN_ROLES],
                ),
                Section::new(
                    "ruoli",
                    [
                        permissions::ROLES_VIEW,
                        permissions::ROLES_CREATE,
                        permissions::ROLES_EDIT,
                        permissions::ROLES_DELETE,
                    ],
                ),
            ],
        )])
        .expect("built-in permission registry must be valid")
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        Self::new(document.positions)
    }

    /// Reads and validates a registry file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            positions = registry.positions.len(),
            sections = registry.section_index.len(),
            fingerprint = %registry.fingerprint,
            "Loaded permission registry"
        );

        Ok(registry)
    }

    /// Loads from `path` when given, otherwise returns [`Self::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, RegistryError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using built-in permission registry");
                Ok(Self::builtin())
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&RegistryDocumentRef {
            positions: &self.positions,
        })?)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position(&self, name: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.name == name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_index
            .get(name)
            .map(|&(p, s)| &self.positions[p].sections[s])
    }

    /// All sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.positions.iter().flat_map(|p| p.sections.iter())
    }

    /// Every codename referenced anywhere in the registry.
    pub fn codenames(&self) -> BTreeSet<&str> {
        self.sections()
            .flat_map(|s| s.permissions.iter().map(String::as_str))
            .collect()
    }

    /// Codenames the registry references but the catalog does not know about.
    ///
    /// Such a codename can never be granted through a role, so the section it
    /// guards is reachable only through its other codenames.
    pub fn undeclared_codenames(&self, catalog: &PermissionCatalog) -> Vec<&str> {
        self.codenames()
            .into_iter()
            .filter(|c| !catalog.contains(c))
            .collect()
    }

    /// Hex SHA-256 over the ordered registry contents.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn index_sections(
    positions: &[Position],
) -> Result<HashMap<String, (usize, usize)>, RegistryError> {
    let mut seen_positions = BTreeSet::new();
    let mut section_index: HashMap<String, (usize, usize)> = HashMap::new();

    for (p_idx, position) in positions.iter().enumerate() {
        if position.name.trim().is_empty() {
            return Err(RegistryError::EmptyPositionName);
        }
        if !seen_positions.insert(position.name.as_str()) {
            return Err(RegistryError::DuplicatePosition(position.name.clone()));
        }

        for (s_idx, section) in position.sections.iter().enumerate() {
            if section.name.trim().is_empty() {
                return Err(RegistryError::EmptySectionName {
                    position: position.name.clone(),
                });
            }
            if section.permissions.iter().any(|c| c.trim().is_empty()) {
                return Err(RegistryError::EmptyCodename {
                    position: position.name.clone(),
                    section: section.name.clone(),
                });
            }
            if let Some(&(first_idx, _)) = section_index.get(&section.name) {
                return Err(RegistryError::DuplicateSection {
                    section: section.name.clone(),
                    first: positions[first_idx].name.clone(),
                    second: position.name.clone(),
                });
            }
            section_index.insert(section.name.clone(), (p_idx, s_idx));
        }
    }

    Ok(section_index)
}

fn fingerprint(positions: &[Position]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((positions.len() as u64).to_le_bytes());
    for position in positions {
        hash_field(&mut hasher, b'P', &position.name);
        hasher.update((position.sections.len() as u64).to_le_bytes());
        for section in &position.sections {
            hash_field(&mut hasher, b'S', &section.name);
            hasher.update((section.permissions.len() as u64).to_le_bytes());
            for codename in &section.permissions {
                hash_field(&mut hasher, b'C', codename);
            }
        }
    }
    hex::encode(hasher.finalize())
}

/// Tag and length prefix keep distinct layouts from hashing to the same bytes.
fn hash_field(hasher: &mut Sha256, tag: u8, value: &str) {
    hasher.update([tag]);
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
