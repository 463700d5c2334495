//! Seed files — an initial playbook and the members of its team.
//!
//! ```toml
//! [playbook]
//! id = "pb1"
//! title = "Incident response"
//! team_id = "t1"
//! invite_users_enabled = true
//! invited_user_ids = ["u1"]
//!
//! [[users]]
//! id = "u1"
//! username = "alice"
//! team_ids = ["t1"]
//! ```

use std::path::Path;

use serde::Deserialize;

use playbooks_domain::playbook::Playbook;
use playbooks_domain::user::User;

use crate::error::MemoryAdapterError;

/// Initial state for the in-memory adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub playbook: Playbook,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Seed {
    /// Parse and validate a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryAdapterError::Parse`] for malformed TOML, or
    /// [`MemoryAdapterError::Domain`] when the playbook breaks an invariant.
    pub fn from_toml_str(raw: &str) -> Result<Self, MemoryAdapterError> {
        let seed: Self = toml::from_str(raw)?;
        seed.playbook.validate().map_err(MemoryAdapterError::Domain)?;
        Ok(seed)
    }

    /// Read, parse and validate a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryAdapterError::Read`] when the file cannot be read,
    /// otherwise the errors of [`Seed::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, MemoryAdapterError> {
        let raw = std::fs::read_to_string(path).map_err(|source| MemoryAdapterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            playbook_id = %seed.playbook.id,
            users = seed.users.len(),
            "seed loaded"
        );
        Ok(seed)
    }
}
