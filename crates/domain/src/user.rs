//! User — a team member as shown by the invite list and the owner picker.

use serde::{Deserialize, Serialize};

use crate::id::{TeamId, UserId};

/// A user profile as returned by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub team_ids: Vec<TeamId>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Create an active user with only a username.
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            nickname: String::new(),
            team_ids: Vec::new(),
            active: true,
        }
    }

    /// Full name, else nickname, else username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        if !self.nickname.is_empty() {
            return self.nickname.clone();
        }
        self.username.clone()
    }

    /// Case-insensitive match on username, names and nickname.
    ///
    /// A leading `@` in `term` is ignored; an empty term matches everyone.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().trim_start_matches('@').to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            &self.username,
            &self.first_name,
            &self.last_name,
            &self.nickname,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    #[must_use]
    pub fn in_team(&self, team: &TeamId) -> bool {
        self.team_ids.contains(team)
    }
}
