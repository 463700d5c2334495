//! Playbook — the automation configuration of a run template.
//!
//! A [`Playbook`] is a snapshot owned by the server. The settings panel
//! never mutates it in place; it only requests changes through
//! [`PlaybookUpdate`]s, and the server side merges them with
//! [`Playbook::apply`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlaybookError, ValidationError};
use crate::id::{PlaybookId, TeamId, UserId};
use crate::time::{self, Timestamp};
use crate::update::PlaybookUpdate;
use crate::webhook::WebhookRules;

/// Automation configuration of a playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    pub id: PlaybookId,
    pub title: String,
    pub team_id: TeamId,
    #[serde(default)]
    pub create_public_playbook_run: bool,
    #[serde(default)]
    pub channel_name_template: String,
    #[serde(default)]
    pub invite_users_enabled: bool,
    #[serde(default)]
    pub invited_user_ids: Vec<UserId>,
    #[serde(default)]
    pub default_owner_enabled: bool,
    #[serde(default, with = "crate::id::empty_as_none")]
    pub default_owner_id: Option<UserId>,
    #[serde(default)]
    pub webhook_on_creation_enabled: bool,
    #[serde(default)]
    pub webhook_on_creation_urls: Vec<String>,
    #[serde(default)]
    pub message_on_join_enabled: bool,
    #[serde(default)]
    pub message_on_join: String,
    #[serde(default)]
    pub categorize_channel_enabled: bool,
    #[serde(default)]
    pub category_name: String,
    /// Epoch millis; `0` means not archived.
    #[serde(default)]
    pub delete_at: i64,
}

/// The channel-creation slice of a playbook, edited interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelSettings {
    pub create_public_playbook_run: bool,
    pub channel_name_template: String,
}

impl Playbook {
    /// Create a builder for constructing a [`Playbook`].
    #[must_use]
    pub fn builder() -> PlaybookBuilder {
        PlaybookBuilder::default()
    }

    /// Whether the playbook has been archived (read-only).
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.delete_at != 0
    }

    #[must_use]
    pub fn archived_at(&self) -> Option<Timestamp> {
        time::from_millis(self.delete_at)
    }

    /// The channel-creation slice.
    #[must_use]
    pub fn channel_settings(&self) -> CreateChannelSettings {
        CreateChannelSettings {
            create_public_playbook_run: self.create_public_playbook_run,
            channel_name_template: self.channel_name_template.clone(),
        }
    }

    /// Invite list with `user` appended, unless already present.
    #[must_use]
    pub fn invited_with(&self, user: &UserId) -> Vec<UserId> {
        let mut ids = self.invited_user_ids.clone();
        if !ids.contains(user) {
            ids.push(user.clone());
        }
        ids
    }

    /// Invite list with `user` removed. An absent user yields the list
    /// unchanged.
    #[must_use]
    pub fn invited_without(&self, user: &UserId) -> Vec<UserId> {
        match self.invited_user_ids.iter().position(|id| id == user) {
            Some(idx) => {
                let mut ids = self.invited_user_ids.clone();
                ids.remove(idx);
                ids
            }
            None => self.invited_user_ids.clone(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::Validation`] when:
    /// - `title` is empty ([`ValidationError::EmptyTitle`])
    /// - a user is invited twice ([`ValidationError::DuplicateInvitedUser`])
    /// - the webhook list breaks the default rules ([`ValidationError::Webhook`])
    pub fn validate(&self) -> Result<(), PlaybookError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let mut seen = HashSet::new();
        for id in &self.invited_user_ids {
            if !seen.insert(id) {
                return Err(ValidationError::DuplicateInvitedUser {
                    user_id: id.clone(),
                }
                .into());
            }
        }
        WebhookRules::default()
            .check_urls(&self.webhook_on_creation_urls)
            .map_err(ValidationError::from)?;
        Ok(())
    }

    /// Merge a sparse update: only the fields it names change.
    pub fn apply(&mut self, update: &PlaybookUpdate) {
        if let Some(value) = update.create_public_playbook_run {
            self.create_public_playbook_run = value;
        }
        if let Some(value) = &update.channel_name_template {
            self.channel_name_template.clone_from(value);
        }
        if let Some(value) = update.invite_users_enabled {
            self.invite_users_enabled = value;
        }
        if let Some(value) = &update.invited_user_ids {
            self.invited_user_ids.clone_from(value);
        }
        if let Some(value) = update.default_owner_enabled {
            self.default_owner_enabled = value;
        }
        if let Some(value) = &update.default_owner_id {
            self.default_owner_id.clone_from(value);
        }
        if let Some(value) = update.webhook_on_creation_enabled {
            self.webhook_on_creation_enabled = value;
        }
        if let Some(value) = &update.webhook_on_creation_urls {
            self.webhook_on_creation_urls.clone_from(value);
        }
        if let Some(value) = update.message_on_join_enabled {
            self.message_on_join_enabled = value;
        }
        if let Some(value) = &update.message_on_join {
            self.message_on_join.clone_from(value);
        }
        if let Some(value) = update.categorize_channel_enabled {
            self.categorize_channel_enabled = value;
        }
        if let Some(value) = &update.category_name {
            self.category_name.clone_from(value);
        }
    }
}

/// Step-by-step builder for [`Playbook`].
#[derive(Debug, Default)]
pub struct PlaybookBuilder {
    id: Option<PlaybookId>,
    title: Option<String>,
    team_id: Option<TeamId>,
    create_public_playbook_run: bool,
    channel_name_template: String,
    invite_users_enabled: bool,
    invited_user_ids: Vec<UserId>,
    default_owner_enabled: bool,
    default_owner_id: Option<UserId>,
    webhook_on_creation_enabled: bool,
    webhook_on_creation_urls: Vec<String>,
    message_on_join_enabled: bool,
    message_on_join: String,
    categorize_channel_enabled: bool,
    category_name: String,
    delete_at: i64,
}

impl PlaybookBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<PlaybookId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    #[must_use]
    pub fn public_channel(mut self, public: bool) -> Self {
        self.create_public_playbook_run = public;
        self
    }

    #[must_use]
    pub fn channel_name_template(mut self, template: impl Into<String>) -> Self {
        self.channel_name_template = template.into();
        self
    }

    #[must_use]
    pub fn invite_users_enabled(mut self, enabled: bool) -> Self {
        self.invite_users_enabled = enabled;
        self
    }

    #[must_use]
    pub fn invited_user(mut self, id: impl Into<UserId>) -> Self {
        self.invited_user_ids.push(id.into());
        self
    }

    #[must_use]
    pub fn default_owner_enabled(mut self, enabled: bool) -> Self {
        self.default_owner_enabled = enabled;
        self
    }

    #[must_use]
    pub fn default_owner(mut self, id: impl Into<UserId>) -> Self {
        self.default_owner_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn webhook_on_creation_enabled(mut self, enabled: bool) -> Self {
        self.webhook_on_creation_enabled = enabled;
        self
    }

    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_on_creation_urls.push(url.into());
        self
    }

    #[must_use]
    pub fn message_on_join(mut self, message: impl Into<String>, enabled: bool) -> Self {
        self.message_on_join = message.into();
        self.message_on_join_enabled = enabled;
        self
    }

    #[must_use]
    pub fn categorize(mut self, category_name: impl Into<String>, enabled: bool) -> Self {
        self.category_name = category_name.into();
        self.categorize_channel_enabled = enabled;
        self
    }

    #[must_use]
    pub fn archived_at(mut self, ts: Timestamp) -> Self {
        self.delete_at = time::to_millis(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Playbook`].
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::Validation`] if invariants fail.
    pub fn build(self) -> Result<Playbook, PlaybookError> {
        let playbook = Playbook {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            team_id: self.team_id.unwrap_or_default(),
            create_public_playbook_run: self.create_public_playbook_run,
            channel_name_template: self.channel_name_template,
            invite_users_enabled: self.invite_users_enabled,
            invited_user_ids: self.invited_user_ids,
            default_owner_enabled: self.default_owner_enabled,
            default_owner_id: self.default_owner_id,
            webhook_on_creation_enabled: self.webhook_on_creation_enabled,
            webhook_on_creation_urls: self.webhook_on_creation_urls,
            message_on_join_enabled: self.message_on_join_enabled,
            message_on_join: self.message_on_join,
            categorize_channel_enabled: self.categorize_channel_enabled,
            category_name: self.category_name,
            delete_at: self.delete_at,
        };
        playbook.validate()?;
        Ok(playbook)
    }
}
