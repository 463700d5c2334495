//! Update intent — a sparse partial record of playbook fields to change.
//!
//! Only the fields that are `Some` are sent; the gateway merges them into
//! the persisted playbook and eventually produces the next snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Partial update sent to the mutation gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybookUpdate {
    #[serde(
        rename = "createPublicPlaybookRun",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub create_public_playbook_run: Option<bool>,

    #[serde(
        rename = "channelNameTemplate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_name_template: Option<String>,

    #[serde(
        rename = "inviteUsersEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub invite_users_enabled: Option<bool>,

    #[serde(
        rename = "invitedUserIDs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub invited_user_ids: Option<Vec<UserId>>,

    #[serde(
        rename = "defaultOwnerEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_owner_enabled: Option<bool>,

    /// `Some(None)` clears the owner (sent as `""`).
    #[serde(
        rename = "defaultOwnerID",
        default,
        skip_serializing_if = "Option::is_none",
        with = "owner_change"
    )]
    pub default_owner_id: Option<Option<UserId>>,

    #[serde(
        rename = "webhookOnCreationEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub webhook_on_creation_enabled: Option<bool>,

    #[serde(
        rename = "webhookOnCreationURLs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub webhook_on_creation_urls: Option<Vec<String>>,

    #[serde(
        rename = "messageOnJoinEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_on_join_enabled: Option<bool>,

    #[serde(
        rename = "messageOnJoin",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_on_join: Option<String>,

    #[serde(
        rename = "categorizeChannelEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub categorize_channel_enabled: Option<bool>,

    #[serde(
        rename = "categoryName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_name: Option<String>,
}

impl PlaybookUpdate {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Wire names of the fields carried by this update, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        let flags = [
            (
                self.create_public_playbook_run.is_some(),
                "createPublicPlaybookRun",
            ),
            (self.channel_name_template.is_some(), "channelNameTemplate"),
            (self.invite_users_enabled.is_some(), "inviteUsersEnabled"),
            (self.invited_user_ids.is_some(), "invitedUserIDs"),
            (self.default_owner_enabled.is_some(), "defaultOwnerEnabled"),
            (self.default_owner_id.is_some(), "defaultOwnerID"),
            (
                self.webhook_on_creation_enabled.is_some(),
                "webhookOnCreationEnabled",
            ),
            (
                self.webhook_on_creation_urls.is_some(),
                "webhookOnCreationURLs",
            ),
            (self.message_on_join_enabled.is_some(), "messageOnJoinEnabled"),
            (self.message_on_join.is_some(), "messageOnJoin"),
            (
                self.categorize_channel_enabled.is_some(),
                "categorizeChannelEnabled",
            ),
            (self.category_name.is_some(), "categoryName"),
        ];
        flags
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }
}

impl fmt::Display for PlaybookUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "update({})", self.field_names().join(", "))
    }
}

mod owner_change {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::id::UserId;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<Option<UserId>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(Some(id)) => s.serialize_str(id.as_str()),
            _ => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<UserId>>, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(Some(UserId::parse_optional(&raw)))
    }
}
