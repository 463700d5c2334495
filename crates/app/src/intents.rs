//! Update intents — one function per user-facing edit.
//!
//! Each function reads the current snapshot and returns the sparse update
//! to send, or `None` when nothing should be sent: the playbook is
//! archived, or the edit would not change anything.

use playbooks_domain::id::UserId;
use playbooks_domain::playbook::{CreateChannelSettings, Playbook};
use playbooks_domain::update::PlaybookUpdate;
use playbooks_domain::webhook::{join_urls, split_urls};

/// `None` when the playbook is read-only.
fn writable(playbook: &Playbook) -> Option<()> {
    (!playbook.is_archived()).then_some(())
}

#[must_use]
pub fn toggle_invite_users(playbook: &Playbook) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    Some(PlaybookUpdate {
        invite_users_enabled: Some(!playbook.invite_users_enabled),
        ..PlaybookUpdate::default()
    })
}

#[must_use]
pub fn toggle_default_owner(playbook: &Playbook) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    Some(PlaybookUpdate {
        default_owner_enabled: Some(!playbook.default_owner_enabled),
        ..PlaybookUpdate::default()
    })
}

#[must_use]
pub fn toggle_webhook_on_creation(playbook: &Playbook) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    Some(PlaybookUpdate {
        webhook_on_creation_enabled: Some(!playbook.webhook_on_creation_enabled),
        ..PlaybookUpdate::default()
    })
}

/// Enabling is allowed with an empty message: the editor only becomes
/// editable once the toggle is on.
#[must_use]
pub fn toggle_message_on_join(playbook: &Playbook) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    Some(PlaybookUpdate {
        message_on_join_enabled: Some(!playbook.message_on_join_enabled),
        ..PlaybookUpdate::default()
    })
}

#[must_use]
pub fn toggle_categorize_channel(playbook: &Playbook) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    Some(PlaybookUpdate {
        categorize_channel_enabled: Some(!playbook.categorize_channel_enabled),
        ..PlaybookUpdate::default()
    })
}

/// Append `user` to the invite list unless already present.
#[must_use]
pub fn add_invited_user(playbook: &Playbook, user: &UserId) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if playbook.invited_user_ids.contains(user) {
        return None;
    }
    Some(PlaybookUpdate {
        invited_user_ids: Some(playbook.invited_with(user)),
        ..PlaybookUpdate::default()
    })
}

/// Remove `user` from the invite list if present.
#[must_use]
pub fn remove_invited_user(playbook: &Playbook, user: &UserId) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if !playbook.invited_user_ids.contains(user) {
        return None;
    }
    Some(PlaybookUpdate {
        invited_user_ids: Some(playbook.invited_without(user)),
        ..PlaybookUpdate::default()
    })
}

/// Assign the default owner; `None` clears it.
#[must_use]
pub fn assign_default_owner(playbook: &Playbook, owner: Option<UserId>) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if playbook.default_owner_id == owner {
        return None;
    }
    Some(PlaybookUpdate {
        default_owner_id: Some(owner),
        ..PlaybookUpdate::default()
    })
}

/// Commit the webhook text area on blur. The text is split on newlines as
/// is; validation already happened in the widget.
#[must_use]
pub fn commit_webhook_text(playbook: &Playbook, raw: &str) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if join_urls(&playbook.webhook_on_creation_urls) == raw {
        return None;
    }
    Some(PlaybookUpdate {
        webhook_on_creation_urls: Some(split_urls(raw)),
        ..PlaybookUpdate::default()
    })
}

/// Save the welcome message. The enabled flag follows the content: blank
/// text disables it, anything else enables it. A blank save is always sent.
#[must_use]
pub fn save_message_on_join(playbook: &Playbook, text: &str) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    let enabled = !text.trim().is_empty();
    if enabled && playbook.message_on_join == text && playbook.message_on_join_enabled {
        return None;
    }
    Some(PlaybookUpdate {
        message_on_join: Some(text.to_string()),
        message_on_join_enabled: Some(enabled),
        ..PlaybookUpdate::default()
    })
}

#[must_use]
pub fn change_category_name(playbook: &Playbook, name: &str) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if playbook.category_name == name {
        return None;
    }
    Some(PlaybookUpdate {
        category_name: Some(name.to_string()),
        ..PlaybookUpdate::default()
    })
}

/// Commit the channel-creation slice. Both fields travel together.
#[must_use]
pub fn commit_channel_settings(
    playbook: &Playbook,
    settings: &CreateChannelSettings,
) -> Option<PlaybookUpdate> {
    writable(playbook)?;
    if playbook.channel_settings() == *settings {
        return None;
    }
    Some(PlaybookUpdate {
        create_public_playbook_run: Some(settings.create_public_playbook_run),
        channel_name_template: Some(settings.channel_name_template.clone()),
        ..PlaybookUpdate::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbooks_domain::time;

    fn playbook() -> Playbook {
        Playbook::builder()
            .id("pb1")
            .title("Incident response")
            .team_id("t1")
            .invited_user("u1")
            .invited_user("u2")
            .webhook_url("https://a.com")
            .build()
            .unwrap()
    }

    fn archived() -> Playbook {
        Playbook::builder()
            .title("Archived")
            .archived_at(time::now())
            .build()
            .unwrap()
    }

    type Toggle = fn(&Playbook) -> Option<PlaybookUpdate>;

    const TOGGLES: [(Toggle, &str); 5] = [
        (toggle_invite_users, "inviteUsersEnabled"),
        (toggle_default_owner, "defaultOwnerEnabled"),
        (toggle_webhook_on_creation, "webhookOnCreationEnabled"),
        (toggle_message_on_join, "messageOnJoinEnabled"),
        (toggle_categorize_channel, "categorizeChannelEnabled"),
    ];

    #[test]
    fn should_send_exactly_one_flipped_field_per_toggle() {
        let pb = playbook();
        for (toggle, field) in TOGGLES {
            let update = toggle(&pb).unwrap();
            assert_eq!(update.field_names(), vec![field]);
            let json = serde_json::to_value(&update).unwrap();
            assert_eq!(json[field], serde_json::json!(true), "{field}");
        }
    }

    #[test]
    fn should_flip_enabled_toggle_off() {
        let mut pb = playbook();
        pb.invite_users_enabled = true;
        let update = toggle_invite_users(&pb).unwrap();
        assert_eq!(update.invite_users_enabled, Some(false));
    }

    #[test]
    fn should_send_nothing_when_toggling_archived_playbook() {
        let pb = archived();
        for (toggle, field) in TOGGLES {
            assert!(toggle(&pb).is_none(), "{field}");
        }
    }

    #[test]
    fn should_append_new_invited_user() {
        let update = add_invited_user(&playbook(), &UserId::from("u3")).unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"invitedUserIDs": ["u1", "u2", "u3"]})
        );
    }

    #[test]
    fn should_send_nothing_when_adding_present_user() {
        assert!(add_invited_user(&playbook(), &UserId::from("u1")).is_none());
    }

    #[test]
    fn should_remove_present_user() {
        let update = remove_invited_user(&playbook(), &UserId::from("u1")).unwrap();
        assert_eq!(update.invited_user_ids, Some(vec![UserId::from("u2")]));
    }

    #[test]
    fn should_send_nothing_when_removing_absent_user() {
        let pb = playbook();
        assert!(remove_invited_user(&pb, &UserId::from("u9")).is_none());
        assert_eq!(
            pb.invited_user_ids,
            vec![UserId::from("u1"), UserId::from("u2")]
        );
    }

    #[test]
    fn should_assign_new_owner() {
        let update = assign_default_owner(&playbook(), Some(UserId::from("u1"))).unwrap();
        assert_eq!(update.default_owner_id, Some(Some(UserId::from("u1"))));
    }

    #[test]
    fn should_send_nothing_when_owner_unchanged() {
        let mut pb = playbook();
        pb.default_owner_id = Some(UserId::from("u1"));
        assert!(assign_default_owner(&pb, Some(UserId::from("u1"))).is_none());
        assert!(assign_default_owner(&playbook(), None).is_none());
    }

    #[test]
    fn should_clear_owner_with_empty_wire_value() {
        let mut pb = playbook();
        pb.default_owner_id = Some(UserId::from("u1"));
        let update = assign_default_owner(&pb, None).unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"defaultOwnerID": ""})
        );
    }

    #[test]
    fn should_split_webhook_text_into_urls() {
        let update = commit_webhook_text(&playbook(), "https://a.com\nhttps://b.com").unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"webhookOnCreationURLs": ["https://a.com", "https://b.com"]})
        );
    }

    #[test]
    fn should_keep_duplicates_and_spacing_in_webhook_text() {
        let update =
            commit_webhook_text(&playbook(), "https://a.com\nhttps://a.com \n").unwrap();
        assert_eq!(
            update.webhook_on_creation_urls,
            Some(vec![
                "https://a.com".to_string(),
                "https://a.com ".to_string(),
                String::new(),
            ])
        );
    }

    #[test]
    fn should_send_nothing_when_webhook_text_unchanged() {
        assert!(commit_webhook_text(&playbook(), "https://a.com").is_none());
    }

    #[test]
    fn should_disable_welcome_message_when_text_is_blank() {
        let mut pb = playbook();
        pb.message_on_join = "Welcome!".to_string();
        pb.message_on_join_enabled = true;
        let update = save_message_on_join(&pb, "   \n").unwrap();
        assert_eq!(update.message_on_join.as_deref(), Some("   \n"));
        assert_eq!(update.message_on_join_enabled, Some(false));

        pb.message_on_join_enabled = false;
        let update = save_message_on_join(&pb, "").unwrap();
        assert_eq!(update.message_on_join_enabled, Some(false));
    }

    #[test]
    fn should_send_blank_welcome_message_even_when_stored_blank_and_disabled() {
        let mut pb = playbook();
        pb.message_on_join = String::new();
        pb.message_on_join_enabled = false;
        let update = save_message_on_join(&pb, "").unwrap();
        assert_eq!(update.message_on_join.as_deref(), Some(""));
        assert_eq!(update.message_on_join_enabled, Some(false));
    }

    #[test]
    fn should_enable_welcome_message_when_text_is_present() {
        let update = save_message_on_join(&playbook(), "Hello team").unwrap();
        assert_eq!(update.message_on_join_enabled, Some(true));
    }

    #[test]
    fn should_send_nothing_when_welcome_message_unchanged() {
        let mut pb = playbook();
        pb.message_on_join = "Hi".to_string();
        pb.message_on_join_enabled = true;
        assert!(save_message_on_join(&pb, "Hi").is_none());
    }

    #[test]
    fn should_change_category_name_only_when_different() {
        let mut pb = playbook();
        pb.category_name = "Runs".to_string();
        assert!(change_category_name(&pb, "Runs").is_none());
        let update = change_category_name(&pb, "Incidents").unwrap();
        assert_eq!(update.field_names(), vec!["categoryName"]);
    }

    #[test]
    fn should_send_both_channel_fields_together() {
        let settings = CreateChannelSettings {
            create_public_playbook_run: true,
            channel_name_template: String::new(),
        };
        let update = commit_channel_settings(&playbook(), &settings).unwrap();
        assert_eq!(
            update.field_names(),
            vec!["createPublicPlaybookRun", "channelNameTemplate"]
        );
        assert!(commit_channel_settings(&playbook(), &playbook().channel_settings()).is_none());
    }

    #[test]
    fn should_send_nothing_for_any_edit_on_archived_playbook() {
        let pb = archived();
        assert!(add_invited_user(&pb, &UserId::from("u3")).is_none());
        assert!(assign_default_owner(&pb, Some(UserId::from("u3"))).is_none());
        assert!(commit_webhook_text(&pb, "https://b.com").is_none());
        assert!(save_message_on_join(&pb, "hi").is_none());
        assert!(change_category_name(&pb, "x").is_none());
    }
}
