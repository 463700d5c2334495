//! Automation panel — binds setting widgets to update intents.
//!
//! Data flows one way: the caller supplies snapshots, the panel derives a
//! [`PanelView`] from the latest one, user edits become intents handed to
//! an [`IntentSink`], and the gateway eventually produces the next
//! snapshot. The panel never mutates a snapshot in place.
//!
//! The channel-creation setting is the only one edited through a
//! [`ProxyState`] mirror, so its widget reacts immediately while the commit
//! waits out the debounce window.

use std::time::{Duration, Instant};

use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::UserId;
use playbooks_domain::playbook::{CreateChannelSettings, Playbook};
use playbooks_domain::update::PlaybookUpdate;
use playbooks_domain::user::User;

use crate::dispatch::IntentSink;
use crate::intents;
use crate::ports::{Localizer, PROFILE_CHUNK_SIZE, UserDirectory};
use crate::proxy::{DEFAULT_DEBOUNCE, ProxyState};
use crate::view::{self, PanelView};

/// Tunables for a panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    /// Delay between the last channel-settings edit and its commit.
    pub debounce: Duration,
    /// Page size when listing team members for the pickers.
    pub profile_chunk_size: usize,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            profile_chunk_size: PROFILE_CHUNK_SIZE,
        }
    }
}

/// Settings panel for one playbook's automation rules.
pub struct AutomationPanel<S, U, L> {
    snapshot: Playbook,
    channel: ProxyState<CreateChannelSettings>,
    sink: S,
    directory: U,
    localizer: L,
    options: PanelOptions,
}

impl<S, U, L> AutomationPanel<S, U, L>
where
    S: IntentSink,
    U: UserDirectory,
    L: Localizer,
{
    /// Mount the panel on its first snapshot.
    pub fn new(snapshot: Playbook, sink: S, directory: U, localizer: L, options: PanelOptions) -> Self {
        let channel = ProxyState::new(snapshot.channel_settings(), options.debounce);
        Self {
            snapshot,
            channel,
            sink,
            directory,
            localizer,
            options,
        }
    }

    /// The latest authoritative snapshot.
    pub fn snapshot(&self) -> &Playbook {
        &self.snapshot
    }

    pub fn is_archived(&self) -> bool {
        self.snapshot.is_archived()
    }

    /// Replace the snapshot with a fresh one from the caller.
    ///
    /// Any change to the playbook resets the channel mirror, discarding an
    /// uncommitted local edit, unless the only difference is the channel
    /// settings this panel last committed. Returns whether it was reset.
    pub fn receive_snapshot(&mut self, snapshot: Playbook) -> bool {
        let reset = if snapshot.id != self.snapshot.id {
            self.channel = ProxyState::new(snapshot.channel_settings(), self.options.debounce);
            true
        } else if snapshot == self.snapshot || self.is_own_echo(&snapshot) {
            false
        } else {
            self.channel.reset(snapshot.channel_settings());
            true
        };
        if reset {
            tracing::debug!(playbook_id = %snapshot.id, "channel settings mirror reset");
        }
        self.snapshot = snapshot;
        reset
    }

    fn is_own_echo(&self, snapshot: &Playbook) -> bool {
        let committed = self.channel.known();
        if snapshot.channel_settings() != *committed {
            return false;
        }
        let mut expected = self.snapshot.clone();
        expected.create_public_playbook_run = committed.create_public_playbook_run;
        expected.channel_name_template.clone_from(&committed.channel_name_template);
        expected == *snapshot
    }

    fn dispatch(&self, update: Option<PlaybookUpdate>) -> bool {
        let Some(update) = update else {
            return false;
        };
        tracing::debug!(playbook_id = %self.snapshot.id, %update, "dispatching update intent");
        self.sink.send(&self.snapshot.id, update);
        true
    }

    // ── When a run starts ──────────────────────────────────────────

    /// The channel-creation settings as the widget should show them.
    pub fn channel_settings(&self) -> &CreateChannelSettings {
        self.channel.get()
    }

    /// Edit the channel-creation mirror. Ignored when archived.
    pub fn update_channel_settings<F>(&mut self, f: F, now: Instant) -> bool
    where
        F: FnOnce(&CreateChannelSettings) -> CreateChannelSettings,
    {
        if self.is_archived() {
            return false;
        }
        self.channel.update(f, now);
        true
    }

    pub fn set_public_channel(&mut self, public: bool, now: Instant) -> bool {
        self.update_channel_settings(
            |current| CreateChannelSettings {
                create_public_playbook_run: public,
                ..current.clone()
            },
            now,
        )
    }

    pub fn set_channel_name_template(&mut self, template: impl Into<String>, now: Instant) -> bool {
        let template = template.into();
        self.update_channel_settings(
            |current| CreateChannelSettings {
                channel_name_template: template,
                ..current.clone()
            },
            now,
        )
    }

    /// When the pending channel-settings commit becomes due.
    pub fn next_commit_due(&self) -> Option<Instant> {
        self.channel.next_due()
    }

    /// Commit the channel settings if the debounce window has elapsed.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        let Some(settings) = self.channel.take_due(now) else {
            return false;
        };
        self.dispatch(intents::commit_channel_settings(&self.snapshot, &settings))
    }

    /// Commit pending channel settings immediately.
    pub fn flush(&mut self) -> bool {
        let Some(settings) = self.channel.take_pending() else {
            return false;
        };
        self.dispatch(intents::commit_channel_settings(&self.snapshot, &settings))
    }

    pub fn toggle_invite_users(&self) -> bool {
        self.dispatch(intents::toggle_invite_users(&self.snapshot))
    }

    pub fn add_invited_user(&self, user: &UserId) -> bool {
        self.dispatch(intents::add_invited_user(&self.snapshot, user))
    }

    pub fn remove_invited_user(&self, user: &UserId) -> bool {
        self.dispatch(intents::remove_invited_user(&self.snapshot, user))
    }

    pub fn toggle_default_owner(&self) -> bool {
        self.dispatch(intents::toggle_default_owner(&self.snapshot))
    }

    /// Assign the default owner; `None` clears it.
    pub fn assign_default_owner(&self, owner: Option<UserId>) -> bool {
        self.dispatch(intents::assign_default_owner(&self.snapshot, owner))
    }

    pub fn toggle_webhook_on_creation(&self) -> bool {
        self.dispatch(intents::toggle_webhook_on_creation(&self.snapshot))
    }

    /// Commit the webhook text area (on blur). The widget validates first.
    pub fn commit_webhook_text(&self, raw: &str) -> bool {
        self.dispatch(intents::commit_webhook_text(&self.snapshot, raw))
    }

    // ── When a new member joins the channel ────────────────────────

    pub fn toggle_message_on_join(&self) -> bool {
        self.dispatch(intents::toggle_message_on_join(&self.snapshot))
    }

    /// Save the welcome message (on explicit save, not per keystroke).
    pub fn save_message_on_join(&self, text: &str) -> bool {
        self.dispatch(intents::save_message_on_join(&self.snapshot, text))
    }

    pub fn toggle_categorize_channel(&self) -> bool {
        self.dispatch(intents::toggle_categorize_channel(&self.snapshot))
    }

    pub fn change_category_name(&self, name: &str) -> bool {
        self.dispatch(intents::change_category_name(&self.snapshot, name))
    }

    // ── User pickers ───────────────────────────────────────────────

    /// Search the playbook's team for users matching `term`.
    ///
    /// # Errors
    ///
    /// Propagates user directory failures.
    pub async fn search_users(&self, term: &str) -> Result<Vec<User>, PlaybookError> {
        self.directory
            .search_users(term, &self.snapshot.team_id)
            .await
    }

    /// First page of the playbook's team members.
    ///
    /// # Errors
    ///
    /// Propagates user directory failures.
    pub async fn list_users(&self) -> Result<Vec<User>, PlaybookError> {
        self.directory
            .list_users(&self.snapshot.team_id, 0, self.options.profile_chunk_size)
            .await
    }

    /// Profiles of the invited users, in invite order.
    ///
    /// # Errors
    ///
    /// Propagates user directory failures.
    pub async fn invited_users(&self) -> Result<Vec<User>, PlaybookError> {
        self.directory
            .get_users(&self.snapshot.invited_user_ids)
            .await
    }

    /// Profile of the default owner, if one is set and known.
    ///
    /// # Errors
    ///
    /// Propagates user directory failures.
    pub async fn default_owner(&self) -> Result<Option<User>, PlaybookError> {
        let Some(owner) = &self.snapshot.default_owner_id else {
            return Ok(None);
        };
        let users = self.directory.get_users(std::slice::from_ref(owner)).await?;
        Ok(users.into_iter().next())
    }

    /// Derive the view from the latest snapshot and the channel mirror.
    pub fn view(&self) -> PanelView {
        view::build(&self.snapshot, self.channel.get(), &self.localizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DefaultMessages;
    use crate::test_support::{FixedDirectory, RecordingSink};
    use crate::view::{CREATE_CHANNEL, Widget};
    use playbooks_domain::id::PlaybookId;
    use playbooks_domain::time;

    type Panel = AutomationPanel<RecordingSink, FixedDirectory, DefaultMessages>;

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

    fn directory() -> FixedDirectory {
        let mut dir = FixedDirectory::team(
            "t1",
            &[("u1", "alice"), ("u2", "bob"), ("u3", "carol")],
        );
        dir.users.extend(FixedDirectory::team("t2", &[("u4", "dave")]).users);
        dir
    }

    fn mount(pb: Playbook) -> (Panel, RecordingSink) {
        let sink = RecordingSink::default();
        let panel = AutomationPanel::new(
            pb,
            sink.clone(),
            directory(),
            DefaultMessages,
            PanelOptions::default(),
        );
        (panel, sink)
    }

    fn archived() -> Playbook {
        let mut pb = playbook();
        pb.delete_at = time::to_millis(time::now());
        pb
    }

    #[test]
    fn should_send_one_intent_per_toggle() {
        let (panel, sink) = mount(playbook());
        assert!(panel.toggle_invite_users());
        assert!(panel.toggle_default_owner());
        assert!(panel.toggle_webhook_on_creation());
        assert!(panel.toggle_message_on_join());
        assert!(panel.toggle_categorize_channel());

        let updates = sink.updates();
        assert_eq!(updates.len(), 5);
        assert!(updates.iter().all(|u| u.field_names().len() == 1));
        assert!(sink.ids().iter().all(|id| *id == PlaybookId::from("pb1")));
    }

    #[test]
    fn should_send_nothing_and_render_disabled_when_archived() {
        let (mut panel, sink) = mount(archived());
        assert!(!panel.toggle_invite_users());
        assert!(!panel.toggle_default_owner());
        assert!(!panel.toggle_webhook_on_creation());
        assert!(!panel.toggle_message_on_join());
        assert!(!panel.toggle_categorize_channel());
        assert!(!panel.add_invited_user(&UserId::from("u3")));
        assert!(!panel.set_public_channel(true, Instant::now()));
        assert!(!panel.flush());
        assert_eq!(sink.len(), 0);
        assert!(panel.view().all_disabled());
    }

    #[test]
    fn should_add_new_user_and_skip_present_one() {
        let (panel, sink) = mount(playbook());
        assert!(panel.add_invited_user(&UserId::from("u3")));
        assert!(!panel.add_invited_user(&UserId::from("u1")));
        assert_eq!(
            sink.updates()[0].invited_user_ids,
            Some(vec![UserId::from("u1"), UserId::from("u2"), UserId::from("u3")])
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn should_ignore_removal_of_absent_user() {
        let (panel, sink) = mount(playbook());
        assert!(!panel.remove_invited_user(&UserId::from("u9")));
        assert_eq!(sink.len(), 0);
        assert_eq!(
            panel.snapshot().invited_user_ids,
            vec![UserId::from("u1"), UserId::from("u2")]
        );
    }

    #[test]
    fn should_split_webhook_text_on_commit() {
        let (panel, sink) = mount(playbook());
        assert!(panel.commit_webhook_text("https://a.com\nhttps://b.com"));
        assert_eq!(
            sink.updates()[0].webhook_on_creation_urls,
            Some(vec!["https://a.com".to_string(), "https://b.com".to_string()])
        );
    }

    #[test]
    fn should_send_disabled_flag_with_blank_welcome_message() {
        let mut pb = playbook();
        pb.message_on_join = "Hello".to_string();
        pb.message_on_join_enabled = true;
        let (panel, sink) = mount(pb);
        assert!(panel.save_message_on_join("  "));
        let update = &sink.updates()[0];
        assert_eq!(update.message_on_join.as_deref(), Some("  "));
        assert_eq!(update.message_on_join_enabled, Some(false));
    }

    #[test]
    fn should_mirror_channel_edit_immediately_and_commit_after_debounce() {
        let (mut panel, sink) = mount(playbook());
        let t0 = Instant::now();

        assert!(panel.set_public_channel(true, t0));
        assert!(panel.set_channel_name_template("incident-", t0));
        assert!(panel.channel_settings().create_public_playbook_run);
        assert_eq!(panel.channel_settings().channel_name_template, "incident-");
        assert_eq!(sink.len(), 0);

        let Some(Widget::CreateChannel(props)) =
            panel.view().setting(CREATE_CHANNEL).map(|s| s.widget.clone())
        else {
            panic!("expected create-channel widget");
        };
        assert!(props.public);

        assert!(!panel.flush_due(t0 + Duration::from_millis(100)));
        assert!(panel.flush_due(t0 + DEFAULT_DEBOUNCE));
        let update = &sink.updates()[0];
        assert_eq!(update.create_public_playbook_run, Some(true));
        assert_eq!(update.channel_name_template.as_deref(), Some("incident-"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn should_replace_mirror_when_external_snapshot_changes() {
        let (mut panel, sink) = mount(playbook());
        let t0 = Instant::now();
        panel.set_public_channel(true, t0);
        panel.set_channel_name_template("mine-", t0);

        let mut external = playbook();
        external.channel_name_template = "theirs-".to_string();
        assert!(panel.receive_snapshot(external));

        assert!(!panel.channel_settings().create_public_playbook_run);
        assert_eq!(panel.channel_settings().channel_name_template, "theirs-");
        assert!(!panel.flush());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn should_drop_pending_edit_when_unrelated_field_changes() {
        let (mut panel, sink) = mount(playbook());
        panel.set_channel_name_template("mine-", Instant::now());

        let mut external = playbook();
        external.category_name = "Runs".to_string();
        assert!(panel.receive_snapshot(external));

        assert_eq!(panel.channel_settings().channel_name_template, "");
        assert_eq!(panel.snapshot().category_name, "Runs");
        assert!(panel.next_commit_due().is_none());
        assert!(!panel.flush());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn should_drop_pending_edit_when_archived() {
        let (mut panel, sink) = mount(playbook());
        let t0 = Instant::now();
        assert!(panel.set_channel_name_template("mine-", t0));

        assert!(panel.receive_snapshot(archived()));

        assert_eq!(panel.channel_settings().channel_name_template, "");
        assert!(!panel.flush_due(t0 + DEFAULT_DEBOUNCE));
        assert!(!panel.flush());
        assert_eq!(sink.len(), 0);
        assert!(panel.view().all_disabled());
    }

    #[test]
    fn should_keep_newer_edit_on_echo_of_own_commit() {
        let (mut panel, sink) = mount(playbook());
        panel.set_channel_name_template("a-", Instant::now());
        assert!(panel.flush());
        panel.set_channel_name_template("b-", Instant::now());

        let mut echo = playbook();
        echo.channel_name_template = "a-".to_string();
        assert!(!panel.receive_snapshot(echo));

        assert_eq!(panel.channel_settings().channel_name_template, "b-");
        assert_eq!(panel.snapshot().channel_name_template, "a-");
        assert!(panel.flush());
        assert_eq!(sink.updates()[1].channel_name_template.as_deref(), Some("b-"));
    }

    #[test]
    fn should_not_reset_on_identical_snapshot() {
        let (mut panel, _sink) = mount(playbook());
        panel.set_channel_name_template("mine-", Instant::now());

        assert!(!panel.receive_snapshot(playbook()));
        assert_eq!(panel.channel_settings().channel_name_template, "mine-");
    }

    #[test]
    fn should_remount_mirror_for_another_playbook() {
        let (mut panel, _sink) = mount(playbook());
        panel.set_channel_name_template("mine-", Instant::now());

        let other = Playbook::builder().id("pb2").title("Other").build().unwrap();
        assert!(panel.receive_snapshot(other));
        assert_eq!(panel.channel_settings().channel_name_template, "");
        assert_eq!(panel.snapshot().id, PlaybookId::from("pb2"));
    }

    #[test]
    fn should_use_fresh_snapshot_for_later_intents() {
        let (mut panel, sink) = mount(playbook());
        let mut next = playbook();
        next.invite_users_enabled = true;
        panel.receive_snapshot(next);

        panel.toggle_invite_users();
        assert_eq!(sink.updates()[0].invite_users_enabled, Some(false));
    }

    #[tokio::test]
    async fn should_search_users_in_playbook_team_only() {
        let (panel, _sink) = mount(playbook());
        let found = panel.search_users("a").await.unwrap();
        let names: Vec<_> = found.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol"]);
    }

    #[tokio::test]
    async fn should_list_first_page_with_chunk_size() {
        let sink = RecordingSink::default();
        let panel = AutomationPanel::new(
            playbook(),
            sink,
            directory(),
            DefaultMessages,
            PanelOptions {
                profile_chunk_size: 2,
                ..PanelOptions::default()
            },
        );
        assert_eq!(panel.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_resolve_invited_users_in_order() {
        let (panel, _sink) = mount(playbook());
        let users = panel.invited_users().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn should_resolve_default_owner() {
        let (panel, _sink) = mount(playbook());
        assert!(panel.default_owner().await.unwrap().is_none());

        let mut pb = playbook();
        pb.default_owner_id = Some(UserId::from("u3"));
        let (panel, _sink) = mount(pb);
        assert_eq!(panel.default_owner().await.unwrap().unwrap().username, "carol");
    }
}
