//! View model — the panel as data, derived from a snapshot.
//!
//! Rendering is someone else's job; this module only decides what each
//! setting shows and whether it can be edited.

use playbooks_domain::playbook::{CreateChannelSettings, Playbook};
use playbooks_domain::webhook::{WebhookRules, join_urls};

use crate::messages;
use crate::ports::Localizer;
use crate::widgets::{
    AssignOwnerProps, CategorizeProps, CreateChannelProps, InviteUsersProps, MarkdownEditProps,
    ToggleProps, WebhookSettingProps,
};

pub const CREATE_CHANNEL: &str = "create-channel";
pub const INVITE_USERS: &str = "invite-users";
pub const ASSIGN_OWNER: &str = "assign-owner";
pub const OUTGOING_WEBHOOK: &str = "playbook-run-creation__outgoing-webhook";
pub const WELCOME_MESSAGE: &str = "user-joins-message";
pub const CATEGORIZE_CHANNEL: &str = "user-joins-channel-categorize";

/// Rows shown by the webhook text area.
const WEBHOOK_ROWS: u16 = 3;

/// Section header icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Play,
    AccountCheck,
}

/// The whole panel.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub archived: bool,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub icon: Icon,
    pub title: String,
    pub settings: Vec<SettingView>,
}

#[derive(Debug, Clone)]
pub struct SettingView {
    pub id: &'static str,
    pub widget: Widget,
}

/// One leaf widget with its capability record.
#[derive(Debug, Clone)]
pub enum Widget {
    CreateChannel(CreateChannelProps),
    InviteUsers(InviteUsersProps),
    AssignOwner(AssignOwnerProps),
    Webhook(WebhookSettingProps),
    WelcomeMessage {
        toggle: ToggleProps,
        editor: MarkdownEditProps,
    },
    Categorize(CategorizeProps),
}

impl PanelView {
    /// Find a setting by its id.
    #[must_use]
    pub fn setting(&self, id: &str) -> Option<&SettingView> {
        self.sections
            .iter()
            .flat_map(|s| s.settings.iter())
            .find(|s| s.id == id)
    }

    /// Whether every toggle and input is disabled.
    #[must_use]
    pub fn all_disabled(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| s.settings.iter())
            .all(|s| s.widget.is_disabled())
    }
}

impl Widget {
    /// Whether the widget accepts no input at all.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::CreateChannel(props) => props.disabled,
            Self::InviteUsers(props) => props.toggle.disabled,
            Self::AssignOwner(props) => props.toggle.disabled,
            Self::Webhook(props) => props.toggle.disabled,
            Self::WelcomeMessage { toggle, editor } => toggle.disabled && editor.disabled,
            Self::Categorize(props) => props.toggle.disabled,
        }
    }
}

fn toggle(disabled: bool, checked: bool, label: String) -> ToggleProps {
    ToggleProps {
        disabled,
        checked,
        label,
    }
}

/// Derive the view from a snapshot and the channel mirror.
pub fn build<L: Localizer + ?Sized>(
    playbook: &Playbook,
    channel: &CreateChannelSettings,
    localizer: &L,
) -> PanelView {
    let archived = playbook.is_archived();
    let t = |m: &messages::MessageDescriptor| localizer.format(m);

    let run_starts = SectionView {
        icon: Icon::Play,
        title: t(&messages::RUN_STARTS),
        settings: vec![
            SettingView {
                id: CREATE_CHANNEL,
                widget: Widget::CreateChannel(CreateChannelProps {
                    disabled: archived,
                    title: t(&messages::CREATE_CHANNEL),
                    public: channel.create_public_playbook_run,
                    public_label: t(&messages::PUBLIC_CHANNEL),
                    private_label: t(&messages::PRIVATE_CHANNEL),
                    name_template: channel.channel_name_template.clone(),
                    name_placeholder: t(&messages::CHANNEL_NAME_PLACEHOLDER),
                }),
            },
            SettingView {
                id: INVITE_USERS,
                widget: Widget::InviteUsers(InviteUsersProps {
                    toggle: toggle(
                        archived,
                        playbook.invite_users_enabled,
                        t(&messages::INVITE_MEMBERS),
                    ),
                    user_ids: playbook.invited_user_ids.clone(),
                }),
            },
            SettingView {
                id: ASSIGN_OWNER,
                widget: Widget::AssignOwner(AssignOwnerProps {
                    toggle: toggle(
                        archived,
                        playbook.default_owner_enabled,
                        t(&messages::ASSIGN_OWNER),
                    ),
                    owner_id: playbook.default_owner_id.clone(),
                }),
            },
            SettingView {
                id: OUTGOING_WEBHOOK,
                widget: Widget::Webhook(WebhookSettingProps {
                    toggle: toggle(
                        archived,
                        playbook.webhook_on_creation_enabled,
                        t(&messages::WEBHOOK_TOGGLE),
                    ),
                    input: join_urls(&playbook.webhook_on_creation_urls),
                    rules: WebhookRules::default(),
                    rows: WEBHOOK_ROWS,
                    placeholder: t(&messages::WEBHOOK_PLACEHOLDER),
                    error_text: t(&messages::WEBHOOK_INVALID),
                    max_error_text: t(&messages::WEBHOOK_TOO_MANY),
                    too_long_error_text: t(&messages::WEBHOOK_TOO_LONG),
                }),
            },
        ],
    };

    let member_joins = SectionView {
        icon: Icon::AccountCheck,
        title: t(&messages::MEMBER_JOINS),
        settings: vec![
            SettingView {
                id: WELCOME_MESSAGE,
                widget: Widget::WelcomeMessage {
                    toggle: toggle(
                        archived,
                        playbook.message_on_join_enabled,
                        t(&messages::WELCOME_TOGGLE),
                    ),
                    editor: MarkdownEditProps {
                        disabled: archived || !playbook.message_on_join_enabled,
                        value: playbook.message_on_join.clone(),
                        placeholder: t(&messages::WELCOME_PLACEHOLDER),
                    },
                },
            },
            SettingView {
                id: CATEGORIZE_CHANNEL,
                widget: Widget::Categorize(CategorizeProps {
                    toggle: toggle(
                        archived,
                        playbook.categorize_channel_enabled,
                        t(&messages::CATEGORIZE),
                    ),
                    category_name: playbook.category_name.clone(),
                    placeholder: t(&messages::CATEGORY_PLACEHOLDER),
                }),
            },
        ],
    };

    PanelView {
        archived,
        sections: vec![run_starts, member_joins],
    }
}
