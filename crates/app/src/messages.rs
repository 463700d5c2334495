//! Message catalog — every user-visible string of the panel.

/// A translatable message: stable id plus the English default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub id: &'static str,
    pub default_message: &'static str,
}

const fn message(id: &'static str, default_message: &'static str) -> MessageDescriptor {
    MessageDescriptor {
        id,
        default_message,
    }
}

pub const RUN_STARTS: MessageDescriptor =
    message("automation.section.run_starts", "When a run starts");
pub const MEMBER_JOINS: MessageDescriptor = message(
    "automation.section.member_joins",
    "When a new member joins the channel",
);

pub const CREATE_CHANNEL: MessageDescriptor =
    message("automation.create_channel.title", "Create a channel");
pub const PUBLIC_CHANNEL: MessageDescriptor =
    message("automation.create_channel.public", "Public channel");
pub const PRIVATE_CHANNEL: MessageDescriptor =
    message("automation.create_channel.private", "Private channel");
pub const CHANNEL_NAME_PLACEHOLDER: MessageDescriptor = message(
    "automation.create_channel.name_placeholder",
    "Channel name template (optional)",
);

pub const INVITE_MEMBERS: MessageDescriptor =
    message("automation.invite_users.title", "Invite members");
pub const ASSIGN_OWNER: MessageDescriptor =
    message("automation.assign_owner.title", "Assign the owner role");

pub const WEBHOOK_PLACEHOLDER: MessageDescriptor =
    message("automation.webhook.placeholder", "Enter webhook");
pub const WEBHOOK_TOGGLE: MessageDescriptor = message(
    "automation.webhook.toggle",
    "Send outgoing webhook (One per line)",
);
pub const WEBHOOK_INVALID: MessageDescriptor =
    message("automation.webhook.invalid", "Invalid webhook URLs");
pub const WEBHOOK_TOO_MANY: MessageDescriptor = message(
    "automation.webhook.too_many",
    "Invalid entry: the maximum number of webhooks allowed is 64",
);
pub const WEBHOOK_TOO_LONG: MessageDescriptor = message(
    "automation.webhook.too_long",
    "Invalid entry: the maximum length is 1000 characters",
);

pub const WELCOME_TOGGLE: MessageDescriptor =
    message("automation.welcome.toggle", "Send a welcome message");
pub const WELCOME_PLACEHOLDER: MessageDescriptor = message(
    "automation.welcome.placeholder",
    "Send a welcome message\u{2026}",
);

pub const CATEGORIZE: MessageDescriptor = message(
    "automation.categorize.title",
    "Add the channel to a sidebar category",
);
pub const CATEGORY_PLACEHOLDER: MessageDescriptor =
    message("automation.categorize.placeholder", "Enter category name");

/// Every message, for catalog completeness checks.
pub const ALL: &[MessageDescriptor] = &[
    RUN_STARTS,
    MEMBER_JOINS,
    CREATE_CHANNEL,
    PUBLIC_CHANNEL,
    PRIVATE_CHANNEL,
    CHANNEL_NAME_PLACEHOLDER,
    INVITE_MEMBERS,
    ASSIGN_OWNER,
    WEBHOOK_PLACEHOLDER,
    WEBHOOK_TOGGLE,
    WEBHOOK_INVALID,
    WEBHOOK_TOO_MANY,
    WEBHOOK_TOO_LONG,
    WELCOME_TOGGLE,
    WELCOME_PLACEHOLDER,
    CATEGORIZE,
    CATEGORY_PLACEHOLDER,
];

/// Look up a descriptor by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static MessageDescriptor> {
    ALL.iter().find(|m| m.id == id)
}
