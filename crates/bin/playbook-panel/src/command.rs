//! Line commands accepted on stdin.
//!
//! One command per line; the first word is the verb and the rest of the
//! line its argument. Text arguments understand `\n` and `\\` escapes so a
//! multi-line value fits on one line.

use std::fmt;
use std::str::FromStr;

use playbooks_domain::id::UserId;

/// A boolean setting flipped by `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    InviteUsers,
    DefaultOwner,
    Webhook,
    WelcomeMessage,
    Categorize,
}

impl FromStr for Setting {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invite" => Ok(Self::InviteUsers),
            "owner" => Ok(Self::DefaultOwner),
            "webhook" => Ok(Self::Webhook),
            "welcome" => Ok(Self::WelcomeMessage),
            "categorize" => Ok(Self::Categorize),
            other => Err(CommandError::InvalidArgument {
                command: "toggle",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InviteUsers => "invite",
            Self::DefaultOwner => "owner",
            Self::Webhook => "webhook",
            Self::WelcomeMessage => "welcome",
            Self::Categorize => "categorize",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Help,
    Quit,
    Toggle(Setting),
    Invite(UserId),
    Uninvite(UserId),
    /// `None` clears the owner.
    Owner(Option<UserId>),
    /// Raw webhook text area content, newline-delimited.
    Webhooks(String),
    Welcome(String),
    Category(String),
    PublicChannel(bool),
    ChannelName(String),
    Search(String),
    Users,
    Invited,
    Flush,
    Archive,
    Restore,
}

/// Command line parse failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}` does not accept `{value}`")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

pub const HELP: &str = "\
commands:
  show                         print the panel
  toggle <invite|owner|webhook|welcome|categorize>
  invite <user-id>             add a user to the invite list
  uninvite <user-id>           remove a user from the invite list
  owner <user-id>|none         set or clear the default owner
  webhooks <urls>              commit the webhook text (\\n between URLs)
  welcome <text>               save the welcome message (\\n for newlines)
  category <name>              set the channel category
  channel public|private       edit the channel visibility
  channel-name <template>      edit the channel name template
  search <term>                search team members
  users                        list team members
  invited                      list invited users
  flush                        commit pending channel edits now
  archive | restore            archive or restore the playbook
  quit";

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

/// Expand `\n` and `\\`; any other backslash is kept as is.
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "" => Err(CommandError::Empty),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "toggle" => required(rest, "toggle", "a setting")?.parse().map(Self::Toggle),
            "invite" => Ok(Self::Invite(required(rest, "invite", "a user id")?.into())),
            "uninvite" => Ok(Self::Uninvite(required(rest, "uninvite", "a user id")?.into())),
            "owner" => match required(rest, "owner", "a user id or `none`")? {
                "none" => Ok(Self::Owner(None)),
                id => Ok(Self::Owner(Some(id.into()))),
            },
            "webhooks" => Ok(Self::Webhooks(unescape(rest))),
            "welcome" => Ok(Self::Welcome(unescape(rest))),
            "category" => Ok(Self::Category(rest.to_string())),
            "channel" => match required(rest, "channel", "`public` or `private`")? {
                "public" => Ok(Self::PublicChannel(true)),
                "private" => Ok(Self::PublicChannel(false)),
                other => Err(CommandError::InvalidArgument {
                    command: "channel",
                    value: other.to_string(),
                }),
            },
            "channel-name" => Ok(Self::ChannelName(rest.to_string())),
            "search" => Ok(Self::Search(rest.trim().to_string())),
            "users" => Ok(Self::Users),
            "invited" => Ok(Self::Invited),
            "flush" => Ok(Self::Flush),
            "archive" => Ok(Self::Archive),
            "restore" => Ok(Self::Restore),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
