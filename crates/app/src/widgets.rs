//! Leaf widget capability records.
//!
//! Each setting widget receives an explicit record: whether it is disabled,
//! the current value(s), and its texts. Widgets report committed values
//! back through the panel's handlers. Input validation is the widget's own
//! job; only the webhook editor validates anything.

use playbooks_domain::id::UserId;
use playbooks_domain::webhook::{WebhookError, WebhookRules};

/// A plain on/off switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleProps {
    pub disabled: bool,
    pub checked: bool,
    pub label: String,
}

/// Channel-creation settings, fed from the proxy mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelProps {
    pub disabled: bool,
    pub title: String,
    pub public: bool,
    pub public_label: String,
    pub private_label: String,
    pub name_template: String,
    pub name_placeholder: String,
}

/// Toggle plus an ordered invite list edited through a user picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteUsersProps {
    pub toggle: ToggleProps,
    pub user_ids: Vec<UserId>,
}

/// Toggle plus a single-user owner picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOwnerProps {
    pub toggle: ToggleProps,
    pub owner_id: Option<UserId>,
}

/// Toggle plus a newline-delimited text area of webhook URLs.
#[derive(Debug, Clone)]
pub struct WebhookSettingProps {
    pub toggle: ToggleProps,
    pub input: String,
    pub rules: WebhookRules,
    pub rows: u16,
    pub placeholder: String,
    pub error_text: String,
    pub max_error_text: String,
    pub too_long_error_text: String,
}

/// Rejected webhook input, with the text to show under the text area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{text}")]
pub struct WebhookInputError {
    #[source]
    pub cause: WebhookError,
    pub text: String,
}

impl WebhookSettingProps {
    /// Validate the text area content before it is committed on blur.
    ///
    /// # Errors
    ///
    /// Returns the widget's error text: one for a malformed URL, another
    /// for too many entries, another for text over the length limit.
    pub fn validate(&self, raw: &str) -> Result<(), WebhookInputError> {
        self.rules.check_text(raw).map_err(|cause| {
            let text = match cause {
                WebhookError::InvalidUrl { .. } => self.error_text.clone(),
                WebhookError::TooManyEntries { .. } => self.max_error_text.clone(),
                WebhookError::TooLong { .. } => self.too_long_error_text.clone(),
            };
            WebhookInputError { cause, text }
        })
    }
}

/// A markdown editor committing on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownEditProps {
    pub disabled: bool,
    pub value: String,
    pub placeholder: String,
}

/// Toggle plus a category name picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizeProps {
    pub toggle: ToggleProps,
    pub category_name: String,
    pub placeholder: String,
}
