//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlaybookError`] via `#[from]` (or `Storage` for adapter failures).

use crate::id::{PlaybookId, UserId};
use crate::webhook::WebhookError;

/// Top-level error returned across port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum PlaybookError {
    /// A domain invariant does not hold.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The playbook is archived and therefore read-only.
    #[error("playbook {id} is archived")]
    Archived { id: PlaybookId },

    /// An adapter-level failure (persistence, IO, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on a [`Playbook`](crate::playbook::Playbook).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("user {user_id} is invited more than once")]
    DuplicateInvitedUser { user_id: UserId },

    #[error("invalid webhook configuration")]
    Webhook(#[from] WebhookError),
}

/// A lookup by id returned nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
