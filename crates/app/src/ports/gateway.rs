//! Mutation gateway port — accepts sparse update intents.

use std::future::Future;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::PlaybookId;
use playbooks_domain::update::PlaybookUpdate;

/// Persists partial updates to a playbook.
///
/// Merge, retry, and error surfacing belong to the implementation. The
/// panel never awaits the result; the next snapshot is the only feedback.
pub trait PlaybookGateway {
    /// Merge `update` into the persisted playbook `id`.
    fn update_playbook(
        &self,
        id: &PlaybookId,
        update: PlaybookUpdate,
    ) -> impl Future<Output = Result<(), PlaybookError>> + Send;
}

impl<T: PlaybookGateway + Send + Sync> PlaybookGateway for std::sync::Arc<T> {
    fn update_playbook(
        &self,
        id: &PlaybookId,
        update: PlaybookUpdate,
    ) -> impl Future<Output = Result<(), PlaybookError>> + Send {
        (**self).update_playbook(id, update)
    }
}
