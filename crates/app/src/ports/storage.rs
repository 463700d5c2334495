//! Storage port — repository trait for playbook snapshots.

use std::future::Future;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::PlaybookId;
use playbooks_domain::playbook::Playbook;

/// Repository for persisting and querying [`Playbook`]s.
pub trait PlaybookRepository {
    /// Get a playbook by its unique identifier.
    fn get_by_id(
        &self,
        id: &PlaybookId,
    ) -> impl Future<Output = Result<Option<Playbook>, PlaybookError>> + Send;

    /// Insert or replace a playbook.
    fn save(&self, playbook: Playbook)
    -> impl Future<Output = Result<Playbook, PlaybookError>> + Send;
}
