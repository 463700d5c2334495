//! Snapshot port — announces fresh playbook snapshots.

use std::future::Future;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::playbook::Playbook;

/// Publishes authoritative snapshots to interested panels.
pub trait SnapshotPublisher {
    /// Publish a snapshot to all current subscribers.
    fn publish(&self, playbook: Playbook)
    -> impl Future<Output = Result<(), PlaybookError>> + Send;
}

impl<T: SnapshotPublisher + Send + Sync> SnapshotPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        playbook: Playbook,
    ) -> impl Future<Output = Result<(), PlaybookError>> + Send {
        (**self).publish(playbook)
    }
}
