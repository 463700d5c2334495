//! In-process snapshot bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::playbook::Playbook;

use crate::ports::SnapshotPublisher;

/// In-process bus carrying authoritative playbook snapshots.
///
/// Publishing succeeds even when there are no active subscribers
/// (the snapshot is simply dropped).
pub struct SnapshotBus {
    sender: broadcast::Sender<Playbook>,
}

impl SnapshotBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to snapshots published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Playbook> {
        self.sender.subscribe()
    }
}

impl SnapshotPublisher for SnapshotBus {
    fn publish(
        &self,
        playbook: Playbook,
    ) -> impl Future<Output = Result<(), PlaybookError>> + Send {
        // send fails only when there are zero receivers
        let _ = self.sender.send(playbook);
        async { Ok(()) }
    }
}
