//! Fire-and-forget delivery of update intents.
//!
//! The panel hands intents to an [`IntentSink`] and moves on. It never
//! awaits a result, never orders successive intents, and cannot cancel one
//! once sent.

use std::sync::Arc;

use tokio::runtime::Handle;

use playbooks_domain::id::PlaybookId;
use playbooks_domain::update::PlaybookUpdate;

use crate::ports::PlaybookGateway;

/// Synchronous, non-blocking hand-off of an update intent.
pub trait IntentSink {
    fn send(&self, playbook_id: &PlaybookId, update: PlaybookUpdate);
}

impl<T: IntentSink + ?Sized> IntentSink for Arc<T> {
    fn send(&self, playbook_id: &PlaybookId, update: PlaybookUpdate) {
        (**self).send(playbook_id, update);
    }
}

/// Sends each intent to the gateway on its own tokio task.
///
/// Several intents may be in flight at once. Failures are logged and
/// otherwise dropped; the next snapshot is the only feedback.
pub struct SpawnDispatcher<G> {
    gateway: Arc<G>,
    handle: Handle,
}

impl<G> SpawnDispatcher<G>
where
    G: PlaybookGateway + Send + Sync + 'static,
{
    pub fn new(gateway: Arc<G>, handle: Handle) -> Self {
        Self { gateway, handle }
    }

    /// Dispatch on the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Fails when called outside a tokio runtime.
    pub fn on_current_runtime(gateway: Arc<G>) -> Result<Self, tokio::runtime::TryCurrentError> {
        Ok(Self::new(gateway, Handle::try_current()?))
    }
}

impl<G> IntentSink for SpawnDispatcher<G>
where
    G: PlaybookGateway + Send + Sync + 'static,
{
    fn send(&self, playbook_id: &PlaybookId, update: PlaybookUpdate) {
        let gateway = Arc::clone(&self.gateway);
        let playbook_id = playbook_id.clone();
        self.handle.spawn(async move {
            let summary = update.to_string();
            if let Err(err) = gateway.update_playbook(&playbook_id, update).await {
                tracing::warn!(
                    %playbook_id,
                    update = %summary,
                    error = %err,
                    "playbook update failed"
                );
            }
        });
    }
}
