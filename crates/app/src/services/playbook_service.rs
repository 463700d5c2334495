//! Playbook service — the caller side of the panel's mutation gateway.

use std::future::Future;

use playbooks_domain::error::{NotFoundError, PlaybookError};
use playbooks_domain::id::PlaybookId;
use playbooks_domain::playbook::Playbook;
use playbooks_domain::time::{self, Timestamp};
use playbooks_domain::update::PlaybookUpdate;

use crate::ports::{PlaybookGateway, PlaybookRepository, SnapshotPublisher};

/// Application service owning playbook snapshots.
///
/// Every successful write is followed by a snapshot publish so mounted
/// panels can reconcile.
pub struct PlaybookService<R, P> {
    repo: R,
    publisher: P,
}

impl<R, P> PlaybookService<R, P>
where
    R: PlaybookRepository,
    P: SnapshotPublisher,
{
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// Store a new playbook after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, playbook), fields(playbook_id = %playbook.id))]
    pub async fn create_playbook(&self, playbook: Playbook) -> Result<Playbook, PlaybookError> {
        playbook.validate()?;
        self.store(playbook).await
    }

    /// Look up a playbook by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::NotFound`] when no playbook with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_playbook(&self, id: &PlaybookId) -> Result<Playbook, PlaybookError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Playbook",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Merge a sparse update into the stored playbook.
    ///
    /// An empty update is accepted and leaves the playbook untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::NotFound`] for an unknown id,
    /// [`PlaybookError::Archived`] when the playbook is read-only,
    /// [`PlaybookError::Validation`] when the merged result breaks an
    /// invariant, or a storage error from the repository.
    #[tracing::instrument(skip(self, update), fields(update = %update))]
    pub async fn apply_update(
        &self,
        id: &PlaybookId,
        update: PlaybookUpdate,
    ) -> Result<Playbook, PlaybookError> {
        let mut playbook = self.get_playbook(id).await?;
        if playbook.is_archived() {
            return Err(PlaybookError::Archived { id: id.clone() });
        }
        if update.is_empty() {
            return Ok(playbook);
        }
        playbook.apply(&update);
        playbook.validate()?;
        self.store(playbook).await
    }

    /// Mark a playbook as archived. Archiving twice keeps the first time.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::NotFound`] for an unknown id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn archive_playbook(
        &self,
        id: &PlaybookId,
        at: Timestamp,
    ) -> Result<Playbook, PlaybookError> {
        let mut playbook = self.get_playbook(id).await?;
        if playbook.is_archived() {
            return Ok(playbook);
        }
        playbook.delete_at = time::to_millis(at);
        self.store(playbook).await
    }

    /// Clear the archived mark.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::NotFound`] for an unknown id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn restore_playbook(&self, id: &PlaybookId) -> Result<Playbook, PlaybookError> {
        let mut playbook = self.get_playbook(id).await?;
        if !playbook.is_archived() {
            return Ok(playbook);
        }
        playbook.delete_at = 0;
        self.store(playbook).await
    }

    async fn store(&self, playbook: Playbook) -> Result<Playbook, PlaybookError> {
        let saved = self.repo.save(playbook).await?;
        if let Err(err) = self.publisher.publish(saved.clone()).await {
            tracing::warn!(playbook_id = %saved.id, error = %err, "failed to publish snapshot");
        }
        Ok(saved)
    }
}

impl<R, P> PlaybookGateway for PlaybookService<R, P>
where
    R: PlaybookRepository + Sync,
    P: SnapshotPublisher + Sync,
{
    fn update_playbook(
        &self,
        id: &PlaybookId,
        update: PlaybookUpdate,
    ) -> impl Future<Output = Result<(), PlaybookError>> + Send {
        async move { self.apply_update(id, update).await.map(|_| ()) }
    }
}
