//! In-memory [`PlaybookRepository`] implementation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use playbooks_app::ports::PlaybookRepository;
use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::PlaybookId;
use playbooks_domain::playbook::Playbook;

use crate::error::MemoryAdapterError;

/// Playbook store kept in process memory. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryPlaybookRepository {
    store: Mutex<HashMap<PlaybookId, Playbook>>,
}

impl InMemoryPlaybookRepository {
    /// Create a repository pre-filled with `playbooks`.
    #[must_use]
    pub fn with_playbooks(playbooks: impl IntoIterator<Item = Playbook>) -> Self {
        let store = playbooks
            .into_iter()
            .map(|pb| (pb.id.clone(), pb))
            .collect();
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<PlaybookId, Playbook>>, MemoryAdapterError> {
        self.store
            .lock()
            .map_err(|_| MemoryAdapterError::Poisoned("playbook store"))
    }
}

impl PlaybookRepository for InMemoryPlaybookRepository {
    fn get_by_id(
        &self,
        id: &PlaybookId,
    ) -> impl Future<Output = Result<Option<Playbook>, PlaybookError>> + Send {
        let result = self
            .lock()
            .map(|store| store.get(id).cloned())
            .map_err(PlaybookError::from);
        async { result }
    }

    fn save(
        &self,
        playbook: Playbook,
    ) -> impl Future<Output = Result<Playbook, PlaybookError>> + Send {
        let result = self
            .lock()
            .map(|mut store| {
                store.insert(playbook.id.clone(), playbook.clone());
                playbook
            })
            .map_err(PlaybookError::from);
        async { result }
    }
}
