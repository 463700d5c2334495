//! In-memory [`UserDirectory`] implementation over a fixed user list.

use std::future::Future;

use playbooks_app::ports::UserDirectory;
use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::{TeamId, UserId};
use playbooks_domain::user::User;

/// User directory backed by a fixed list, in insertion order.
///
/// Search and listing only return active members of the given team;
/// lookups by id return inactive users too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    fn members<'a>(&'a self, team: &'a TeamId) -> impl Iterator<Item = &'a User> + 'a {
        self.users.iter().filter(move |u| u.active && u.in_team(team))
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn search_users(
        &self,
        term: &str,
        team: &TeamId,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        let found: Vec<User> = self
            .members(team)
            .filter(|u| u.matches(term))
            .cloned()
            .collect();
        tracing::trace!(%team, term, count = found.len(), "user search");
        async { Ok(found) }
    }

    fn list_users(
        &self,
        team: &TeamId,
        page: usize,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        let found: Vec<User> = self
            .members(team)
            .skip(page.saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect();
        async { Ok(found) }
    }

    fn get_users(
        &self,
        ids: &[UserId],
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        let found: Vec<User> = ids
            .iter()
            .filter_map(|id| self.users.iter().find(|u| &u.id == id).cloned())
            .collect();
        async { Ok(found) }
    }
}
