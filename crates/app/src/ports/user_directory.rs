//! User directory port — team-scoped search and pagination.

use std::future::Future;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::{TeamId, UserId};
use playbooks_domain::user::User;

/// Page size used when listing team members for the pickers.
pub const PROFILE_CHUNK_SIZE: usize = 200;

/// Source of user profiles for the invite list and owner picker.
pub trait UserDirectory {
    /// Active users of `team` matching `term`.
    fn search_users(
        &self,
        term: &str,
        team: &TeamId,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send;

    /// One page of active users of `team`, `page` starting at 0.
    fn list_users(
        &self,
        team: &TeamId,
        page: usize,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send;

    /// Profiles for `ids`, in the same order. Unknown ids are skipped.
    fn get_users(
        &self,
        ids: &[UserId],
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send;
}

impl<T: UserDirectory + Send + Sync> UserDirectory for std::sync::Arc<T> {
    fn search_users(
        &self,
        term: &str,
        team: &TeamId,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        (**self).search_users(term, team)
    }

    fn list_users(
        &self,
        team: &TeamId,
        page: usize,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        (**self).list_users(team, page, per_page)
    }

    fn get_users(
        &self,
        ids: &[UserId],
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        (**self).get_users(ids)
    }
}
