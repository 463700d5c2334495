//! Shared fakes for unit tests.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use playbooks_domain::error::PlaybookError;
use playbooks_domain::id::{PlaybookId, TeamId, UserId};
use playbooks_domain::update::PlaybookUpdate;
use playbooks_domain::user::User;

use crate::dispatch::IntentSink;
use crate::ports::UserDirectory;

/// Records every intent handed to it.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Rc<RefCell<Vec<(PlaybookId, PlaybookUpdate)>>>,
}

impl RecordingSink {
    pub fn updates(&self) -> Vec<PlaybookUpdate> {
        self.sent.borrow().iter().map(|(_, u)| u.clone()).collect()
    }

    pub fn ids(&self) -> Vec<PlaybookId> {
        self.sent.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl IntentSink for RecordingSink {
    fn send(&self, playbook_id: &PlaybookId, update: PlaybookUpdate) {
        self.sent.borrow_mut().push((playbook_id.clone(), update));
    }
}

/// Directory over a fixed list of users.
#[derive(Clone, Default)]
pub struct FixedDirectory {
    pub users: Vec<User>,
}

impl FixedDirectory {
    pub fn team(team: &str, names: &[(&str, &str)]) -> Self {
        let users = names
            .iter()
            .map(|(id, username)| User {
                team_ids: vec![TeamId::from(team)],
                ..User::new(*id, *username)
            })
            .collect();
        Self { users }
    }
}

impl UserDirectory for FixedDirectory {
    fn search_users(
        &self,
        term: &str,
        team: &TeamId,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        let found: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.in_team(team) && u.matches(term))
            .cloned()
            .collect();
        async { Ok(found) }
    }

    fn list_users(
        &self,
        team: &TeamId,
        page: usize,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<User>, PlaybookError>> + Send {
        let found: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.in_team(team))
            .skip(page * per_page)
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
