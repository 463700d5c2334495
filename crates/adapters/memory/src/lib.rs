//! # playbooks-adapter-memory
//!
//! In-process implementations of the panel's ports, plus the TOML files
//! used to feed them.
//!
//! | Type | Port | Backing |
//! |------|------|---------|
//! | [`InMemoryPlaybookRepository`] | `PlaybookRepository` | `Mutex<HashMap>` |
//! | [`InMemoryUserDirectory`] | `UserDirectory` | fixed user list |
//! | [`CatalogLocalizer`] | `Localizer` | TOML message catalog |
//!
//! [`Seed`] loads an initial playbook and its team members from TOML.
//!
//! ## Dependency rule
//!
//! Depends on `playbooks-app` (port traits) and `playbooks-domain` only.

mod catalog;
mod error;
mod playbook_repo;
mod seed;
mod user_directory;

pub use catalog::CatalogLocalizer;
pub use error::MemoryAdapterError;
pub use playbook_repo::InMemoryPlaybookRepository;
pub use seed::Seed;
pub use user_directory::InMemoryUserDirectory;
