//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod gateway;
pub mod localizer;
pub mod snapshot;
pub mod storage;
pub mod user_directory;

pub use gateway::PlaybookGateway;
pub use localizer::{DefaultMessages, Localizer};
pub use snapshot::SnapshotPublisher;
pub use storage::PlaybookRepository;
pub use user_directory::{PROFILE_CHUNK_SIZE, UserDirectory};
