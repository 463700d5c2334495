//! # playbooks-app
//!
//! Application layer — the automation settings panel and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PlaybookGateway` — accept sparse update intents (fire-and-forget)
//!   - `PlaybookRepository` — load & save playbook snapshots
//!   - `SnapshotPublisher` — announce fresh snapshots to panels
//!   - `UserDirectory` — team-scoped user search and pagination
//!   - `Localizer` — map message descriptors to display text
//! - Define the **driving side**: the `AutomationPanel`, which maps UI events
//!   to update intents and re-derives its view from every fresh snapshot
//! - Provide the **optimistic proxy mirror** used by interactive sub-widgets
//! - Provide **in-process infrastructure** (snapshot bus, task dispatcher)
//! - Provide the **server-side use-case** (`PlaybookService`) that merges
//!   intents into snapshots
//!
//! ## Dependency rule
//! Depends on `playbooks-domain` only (plus `tokio` for channels and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dispatch;
pub mod intents;
pub mod messages;
pub mod panel;
pub mod ports;
pub mod proxy;
pub mod services;
pub mod snapshot_bus;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;
